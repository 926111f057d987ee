use diesel::{QueryDsl, RunQueryDsl};
use hotel::schema::menus;

use crate::helpers::TestApp;

#[actix_web::test]
async fn menu_names_are_unique_ignoring_case(){
    let app = TestApp::spawn_authorized_app().await;
    app.create_menu("Summer Specials").await;

    let response = app.post("/menus", &serde_json::json!({
        "name": "summer specials",
        "category": "Dinner"
    })).await;
    assert_eq!(response.status().as_u16(), 409);

    let mut conn = app.pool.get().unwrap();
    let count: i64 = menus::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 1);
}

#[actix_web::test]
async fn menu_with_end_before_start_returns_400(){
    let app = TestApp::spawn_authorized_app().await;

    let response = app.post("/menus", &serde_json::json!({
        "name": "Brunch",
        "category": "Breakfast",
        "start_date": "2025-06-01T00:00:00Z",
        "end_date": "2025-05-01T00:00:00Z"
    })).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn update_menu_window_is_checked_against_stored_dates(){
    let app = TestApp::spawn_authorized_app().await;

    let response = app.post("/menus", &serde_json::json!({
        "name": "Brunch",
        "category": "Breakfast",
        "start_date": "2025-06-01T00:00:00Z"
    })).await;
    assert_eq!(response.status().as_u16(), 201);
    let menu_id = crate::helpers::data_id(response, "menu_id").await;

    let bad = app.patch(&format!("/menus/{}", menu_id), &serde_json::json!({
        "end_date": "2025-05-01T00:00:00Z"
    })).await;
    assert_eq!(bad.status().as_u16(), 400);

    let good = app.patch(&format!("/menus/{}", menu_id), &serde_json::json!({
        "end_date": "2025-07-01T00:00:00Z"
    })).await;
    assert_eq!(good.status().as_u16(), 200);
}
