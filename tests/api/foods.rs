use serde_json::Value;

use crate::helpers::TestApp;

#[actix_web::test]
async fn duplicate_food_in_same_menu_returns_409(){
    let app = TestApp::spawn_authorized_app().await;
    let menu_id = app.create_menu("Dinner").await;
    app.create_food(&menu_id, "Pasta", 12.5).await;

    let response = app.post("/foods", &serde_json::json!({
        "name": "Pasta",
        "price": 10.0,
        "menu_id": menu_id
    })).await;
    assert_eq!(response.status().as_u16(), 409);

    // the same name is fine in another menu
    let other_menu = app.create_menu("Lunch").await;
    app.create_food(&other_menu, "Pasta", 9.0).await;
}

#[actix_web::test]
async fn food_for_unknown_menu_returns_404(){
    let app = TestApp::spawn_authorized_app().await;

    let response = app.post("/foods", &serde_json::json!({
        "name": "Pasta",
        "price": 10.0,
        "menu_id": "no-such-menu"
    })).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn food_with_non_positive_price_returns_400(){
    let app = TestApp::spawn_authorized_app().await;
    let menu_id = app.create_menu("Dinner").await;

    let response = app.post("/foods", &serde_json::json!({
        "name": "Water",
        "price": 0.0,
        "menu_id": menu_id
    })).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn foods_by_menu_lists_only_that_menu(){
    let app = TestApp::spawn_authorized_app().await;
    let dinner = app.create_menu("Dinner").await;
    let lunch = app.create_menu("Lunch").await;
    app.create_food(&dinner, "Pasta", 12.5).await;
    app.create_food(&dinner, "Steak", 30.0).await;
    app.create_food(&lunch, "Salad", 8.0).await;

    let body: Value = app.get(&format!("/foods/menu/{}", dinner)).await.json().await.unwrap();
    assert_eq!(body["pagination"]["total_foods"], 2);

    let missing = app.get("/foods/menu/no-such-menu").await;
    assert_eq!(missing.status().as_u16(), 404);
}
