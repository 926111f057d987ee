use diesel::{QueryDsl, RunQueryDsl};
use hotel::schema::orders;
use serde_json::Value;

use crate::helpers::TestApp;

#[actix_web::test]
async fn order_on_unreserved_table_returns_400_and_persists_nothing(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_table(1).await;

    let response = app.post("/orders", &serde_json::json!({ "table_id": table_id })).await;
    assert_eq!(response.status().as_u16(), 400);

    let mut conn = app.pool.get().unwrap();
    let count: i64 = orders::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn order_on_unknown_table_returns_404(){
    let app = TestApp::spawn_authorized_app().await;

    let response = app.post("/orders", &serde_json::json!({ "table_id": "no-such-table" })).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn new_order_is_pending_and_owned_by_caller(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;

    let response = app.post("/orders", &serde_json::json!({ "table_id": table_id })).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Order Pending");

    let users: Value = app.get("/users").await.json().await.unwrap();
    assert_eq!(body["data"]["user_id"], users["data"][0]["user_id"]);

    let by_table: Value = app.get(&format!("/orders/table/{}", table_id)).await.json().await.unwrap();
    assert_eq!(by_table["pagination"]["total_orders"], 1);
}

#[actix_web::test]
async fn status_update_rejects_unknown_status(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;

    let bad = app.patch(&format!("/orders/{}/status", order_id), &serde_json::json!({ "status": "Eaten" })).await;
    assert_eq!(bad.status().as_u16(), 400);

    let good = app.patch(&format!("/orders/{}/status", order_id), &serde_json::json!({ "status": "Order Confirmed" })).await;
    assert_eq!(good.status().as_u16(), 200);
    let body: Value = good.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Order Confirmed");
}

#[actix_web::test]
async fn moving_order_to_occupied_table_returns_409(){
    let app = TestApp::spawn_authorized_app().await;
    let first_table = app.create_reserved_table(1).await;
    let second_table = app.create_reserved_table(2).await;
    let order_id = app.create_order(&first_table).await;
    app.create_order(&second_table).await;

    let response = app.patch(&format!("/orders/{}", order_id), &serde_json::json!({ "table_id": second_table })).await;
    assert_eq!(response.status().as_u16(), 409);

    let free_table = app.create_reserved_table(3).await;
    let moved = app.patch(&format!("/orders/{}", order_id), &serde_json::json!({ "table_id": free_table })).await;
    assert_eq!(moved.status().as_u16(), 200);
}
