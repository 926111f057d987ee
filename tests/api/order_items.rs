use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use hotel::schema::{order_items, orders};
use serde_json::Value;

use crate::helpers::TestApp;

#[actix_web::test]
async fn order_item_totals_prices_and_places_order(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 12.5).await;
    let wine = app.create_food(&menu_id, "Wine", 7.0).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta: 2, wine: 3 }
    })).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["total_price"], 46.0);
    assert_eq!(body["data"]["items"]["Pasta"], 2);
    assert_eq!(body["data"]["items"]["Wine"], 3);

    let mut conn = app.pool.get().unwrap();
    let status: String = orders::table
        .filter(orders::order_id.eq(&order_id))
        .select(orders::status)
        .first(&mut conn)
        .unwrap();
    assert_eq!(status, "Order Placed");

    let of_order: Value = app.get(&format!("/orderitems/{}/order", order_id)).await.json().await.unwrap();
    assert_eq!(of_order["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn unknown_food_returns_400_and_persists_nothing(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 12.5).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta: 1, "ghost-food": 2 }
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("ghost-food"));

    let mut conn = app.pool.get().unwrap();
    let count: i64 = order_items::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);

    let status: String = orders::table
        .filter(orders::order_id.eq(&order_id))
        .select(orders::status)
        .first(&mut conn)
        .unwrap();
    assert_eq!(status, "Order Pending");
}

#[actix_web::test]
async fn item_for_wrong_table_returns_400(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let other_table = app.create_reserved_table(2).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 12.5).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": other_table,
        "items": { pasta: 1 }
    })).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn quantity_update_moves_total(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 10.0).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta.clone(): 1 }
    })).await;
    let item_id = crate::helpers::data_id(response, "order_item_id").await;

    let updated = app.patch(&format!("/orderitems/{}", item_id), &serde_json::json!({
        "items": { pasta: 3 }
    })).await;
    assert_eq!(updated.status().as_u16(), 200);

    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["data"]["total_price"], 30.0);
    assert_eq!(body["data"]["items"]["Pasta"], 3);
}

#[actix_web::test]
async fn items_of_paid_order_cannot_change(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 10.0).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta.clone(): 1 }
    })).await;
    let item_id = crate::helpers::data_id(response, "order_item_id").await;

    let invoice = app.post("/invoices", &serde_json::json!({
        "order_id": order_id,
        "payment_status": "PAID"
    })).await;
    assert_eq!(invoice.status().as_u16(), 201);

    let updated = app.patch(&format!("/orderitems/{}", item_id), &serde_json::json!({
        "items": { pasta: 5 }
    })).await;
    assert_eq!(updated.status().as_u16(), 409);

    let deleted = app.delete(&format!("/orderitems/{}", item_id)).await;
    assert_eq!(deleted.status().as_u16(), 409);

    let mut conn = app.pool.get().unwrap();
    let total: f64 = order_items::table
        .filter(order_items::order_item_id.eq(&item_id))
        .select(order_items::total_price)
        .first(&mut conn)
        .unwrap();
    assert_eq!(total, 10.0);
}

#[actix_web::test]
async fn same_named_foods_with_overflowing_quantity_return_400(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let breakfast = app.create_menu("Breakfast").await;
    let dinner = app.create_menu("Dinner").await;
    let morning_tea = app.create_food(&breakfast, "Tea", 2.0).await;
    let evening_tea = app.create_food(&dinner, "Tea", 3.0).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { morning_tea: 2_000_000_000, evening_tea: 2_000_000_000 }
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let mut conn = app.pool.get().unwrap();
    let count: i64 = order_items::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn order_items_list_reports_total(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 10.0).await;

    app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta: 1 }
    })).await;

    let body: Value = app.get("/orderitems").await.json().await.unwrap();
    assert_eq!(body["pagination"]["total_orderitems"], 1);
}
