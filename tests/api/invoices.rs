use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use hotel::schema::orders;
use serde_json::Value;

use crate::helpers::TestApp;

// Order on a reserved table with one item worth 25.0, returns the order id
async fn order_with_items(app: &TestApp) -> String{
    let table_id = app.create_reserved_table(1).await;
    let order_id = app.create_order(&table_id).await;
    let menu_id = app.create_menu("Dinner").await;
    let pasta = app.create_food(&menu_id, "Pasta", 12.5).await;

    let response = app.post("/orderitems", &serde_json::json!({
        "order_id": order_id,
        "table_id": table_id,
        "items": { pasta: 2 }
    })).await;
    assert_eq!(response.status().as_u16(), 201);

    order_id
}

fn order_status(app: &TestApp, order_id: &str) -> String{
    let mut conn = app.pool.get().unwrap();
    orders::table
        .filter(orders::order_id.eq(order_id))
        .select(orders::status)
        .first(&mut conn)
        .unwrap()
}

#[actix_web::test]
async fn paid_invoice_marks_order_paid(){
    let app = TestApp::spawn_authorized_app().await;
    let order_id = order_with_items(&app).await;

    let response = app.post("/invoices", &serde_json::json!({
        "order_id": order_id,
        "payment_method": "CARD",
        "payment_status": "PAID"
    })).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["total_price"], 25.0);
    assert!(body["data"]["payment_date"].is_string());
    assert_eq!(order_status(&app, &order_id), "Order Paid");
}

#[actix_web::test]
async fn pending_invoice_leaves_order_alone(){
    let app = TestApp::spawn_authorized_app().await;
    let order_id = order_with_items(&app).await;

    let response = app.post("/invoices", &serde_json::json!({ "order_id": order_id })).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["payment_status"], "PENDING");
    assert_eq!(order_status(&app, &order_id), "Order Placed");

    let pending: Value = app.get("/invoices/status/pending").await.json().await.unwrap();
    assert_eq!(pending["pagination"]["total_invoices"], 1);

    // paying later cascades too
    let invoice_id = body["data"]["invoice_id"].as_str().unwrap();
    let paid = app.patch(&format!("/invoices/{}", invoice_id), &serde_json::json!({ "payment_status": "PAID" })).await;
    assert_eq!(paid.status().as_u16(), 200);
    assert_eq!(order_status(&app, &order_id), "Order Paid");

    let by_order = app.get(&format!("/invoices/order/{}", order_id)).await;
    assert_eq!(by_order.status().as_u16(), 200);
}

#[actix_web::test]
async fn invoice_validation(){
    let app = TestApp::spawn_authorized_app().await;

    let missing_order = app.post("/invoices", &serde_json::json!({ "payment_status": "PAID" })).await;
    assert_eq!(missing_order.status().as_u16(), 400);

    let unknown_order = app.post("/invoices", &serde_json::json!({ "order_id": "no-such-order" })).await;
    assert_eq!(unknown_order.status().as_u16(), 404);

    let order_id = order_with_items(&app).await;
    let bad_method = app.post("/invoices", &serde_json::json!({
        "order_id": order_id,
        "payment_method": "CHEQUE"
    })).await;
    assert_eq!(bad_method.status().as_u16(), 400);
}
