use serde_json::Value;

use crate::helpers::TestApp;

#[actix_web::test]
async fn reserve_twice_returns_409(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_table(1).await;

    let first = app.put(&format!("/tables/reserve/{}", table_id)).await;
    assert_eq!(first.status().as_u16(), 200);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Reserved");

    let second = app.put(&format!("/tables/reserve/{}", table_id)).await;
    assert_eq!(second.status().as_u16(), 409);
}

#[actix_web::test]
async fn unreserve_releases_table(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_reserved_table(1).await;

    let response = app.put(&format!("/tables/unreserve/{}", table_id)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "Not Reserved");

    let again = app.put(&format!("/tables/unreserve/{}", table_id)).await;
    assert_eq!(again.status().as_u16(), 409);
}

#[actix_web::test]
async fn unknown_table_returns_404(){
    let app = TestApp::spawn_authorized_app().await;

    assert_eq!(app.get("/tables/unknown").await.status().as_u16(), 404);
    assert_eq!(app.put("/tables/reserve/unknown").await.status().as_u16(), 404);
    assert_eq!(app.delete("/tables/unknown").await.status().as_u16(), 404);
}

#[actix_web::test]
async fn duplicate_table_number_returns_409(){
    let app = TestApp::spawn_authorized_app().await;
    app.create_table(7).await;

    let response = app.post("/tables", &serde_json::json!({ "table_number": 7, "number_of_guests": 2 })).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[actix_web::test]
async fn tables_are_paginated_and_filtered_by_status(){
    let app = TestApp::spawn_authorized_app().await;
    for number in 1..=3 {
        app.create_table(number).await;
    }
    app.create_reserved_table(4).await;

    let page: Value = app.get("/tables?page=2&recordPerPage=3").await.json().await.unwrap();
    assert_eq!(page["data"].as_array().unwrap().len(), 1);
    assert_eq!(page["pagination"]["current_page"], 2);
    assert_eq!(page["pagination"]["total_tables"], 4);
    assert_eq!(page["pagination"]["total_pages"], 2);

    // bad values fall back to the defaults
    let fallback: Value = app.get("/tables?page=abc&recordPerPage=-1").await.json().await.unwrap();
    assert_eq!(fallback["pagination"]["current_page"], 1);
    assert_eq!(fallback["pagination"]["records_per_page"], 10);

    let reserved: Value = app.get("/tables/reserved").await.json().await.unwrap();
    assert_eq!(reserved["pagination"]["total_tables"], 1);

    let unreserved: Value = app.get("/tables/unreserved").await.json().await.unwrap();
    assert_eq!(unreserved["pagination"]["total_tables"], 3);
}

#[actix_web::test]
async fn empty_update_returns_400(){
    let app = TestApp::spawn_authorized_app().await;
    let table_id = app.create_table(1).await;

    let response = app.patch(&format!("/tables/{}", table_id), &serde_json::json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let updated = app.patch(&format!("/tables/{}", table_id), &serde_json::json!({ "number_of_guests": 6 })).await;
    assert_eq!(updated.status().as_u16(), 200);
    let body: Value = updated.json().await.unwrap();
    assert_eq!(body["data"]["number_of_guests"], 6);
}

#[actix_web::test]
async fn huge_page_size_returns_single_page(){
    let app = TestApp::spawn_authorized_app().await;
    app.create_table(1).await;
    app.create_table(2).await;

    let response = app.get("/tables?recordPerPage=9223372036854775807").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total_pages"], 1);
}
