use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use hotel::schema::users;
use serde_json::Value;

use crate::helpers::{test_user, TestApp};

#[actix_web::test]
async fn signup_with_valid_data_returns_201_and_tokens(){
    let app = TestApp::spawn_app().await;

    let response = app.signup(&test_user("ada@hotel.com")).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["email"], "ada@hotel.com");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["refresh_token"].is_string());
    assert!(body["data"]["user"].get("password").is_none());

    let mut conn = app.pool.get().unwrap();
    let stored: String = users::table
        .filter(users::email.eq("ada@hotel.com"))
        .select(users::password)
        .first(&mut conn)
        .unwrap();

    assert_ne!(stored, "testpassword");
}

#[actix_web::test]
async fn signup_with_existing_email_returns_409(){
    let app = TestApp::spawn_app().await;

    let first = app.signup(&test_user("ada@hotel.com")).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.signup(&test_user("ada@hotel.com")).await;
    assert_eq!(second.status().as_u16(), 409);

    let mut conn = app.pool.get().unwrap();
    let count: i64 = users::table
        .filter(users::email.eq("ada@hotel.com"))
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(count, 1);
}

#[actix_web::test]
async fn signup_with_invalid_data_returns_400(){
    let app = TestApp::spawn_app().await;
    let cases = vec![
        (serde_json::json!({"first_name": "Ada", "last_name": "Lovelace", "email": "not-an-email", "password": "testpassword"}), "invalid email"),
        (serde_json::json!({"first_name": "Ada", "last_name": "Lovelace", "email": "ada@hotel.com", "password": "short"}), "short password"),
        (serde_json::json!({"last_name": "Lovelace", "email": "ada@hotel.com", "password": "testpassword"}), "missing first name"),
    ];

    for (body, case) in cases {
        let response = app.signup(&body).await;
        assert_eq!(response.status().as_u16(), 400, "signup did not fail with {}", case);
    }
}

#[actix_web::test]
async fn login_logout_revokes_token(){
    let app = TestApp::spawn_app().await;
    app.signup(&test_user("ada@hotel.com")).await;

    let response = app.login("ada@hotel.com", "testpassword").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let url = app.get_app_url();
    let users_response = app.api_client.get(format!("{}/users", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(users_response.status().as_u16(), 200);

    let logout_response = app.api_client.post(format!("{}/users/logout", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(logout_response.status().as_u16(), 200);

    let reused = app.api_client.get(format!("{}/users", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(reused.status().as_u16(), 401);
}

#[actix_web::test]
async fn login_with_wrong_password_returns_401(){
    let app = TestApp::spawn_app().await;
    app.signup(&test_user("ada@hotel.com")).await;

    let response = app.login("ada@hotel.com", "wrongpassword").await;
    assert_eq!(response.status().as_u16(), 401);

    let unknown = app.login("nobody@hotel.com", "testpassword").await;
    assert_eq!(unknown.status().as_u16(), 401);
}

#[actix_web::test]
async fn protected_route_without_token_returns_401(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/tables").await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn get_user_by_id(){
    let app = TestApp::spawn_authorized_app().await;

    let listed: Value = app.get("/users").await.json().await.unwrap();
    assert_eq!(listed["pagination"]["total_users"], 1);

    let user_id = listed["data"][0]["user_id"].as_str().unwrap();
    let response = app.get(&format!("/users/{}", user_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let missing = app.get("/users/does-not-exist").await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[actix_web::test]
async fn bearer_header_with_extra_spaces_returns_401(){
    let app = TestApp::spawn_authorized_app().await;
    let token = app.token.clone().unwrap();

    let response = app.api_client.get(format!("{}/tables", app.get_app_url()))
        .header("Authorization", format!("Bearer    {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
