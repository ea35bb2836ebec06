mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!",
            "country": "Italy"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["country"], "Italy");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_register_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    // Try to register with a different username but the same email
    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola2",
            "email": "nicola@example.com",
            "password": "pass_word!2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_user_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "n",
            "email": "nicola@example.com",
            "password": "pass_word"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_register_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "Correct_Password!")
        .await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nonexistent@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown email and wrong password are indistinguishable to the caller
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_get_profile_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_profile_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/users/me", "invalid.token.here")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_profile_expired_token() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    // Correctly signed, already past its expiration instant
    let expired_token = app
        .authenticator
        .issue_token("nicola@example.com", Duration::seconds(-10))
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/api/users/me", &expired_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola@example.com", "pass_word!").await;

    let response = app
        .patch_authenticated("/api/users/me", &token)
        .json(&json!({
            "address": "42 Updated Street",
            "country": "France"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["address"], "42 Updated Street");
    assert_eq!(body["data"]["country"], "France");
    assert_eq!(body["data"]["username"], "nicola");
}

#[tokio::test]
async fn test_update_profile_password_change() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "old_password!")
        .await;
    let token = app.login("nicola@example.com", "old_password!").await;

    let response = app
        .patch_authenticated("/api/users/me", &token)
        .json(&json!({
            "password": "new_password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works
    let old_login = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "old_password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(old_login.status(), StatusCode::UNAUTHORIZED);

    // New password does
    app.login("nicola@example.com", "new_password!").await;
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    app.register_user("marco", "marco@example.com", "pass_word!")
        .await;

    let token = app.login("nicola@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"].as_array().expect("Expected a user list");
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let target_id = app
        .register_user("marco", "marco@example.com", "pass_word!")
        .await;

    let token = app.login("nicola@example.com", "pass_word!").await;

    let response = app
        .delete_authenticated(&format!("/api/users/{}", target_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    // Deleted user can no longer log in
    let login = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "marco@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(login.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola@example.com", "pass_word!").await;

    let fake_uuid = uuid::Uuid::new_v4().to_string();
    let response = app
        .delete_authenticated(&format!("/api/users/{}", fake_uuid), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_user_workflow() {
    let app = TestApp::spawn().await;

    // 1. Register
    let create_response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create_response.status(), StatusCode::CREATED);

    // 2. Login
    let token = app.login("nicola@example.com", "pass_word!").await;

    // 3. Access protected endpoint
    let profile_response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(profile_response.status(), StatusCode::OK);

    let profile_body: serde_json::Value = profile_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(profile_body["data"]["username"], "nicola");

    // 4. Update profile
    let update_response = app
        .patch_authenticated("/api/users/me", &token)
        .json(&json!({
            "email": "updated@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(update_response.status(), StatusCode::OK);

    // 5. Try to access with invalid token - should fail
    let invalid_response = app
        .get_authenticated("/api/users/me", "invalid")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(invalid_response.status(), StatusCode::UNAUTHORIZED);
}
