mod common;

use auth::SigningSecret;
use auth::TokenIssuer;
use auth::TokenVerifier;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::PASSWORD;
use common::TEST_SECRET;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_login_returns_user_and_token() {
    let app = TestApp::spawn().await;
    app.register("alice").await;

    let response = app.login("alice", PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert!(body["data"]["user"].get("password_hash").is_none());

    let token = body["data"]["token"].as_str().unwrap();
    let claims = TokenVerifier::new(&SigningSecret::new(TEST_SECRET).unwrap())
        .verify(token)
        .expect("Issued token does not verify");
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.uid, body["data"]["user"]["id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("alice").await;

    let wrong_password = app.login("alice", "wrong-pw").await;
    let unknown_user = app.login("mallory", PASSWORD).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(
        wrong_password["data"]["message"],
        "Invalid username or password"
    );
    assert!(wrong_password["data"].get("token").is_none());
}

#[tokio::test]
async fn test_login_with_store_down_is_unavailable() {
    let app = TestApp::spawn().await;
    app.register("alice").await;
    app.users.take_offline();

    let response = app.login("alice", PASSWORD).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let app = TestApp::spawn().await;

    let response = app.get("/movies").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Missing bearer token");
}

#[tokio::test]
async fn test_protected_route_with_other_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/movies")
        .basic_auth("alice", Some(PASSWORD))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Missing bearer token");
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;
    app.register("alice").await;
    let principal = app.users.principal("alice");
    let token = app
        .authenticator
        .issuer()
        .issue_at(&principal, Utc::now() - Duration::days(8))
        .unwrap();

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Token expired");
}

#[tokio::test]
async fn test_protected_route_with_foreign_secret() {
    let app = TestApp::spawn().await;
    app.register("alice").await;
    let principal = app.users.principal("alice");
    let foreign = SigningSecret::new("another-secret-key-that-is-32-bytes-long").unwrap();
    let token = TokenIssuer::new(&foreign, Duration::days(7))
        .unwrap()
        .issue(&principal)
        .unwrap();

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_token_of_deleted_user_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app
        .delete("/users/alice")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_handler_never_runs_on_rejection() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;
    let tampered = format!("{}x", token);

    let response = app
        .delete("/users/alice")
        .bearer_auth(&tampered)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.users.contains("alice"));
}

#[tokio::test]
async fn test_scheme_is_case_insensitive() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app
        .get("/movies")
        .header("Authorization", format!("bearer {}", token))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_guard_store_outage_is_unavailable() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;
    app.users.take_offline();

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
