mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_welcome_is_public() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Welcome to my movie API!");
}

#[tokio::test]
async fn test_static_documentation_is_served() {
    let app = TestApp::spawn().await;

    let response = app.get("/documentation.html").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Movie API"));
}

#[tokio::test]
async fn test_list_movies() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_movies_empty_catalogue() {
    let app = TestApp::spawn_with_movies(vec![]).await;
    let token = app.register_and_login("alice").await;

    let response = app.get("/movies").bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "No movies found");
}

#[tokio::test]
async fn test_get_movie_by_title() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app
        .get("/movies/Inception")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "Inception");
    assert_eq!(body["data"]["director"]["name"], "Christopher Nolan");

    let response = app
        .get("/movies/Unknown")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_genre_by_title() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app
        .get("/movies/genre/Alien")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Horror");
}

#[tokio::test]
async fn test_movies_by_director() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("alice").await;

    let response = app
        .get("/movies/director/Christopher%20Nolan")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = app
        .get("/movies/director/Nobody")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
}
