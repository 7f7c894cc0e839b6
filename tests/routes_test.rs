use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use moodtracks::{
    config::Config,
    server::{AppState, build_router},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health_reports_credentials() {
    let app = build_router(AppState::new(Config::default()));
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "moodtracks");
    assert_eq!(body["credentials"], false);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_moods_lists_the_table() {
    let app = build_router(AppState::new(Config::default()));
    let response = app.oneshot(get("/moods")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let moods = body["moods"].as_array().unwrap();
    let names: Vec<&str> = moods.iter().map(|m| m["mood"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec!["happy", "sad", "energetic", "chill", "romantic", "angry"]
    );
    assert_eq!(moods[4]["acousticness"], 0.7);
    assert!(moods[0]["acousticness"].is_null());
}

#[tokio::test]
async fn test_index_serves_html() {
    let app = build_router(AppState::new(Config::default()));
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("/recommend"));
}

#[tokio::test]
async fn test_recommend_requires_post() {
    let app = build_router(AppState::new(Config::default()));
    let response = app.oneshot(get("/recommend")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
