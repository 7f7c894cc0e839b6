use axum::response::{Html, Json};
use serde_json::{Value, json};

use crate::mood;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn moods() -> Json<Value> {
    Json(json!({ "moods": mood::profiles() }))
}
