use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{router::router, state::AppState};

mod patron;

/// Search URL used when a test never reaches the cocktail API.
const UNUSED_SEARCH_URL: &str = "http://127.0.0.1:9/search.php";

/// Builds the full application router over the given database and cocktail search URL.
fn app(db: &DatabaseConnection, search_url: &str) -> Router {
    let search_url = Url::parse(search_url).unwrap();
    router().with_state(AppState::new(db.clone(), reqwest::Client::new(), search_url))
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
