#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cinedex_db::models::movie::Movie;
use cinedex_db::MovieStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::router::{build_app_router, with_middleware};
use cinedex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_movies: false,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: MovieStore) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Put `routes` behind the production middleware stack over an empty store.
pub fn build_test_app_with_routes(routes: Router<AppState>) -> Router {
    let config = test_config();
    let state = AppState {
        store: cinedex_db::create_store(),
        config: Arc::new(config.clone()),
    };
    with_middleware(routes, &config).with_state(state)
}

/// Router over a fresh, empty store.
pub fn empty_app() -> Router {
    build_test_app(cinedex_db::create_store())
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Decode a JSON array of movies.
pub async fn body_movies(response: Response<Body>) -> Vec<Movie> {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn aftersun_json() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "title": "Aftersun",
        "overview": "A long enough overview text here",
        "year": 2022,
        "rating": 7.2,
        "category": "Drama"
    })
}
