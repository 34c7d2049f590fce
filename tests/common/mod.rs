//! Shared helpers for router integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use forum_accounts::api::{create_router_with_state, AppState};
use forum_accounts::config::{CorsConfig, PasswordConfig};
use forum_accounts::infrastructure::user::{AccountService, Argon2Hasher, InMemoryUserRepository};

/// Router over an empty in-memory store with a cheap hash cost
pub fn create_test_app() -> Router {
    let hasher = Argon2Hasher::from_config(&PasswordConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        output_len: 32,
    })
    .unwrap();

    let service = AccountService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(hasher));
    let state = AppState::new(Arc::new(service), CorsConfig::default());

    create_router_with_state(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Register a user and return its id
pub async fn register(app: &Router, username: &str, email: &str, password: &str) -> i64 {
    let response = send(
        app,
        "POST",
        "/api/users",
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    response.json["userId"].as_i64().unwrap()
}
