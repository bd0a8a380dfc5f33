#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use thriftstore::clients::StripeClient;
use thriftstore::router::init_router;
use thriftstore::state::AppState;
use thriftstore_auth::issue_token;
use thriftstore_config::{CorsConfig, JwtConfig, PaymentConfig, ToggleSemantics};
use thriftstore_db::{Document, DocumentStore, Filter, MemoryStore};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: 3600,
    }
}

pub fn test_payment_config(api_base: &str, secret_key: Option<&str>) -> PaymentConfig {
    PaymentConfig {
        secret_key: secret_key.map(str::to_string),
        api_base: api_base.to_string(),
        currency: "usd".to_string(),
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: DocumentStore::in_memory(),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        payments: StripeClient::new(test_payment_config("http://127.0.0.1:9", None)),
        toggle: ToggleSemantics::Legacy,
    }
}

pub fn setup_test_app(state: &AppState) -> Router {
    init_router(state.clone())
}

pub fn memory(state: &AppState) -> &MemoryStore {
    state.store.memory().expect("tests run on the in-memory store")
}

pub fn generate_unique_email() -> String {
    format!("test-{}@thrift.test", Uuid::new_v4())
}

pub fn doc(value: Value) -> Document {
    value.as_object().cloned().expect("JSON object")
}

/// Inserts an account directly and returns its id.
pub async fn create_test_account(state: &AppState, email: &str, role: &str) -> String {
    state
        .store
        .collection("users")
        .insert_one(doc(json!({
            "userEmail": email,
            "userName": "Test User",
            "role": role,
            "isVerified": false
        })))
        .await
        .unwrap()
}

/// Inserts an account and returns a token for it.
pub async fn login_as(state: &AppState, role: &str) -> (String, String) {
    let email = generate_unique_email();
    create_test_account(state, &email, role).await;
    let token = issue_token(&email, &state.jwt_config).unwrap();
    (email, token)
}

pub async fn find_one(state: &AppState, collection: &str, id: &str) -> Option<Document> {
    state
        .store
        .collection(collection)
        .find_one(&Filter::by_id(id))
        .await
        .unwrap()
}

pub async fn count(state: &AppState, collection: &str) -> usize {
    state
        .store
        .collection(collection)
        .find(&Filter::new())
        .await
        .unwrap()
        .len()
}

/// Sends one request and returns the status and the body as JSON (plain
/// text bodies come back as a JSON string).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}
