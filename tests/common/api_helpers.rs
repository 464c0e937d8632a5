use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use policy_api::{create_app, state::AppState};
use policy_shared::config::AppConfig;
use policy_shared::models::account::seed_accounts;

use super::mocks::MockAccountRepository;

pub const TEST_SECRET: &str = "test-secret-key";

/// A router wired to an in-memory store and a throwaway frontend directory.
pub struct TestContext {
    pub app: Router,
    pub state: AppState,
    pub repository: MockAccountRepository,
    pub frontend_dir: TempDir,
}

impl TestContext {
    /// Store populated by the startup bootstrap with the seed accounts.
    pub async fn seeded() -> Self {
        let ctx = Self::with_repository(MockAccountRepository::new());
        let written = ctx
            .state
            .account_service
            .bootstrap(&seed_accounts())
            .await
            .expect("bootstrap should succeed against the in-memory store");
        assert_eq!(written, 2);
        ctx
    }

    pub fn with_repository(repository: MockAccountRepository) -> Self {
        let frontend_dir = tempfile::tempdir().expect("Failed to create frontend dir");
        std::fs::write(
            frontend_dir.path().join("index.html"),
            "<html><body>policy lookup</body></html>",
        )
        .expect("Failed to write index.html");

        let dir = frontend_dir.path().to_string_lossy().to_string();
        let config = AppConfig::from_lookup(|name| match name {
            "SECRET_KEY" => Some(TEST_SECRET.to_string()),
            "FRONTEND_DIR" => Some(dir.clone()),
            _ => None,
        })
        .expect("test configuration should parse");

        let state = AppState::new(&config, Arc::new(repository.clone()));
        let app = create_app(state.clone(), &config.frontend_dir);

        TestContext {
            app,
            state,
            repository,
            frontend_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, body.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(request).await;
        let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
            panic!(
                "Response body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&body)
            )
        });
        (status, json)
    }

    /// Logs in and returns the issued token, failing the test otherwise.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .send_json(post_json(
                "/api/login",
                None,
                &serde_json::json!({ "username": username, "password": password }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["token"]
            .as_str()
            .expect("login response should carry a token")
            .to_string()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, authorization: Option<&str>, body: &Value) -> Request<Body> {
    post_raw(uri, authorization, &body.to_string(), "application/json")
}

pub fn post_raw(
    uri: &str,
    authorization: Option<&str>,
    body: &str,
    content_type: &str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
