//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests. Every test
//! gets its own in-memory SQLite database, so no external services or
//! cleanup are needed.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use meal_tracker_backend::{config::AppConfig, db, routes, state::AppState};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory database
    pub async fn new() -> Self {
        // One connection so every statement sees the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        db::ensure_schema(&pool)
            .await
            .expect("Failed to create schema");

        let state = AppState::new(pool.clone(), AppConfig::default());
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Sign up a default user and return the id from a follow-up login
    pub async fn signup_alice(&self) -> i64 {
        let (status, _) = self
            .post(
                "/signup",
                r#"{"name":"alice","password":"hunter2","age":30,"weight":70.0,"calorie_goal":2200}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self
            .post("/login", r#"{"name":"alice","password":"hunter2"}"#)
            .await;
        assert_eq!(status, StatusCode::OK);

        let user: serde_json::Value = serde_json::from_str(&body).unwrap();
        user["id"].as_i64().unwrap()
    }
}
