//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use playlist_core::PlaylistStore;
use playlist_server::{create_router, services::AuthService, AppState};
use playlist_storage::MemoryStore;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

/// Router over an in-memory store, plus handles for direct inspection
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn PlaylistStore>,
    pub auth_service: Arc<AuthService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn PlaylistStore>) -> Self {
        let auth_service = Arc::new(AuthService::new(TEST_SECRET.to_string(), 1));
        let app_state = AppState::new(Arc::clone(&store), Arc::clone(&auth_service));

        Self {
            router: create_router(app_state),
            store,
            auth_service,
        }
    }

    /// Send a request and decode the JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = token {
            builder = builder.header("token", token);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, json)
    }

    /// POST /api/users/authentication and return the issued token
    pub async fn authenticate(&self) -> String {
        let (status, body) = self
            .send(Method::POST, "/api/users/authentication", None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().expect("token in response").to_string()
    }

    /// Create a playlist and return its id
    pub async fn create_playlist(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/playlist",
                Some(token),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "body: {body}");
        body["playlist"]["id"].as_str().unwrap().to_string()
    }

    /// Add a song and return its id
    pub async fn add_song(&self, token: &str, playlist_id: &str, track: &str) -> String {
        let (status, body) = self
            .send(
                Method::PUT,
                &format!("/api/playlist/{playlist_id}/song"),
                Some(token),
                Some(fixtures::song(track)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "body: {body}");
        body["song"]["id"].as_str().unwrap().to_string()
    }
}

/// Test data
pub mod fixtures {
    use serde_json::{json, Value};

    pub const PLAYLIST_NAME: &str = "New Test Playlist";
    pub const UPDATED_NAME: &str = "Updated Test Playlist";

    pub fn song(track: &str) -> Value {
        json!({
            "track": track,
            "artist": "New Artist",
            "album": "New Album",
        })
    }
}
