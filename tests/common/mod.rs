#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use daily_quote::config::StorageConfig;
use daily_quote::db::SqliteQuoteStore;
use daily_quote::server::router::{QuoteState, quote_app};
use serde_json::Value;
use std::{
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

/// A SQLite file under the system temp dir, removed (with its WAL side files) on drop.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "daily-quote-{prefix}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        Self { path }
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            database_url: format!("sqlite:{}", self.path.display()),
            ..StorageConfig::default()
        }
    }

    pub async fn connect(&self) -> SqliteQuoteStore {
        SqliteQuoteStore::connect(&self.storage_config())
            .await
            .expect("failed to open quote store")
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = std::fs::remove_file(&wal_path);
        let _ = std::fs::remove_file(&shm_path);
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn build_app(store: &SqliteQuoteStore) -> NormalizePath<Router> {
    quote_app(QuoteState::new(Arc::new(store.clone())))
}

pub async fn send(app: &NormalizePath<Router>, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

pub fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body was not JSON")
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn post_quote(app: &NormalizePath<Router>, author: &str, text: &str) -> Value {
    let payload = serde_json::json!({ "author": author, "text": text }).to_string();
    let (status, body) = send(app, post_json("/quotes", payload)).await;
    assert_eq!(status, StatusCode::OK);
    json_body(&body)
}
