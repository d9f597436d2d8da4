#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use quizgen_backend::config::Settings;
use quizgen_backend::error::GenerationError;
use quizgen_backend::groq::{CompletionBackend, CompletionParams};
use quizgen_backend::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Answers every call with the same canned text, or fails when `reply` is None.
pub struct FixedBackend {
    reply: Option<String>,
    calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
}

impl FixedBackend {
    pub fn failing() -> Arc<Self> {
        Arc::new(Self { reply: None, calls: AtomicUsize::new(0), last_prompt: Mutex::new(None) })
    }

    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self { reply: Some(reply.to_string()), calls: AtomicUsize::new(0), last_prompt: Mutex::new(None) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for FixedBackend {
    fn model(&self) -> &str {
        "test-model"
    }

    async fn complete_json(&self, system: &str, _params: CompletionParams) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(system.to_string());
        self.reply
            .clone()
            .ok_or(GenerationError::Upstream { status: 500, message: "upstream down".into() })
    }
}

pub fn router_with(backend: Arc<FixedBackend>) -> Router {
    let state = AppState::with_backend(backend, &Settings::default());
    build_router(Arc::new(state))
}

pub fn router_without_client() -> Router {
    build_router(Arc::new(AppState::from_settings(&Settings::default())))
}

pub async fn send(app: Router, req: Request<Body>) -> (u16, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status().as_u16();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
