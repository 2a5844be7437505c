use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use quizrush::{
    config::QuizConfig,
    models::{Question, Questions},
    router,
    source::{QuestionRequest, QuestionSource, SourceError},
    AppState,
};
use tower::ServiceExt;

/// Serves a fixed batch, failing the first `failures` fetches.
pub struct FakeSource {
    batch: Questions,
    failures: usize,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(batch: Questions) -> Self {
        Self::failing_first(batch, 0)
    }

    pub fn failing_first(batch: Questions, failures: usize) -> Self {
        Self {
            batch,
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuestionSource for FakeSource {
    async fn fetch_questions(&self, _request: &QuestionRequest) -> Result<Questions, SourceError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(SourceError::MalformedResponse(
                "response code 1 (not enough questions for the query)".to_string(),
            ));
        }
        Ok(self.batch.clone())
    }
}

pub fn question(text: &str, correct: &str) -> Question {
    Question::new(
        text.to_string(),
        vec!["Wrong 1".to_string(), "Wrong 2".to_string(), "Wrong 3".to_string()],
        correct.to_string(),
    )
}

pub fn two_questions() -> Questions {
    vec![question("First question", "A"), question("Second question", "B")]
}

pub fn app(source: FakeSource, config: QuizConfig) -> Router {
    router(AppState::new(config, Arc::new(source)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (u16, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");

    let status = resp.status().as_u16();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
    )
}
