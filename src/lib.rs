rust_i18n::i18n!("locales", fallback = "en");

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod session;
pub mod source;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{config::QuizConfig, quiz::Quiz, rejections::AppError, source::QuestionSource};

#[derive(Clone)]
pub struct AppState {
    pub quiz: Arc<Quiz>,
}

impl AppState {
    pub fn new(config: QuizConfig, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            quiz: Arc::new(Quiz::new(config, source)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest(names::STATIC_URL, statics::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::Method;
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) && !extractors::is_htmx(req.headers()) {
        tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
        return AppError::Forbidden.into_response();
    }

    next.run(req).await
}
