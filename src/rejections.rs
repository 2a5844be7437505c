use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};
use rust_i18n::t;

use crate::views;

#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    Forbidden,
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Input(detail) => {
                tracing::warn!("bad request: {detail}");
                (StatusCode::BAD_REQUEST, t!("error.bad_request"))
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, t!("error.forbidden")),
            AppError::NotFound => (StatusCode::NOT_FOUND, t!("error.not_found")),
        };

        (code, error_page(&message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        message,
        html! {
            h1 { (message) }
        },
    )
}

pub trait ResultExt<T> {
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Input(message)
        })
    }
}
