use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::generation::GenerationError;

use super::pages::render_error_fragment;

/// Ways a generate request can fail. All but `Render` are shown to the user
/// as an inline fragment with a link home.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Error: Please enter something!")]
    EmptyNeed,

    #[error("Error: {0} not set!")]
    MissingCredential(&'static str),

    #[error("LLM Init Error: {0}")]
    ClientInit(String),

    #[error("Generation Error: {0}")]
    Generation(GenerationError),

    #[error("template render failed")]
    Render(#[from] std::fmt::Error),
}

impl From<GenerationError> for PageError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::MissingCredential(var) => PageError::MissingCredential(var),
            GenerationError::ClientInit(msg) => PageError::ClientInit(msg),
            other => PageError::Generation(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Render(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
            other => Html(render_error_fragment(&other.to_string())).into_response(),
        }
    }
}
