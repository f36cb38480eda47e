//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const REALM: &str = "campus";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<campus_core::Error> for ApiError {
  fn from(err: campus_core::Error) -> Self {
    use campus_core::Error as E;
    match err {
      E::FacultyNotFound(id) => Self::NotFound(format!("faculty {id} not found")),
      E::BuzzNotFound(id) => Self::NotFound(format!("buzz {id} not found")),
      E::Conflict(m) => Self::Conflict(m),
      E::Unauthorized => Self::Unauthorized,
      E::Validation(m) => Self::BadRequest(m),
      other => Self::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unauthorized => {
        let challenge = format!("Basic realm=\"{REALM}\"");
        return (
          StatusCode::UNAUTHORIZED,
          [(header::WWW_AUTHENTICATE, challenge)],
          Json(json!({ "error": "invalid credentials" })),
        )
          .into_response();
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
