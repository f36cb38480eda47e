//! Error types for `campus-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("faculty not found: {0}")]
  FacultyNotFound(Uuid),

  #[error("buzz not found: {0}")]
  BuzzNotFound(Uuid),

  /// A uniqueness rule was violated (department head, username).
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("invalid department head credentials")]
  Unauthorized,

  #[error("validation error: {0}")]
  Validation(String),

  #[error("password hashing failed: {0}")]
  Password(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn department_head_taken(department: &str) -> Self {
    Self::Conflict(format!(
      "department {department:?} already has a head"
    ))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
