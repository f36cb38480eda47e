//! Error type for `campus-store-sqlite`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A stored column held a value the domain types cannot represent.
  #[error("decode error: {0}")]
  Decode(String),

  #[error("faculty not found: {0}")]
  FacultyNotFound(Uuid),

  #[error("buzz not found: {0}")]
  BuzzNotFound(Uuid),

  #[error("department {0:?} already has a head")]
  DepartmentHeadTaken(String),

  #[error("username {0:?} is already taken")]
  UsernameTaken(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for campus_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::FacultyNotFound(id) => Self::FacultyNotFound(id),
      Error::BuzzNotFound(id) => Self::BuzzNotFound(id),
      Error::DepartmentHeadTaken(department) => {
        Self::department_head_taken(&department)
      }
      Error::UsernameTaken(username) => {
        Self::Conflict(format!("username {username:?} is already taken"))
      }
      other => Self::Store(Box::new(other)),
    }
  }
}
