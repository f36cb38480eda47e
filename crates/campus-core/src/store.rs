//! The `CampusStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `campus-store-sqlite`).
//! The managers in this crate and the REST layer depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  buzz::Buzz,
  faculty::{Collection, Faculty},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`CampusStore::list_faculty`].
#[derive(Debug, Clone, Default)]
pub struct FacultyQuery {
  /// Restrict to one department (exact match).
  pub department: Option<String>,
  /// Load the six child collections; otherwise they come back empty.
  pub hydrate:    bool,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Campus store backend.
///
/// Every faculty write is atomic: the faculty row and its children are
/// written or removed together, never partially. The department-head
/// uniqueness check runs inside the same transaction as the write that
/// depends on it.
///
/// Backend errors must convert into [`crate::Error`] so that domain failures
/// (conflicts, missing rows) surface with their proper kind.
pub trait CampusStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static + Into<crate::Error>;

  // ── Faculty ───────────────────────────────────────────────────────────

  /// Persist a new aggregate, children included.
  ///
  /// Fails with a conflict if `faculty` is a department head and another
  /// head already exists for its department, or if its username is taken.
  fn insert_faculty(
    &self,
    faculty: Faculty,
  ) -> impl Future<Output = Result<Faculty, Self::Error>> + Send + '_;

  /// Retrieve a hydrated aggregate by id. Returns `None` if not found.
  fn get_faculty(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Faculty>, Self::Error>> + Send + '_;

  /// List faculty in insertion order.
  fn list_faculty(
    &self,
    query: FacultyQuery,
  ) -> impl Future<Output = Result<Vec<Faculty>, Self::Error>> + Send + '_;

  /// Overwrite the scalar fields of an existing aggregate and replace the
  /// listed child collections. Collections not listed are left untouched.
  ///
  /// The department-head check excludes the record itself.
  fn update_faculty(
    &self,
    faculty: Faculty,
    replaced: Vec<Collection>,
  ) -> impl Future<Output = Result<Faculty, Self::Error>> + Send + '_;

  /// Remove a faculty member and all of its children. Returns `false` if no
  /// such faculty existed.
  fn delete_faculty(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The department head of `department`, if any (exact match).
  fn find_department_head(
    &self,
    department: String,
  ) -> impl Future<Output = Result<Option<Faculty>, Self::Error>> + Send + '_;

  /// The department head holding `username`, if any.
  fn find_head_by_username(
    &self,
    username: String,
  ) -> impl Future<Output = Result<Option<Faculty>, Self::Error>> + Send + '_;

  // ── Buzz ──────────────────────────────────────────────────────────────

  fn insert_buzz(
    &self,
    buzz: Buzz,
  ) -> impl Future<Output = Result<Buzz, Self::Error>> + Send + '_;

  fn get_buzz(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Buzz>, Self::Error>> + Send + '_;

  /// All buzz posts, newest first.
  fn list_buzz(
    &self,
  ) -> impl Future<Output = Result<Vec<Buzz>, Self::Error>> + Send + '_;

  /// Overwrite content, design and `updated_at` of an existing post.
  fn update_buzz(
    &self,
    buzz: Buzz,
  ) -> impl Future<Output = Result<Buzz, Self::Error>> + Send + '_;

  /// Returns `false` if no such post existed.
  fn delete_buzz(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
