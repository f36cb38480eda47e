//! JSON and multipart REST API for Campus.
//!
//! Exposes an axum [`Router`] backed by any [`CampusStore`]. CORS, body
//! limits and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let state = campus_api::AppState::new(Arc::new(store));
//! let app = campus_api::api_router(state);
//! ```

pub mod auth;
pub mod buzz;
pub mod error;
pub mod faculty;
pub mod form;

use std::sync::Arc;

use axum::{Router, routing::get};
use campus_core::{buzz::BuzzManager, faculty::FacultyManager, store::CampusStore};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers: one manager per aggregate,
/// both over the same store.
pub struct AppState<S> {
  pub faculty: FacultyManager<S>,
  pub buzz:    BuzzManager<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      faculty: self.faculty.clone(),
      buzz:    self.buzz.clone(),
    }
  }
}

impl<S: CampusStore> AppState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      faculty: FacultyManager::new(Arc::clone(&store)),
      buzz:    BuzzManager::new(store),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested or layered by the caller
/// regardless of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: CampusStore + 'static,
{
  Router::new()
    // Faculty
    .route("/faculty", get(faculty::list::<S>).post(faculty::create::<S>))
    .route(
      "/faculty/{id}",
      get(faculty::get_one::<S>)
        .patch(faculty::update::<S>)
        .delete(faculty::delete::<S>),
    )
    .route("/departments/{department}/head", get(faculty::department_head::<S>))
    // Department-head authentication
    .route("/auth/department-head", get(auth::department_head))
    // Buzz
    .route("/buzz", get(buzz::list::<S>).post(buzz::create::<S>))
    .route(
      "/buzz/{id}",
      get(buzz::get_one::<S>)
        .patch(buzz::update::<S>)
        .delete(buzz::delete::<S>),
    )
    .with_state(state)
}
