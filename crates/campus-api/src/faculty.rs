//! Handlers for `/faculty` and `/departments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/faculty` | Optional `?department=<name>&summary=true` |
//! | `POST`   | `/faculty` | Multipart form; 201 |
//! | `GET`    | `/faculty/{id}` | 404 if not found |
//! | `PATCH`  | `/faculty/{id}` | Multipart form, every part optional |
//! | `DELETE` | `/faculty/{id}` | `{"success":true,"message":...}` |
//! | `GET`    | `/departments/{department}/head` | 404 if the department has no head |

use axum::{
  Json,
  extract::{Multipart, Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  faculty::Faculty,
  store::{CampusStore, FacultyQuery},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError, form::FacultyForm};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub department: Option<String>,
  /// Skip child collections.
  #[serde(default)]
  pub summary:    bool,
}

/// `GET /faculty[?department=<name>][&summary=true]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Faculty>>, ApiError>
where
  S: CampusStore + 'static,
{
  let query = FacultyQuery {
    department: params.department,
    hydrate:    !params.summary,
  };
  Ok(Json(state.faculty.list(query).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /faculty`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
  S: CampusStore + 'static,
{
  let input = FacultyForm::read(multipart).await?.into_new_faculty()?;
  let faculty = state.faculty.create(input).await?;
  Ok((StatusCode::CREATED, Json(faculty)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /faculty/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Faculty>, ApiError>
where
  S: CampusStore + 'static,
{
  Ok(Json(state.faculty.get(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /faculty/{id}`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  multipart: Multipart,
) -> Result<Json<Faculty>, ApiError>
where
  S: CampusStore + 'static,
{
  let patch = FacultyForm::read(multipart).await?.into_patch()?;
  Ok(Json(state.faculty.update(id, patch).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub success: bool,
  pub message: String,
}

/// `DELETE /faculty/{id}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, ApiError>
where
  S: CampusStore + 'static,
{
  state.faculty.delete(id).await?;
  Ok(Json(Deleted {
    success: true,
    message: "Faculty deleted successfully".into(),
  }))
}

// ─── Department head ──────────────────────────────────────────────────────────

/// `GET /departments/{department}/head`
pub async fn department_head<S>(
  State(state): State<AppState<S>>,
  Path(department): Path<String>,
) -> Result<Json<Faculty>, ApiError>
where
  S: CampusStore + 'static,
{
  state
    .faculty
    .find_department_head(&department)
    .await?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("department {department:?} has no head")))
}
