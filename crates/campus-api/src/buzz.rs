//! Handlers for `/buzz` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/buzz` | Newest first |
//! | `POST`   | `/buzz` | Body: `{"content":"...","design":{...}}`; 201 |
//! | `GET`    | `/buzz/{id}` | 404 if not found |
//! | `PATCH`  | `/buzz/{id}` | Body: `{"content"?,"design"?}` |
//! | `DELETE` | `/buzz/{id}` | 204 |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  buzz::{Buzz, BuzzPatch, NewBuzz},
  store::CampusStore,
};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
  body
    .map(|Json(value)| value)
    .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// `GET /buzz`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Buzz>>, ApiError>
where
  S: CampusStore + 'static,
{
  Ok(Json(state.buzz.list().await?))
}

/// `POST /buzz`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewBuzz>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CampusStore + 'static,
{
  let buzz = state.buzz.create(json_body(body)?).await?;
  Ok((StatusCode::CREATED, Json(buzz)))
}

/// `GET /buzz/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Buzz>, ApiError>
where
  S: CampusStore + 'static,
{
  Ok(Json(state.buzz.get(id).await?))
}

/// `PATCH /buzz/{id}`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  body: Result<Json<BuzzPatch>, JsonRejection>,
) -> Result<Json<Buzz>, ApiError>
where
  S: CampusStore + 'static,
{
  Ok(Json(state.buzz.update(id, json_body(body)?).await?))
}

/// `DELETE /buzz/{id}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: CampusStore + 'static,
{
  state.buzz.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
