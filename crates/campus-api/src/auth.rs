//! HTTP Basic-auth extractor for department heads.

use axum::{
  Json,
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use campus_core::{faculty::Faculty, store::CampusStore};

use crate::{AppState, error::ApiError};

/// Pull `username:password` out of a `Basic` authorization header.
pub fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
  let header_val = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded.trim()).map_err(|_| ApiError::Unauthorized)?;
  let creds   = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(ApiError::Unauthorized)?;
  Ok((username.to_owned(), password.to_owned()))
}

/// The department head whose credentials accompanied the request.
pub struct DepartmentHead(pub Faculty);

impl<S> FromRequestParts<AppState<S>> for DepartmentHead
where
  S: CampusStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let (username, password) = basic_credentials(&parts.headers)?;
    let head = state
      .faculty
      .validate_department_head_credentials(&username, &password)
      .await?;
    Ok(DepartmentHead(head))
  }
}

/// `GET /auth/department-head`: the authenticated head's record.
pub async fn department_head(DepartmentHead(head): DepartmentHead) -> Json<Faculty> {
  Json(head)
}
