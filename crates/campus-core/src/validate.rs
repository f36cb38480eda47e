//! Input validation shared by the managers and the REST layer.
//!
//! Validation only checks shape (required text present and non-blank, JSON
//! objects where objects are expected). Cross-record rules such as
//! department-head uniqueness are enforced by the managers and the store.

use crate::{Error, Result};

/// Structural validation of an input value.
pub trait Validate {
  fn validate(&self) -> Result<()>;
}

impl<T: Validate> Validate for [T] {
  fn validate(&self) -> Result<()> { self.iter().try_for_each(Validate::validate) }
}

impl<T: Validate> Validate for Vec<T> {
  fn validate(&self) -> Result<()> { self.as_slice().validate() }
}

impl<T: Validate> Validate for Option<T> {
  fn validate(&self) -> Result<()> {
    match self {
      Some(v) => v.validate(),
      None => Ok(()),
    }
  }
}

/// Fail with [`Error::Validation`] if `value` is empty or whitespace.
pub fn require(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Validation(format!("{field} is required")));
  }
  Ok(())
}

/// Like [`require`], but only when the value was supplied.
pub fn require_if_present(field: &str, value: Option<&str>) -> Result<()> {
  value.map_or(Ok(()), |v| require(field, v))
}
