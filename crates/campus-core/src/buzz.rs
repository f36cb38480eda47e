//! Buzz: standalone announcement posts.
//!
//! A post is rendered `content` plus an opaque `design` document produced by
//! the editor that authored it. Posts own nothing and reference nothing.

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound as _, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
  Error, Result,
  store::CampusStore,
  validate::{Validate, require, require_if_present},
};

/// A stored announcement post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buzz {
  #[serde(rename = "id")]
  pub buzz_id:    Uuid,
  pub content:    String,
  pub design:     serde_json::Value,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Input for [`BuzzManager::create`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewBuzz {
  pub content: String,
  pub design:  serde_json::Value,
}

/// Input for [`BuzzManager::update`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuzzPatch {
  pub content: Option<String>,
  pub design:  Option<serde_json::Value>,
}

fn require_object(design: &serde_json::Value) -> Result<()> {
  if !design.is_object() {
    return Err(Error::Validation("design must be a JSON object".into()));
  }
  Ok(())
}

impl Validate for NewBuzz {
  fn validate(&self) -> Result<()> {
    require("content", &self.content)?;
    require_object(&self.design)
  }
}

impl Validate for BuzzPatch {
  fn validate(&self) -> Result<()> {
    require_if_present("content", self.content.as_deref())?;
    self.design.as_ref().map_or(Ok(()), require_object)
  }
}

/// Current time at the precision the store keeps.
fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(6) }

/// The next `updated_at` for a post last touched at `previous`: the current
/// time, or one microsecond later than `previous` if the clock has not moved
/// past it.
fn bump(previous: DateTime<Utc>) -> DateTime<Utc> {
  let now = now();
  if now > previous { now } else { previous + Duration::microseconds(1) }
}

// ─── Manager ─────────────────────────────────────────────────────────────────

/// CRUD over buzz posts.
pub struct BuzzManager<S> {
  store: Arc<S>,
}

impl<S> Clone for BuzzManager<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S: CampusStore> BuzzManager<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn create(&self, input: NewBuzz) -> Result<Buzz> {
    input.validate()?;
    let at = now();
    let buzz = Buzz {
      buzz_id:    Uuid::new_v4(),
      content:    input.content,
      design:     input.design,
      created_at: at,
      updated_at: at,
    };
    let created = self.store.insert_buzz(buzz).await.map_err(Into::<Error>::into)?;
    info!(buzz_id = %created.buzz_id, "created buzz");
    Ok(created)
  }

  pub async fn get(&self, id: Uuid) -> Result<Buzz> {
    self
      .store
      .get_buzz(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::BuzzNotFound(id))
  }

  /// All posts, newest first.
  pub async fn list(&self) -> Result<Vec<Buzz>> {
    self.store.list_buzz().await.map_err(Into::<Error>::into)
  }

  pub async fn update(&self, id: Uuid, patch: BuzzPatch) -> Result<Buzz> {
    patch.validate()?;
    let mut buzz = self.get(id).await?;
    if let Some(content) = patch.content {
      buzz.content = content;
    }
    if let Some(design) = patch.design {
      buzz.design = design;
    }
    buzz.updated_at = bump(buzz.updated_at);

    let updated = self.store.update_buzz(buzz).await.map_err(Into::<Error>::into)?;
    info!(buzz_id = %id, "updated buzz");
    Ok(updated)
  }

  pub async fn delete(&self, id: Uuid) -> Result<()> {
    let removed = self.store.delete_buzz(id).await.map_err(Into::<Error>::into)?;
    if !removed {
      return Err(Error::BuzzNotFound(id));
    }
    info!(buzz_id = %id, "deleted buzz");
    Ok(())
  }
}
