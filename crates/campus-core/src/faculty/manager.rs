//! [`FacultyManager`]: create, update and delete faculty aggregates while
//! keeping the department-head rules intact.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  credentials::{hash_password, verify_password},
  faculty::{Faculty, FacultyPatch, NewFaculty},
  store::{CampusStore, FacultyQuery},
  validate::Validate,
};

/// Orchestrates faculty writes over a [`CampusStore`].
///
/// Credentials follow the head flag: a head always holds a username and a
/// password hash, a non-head never does.
pub struct FacultyManager<S> {
  store: Arc<S>,
}

impl<S> Clone for FacultyManager<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S: CampusStore> FacultyManager<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Create a faculty member together with all of its child collections.
  pub async fn create(&self, input: NewFaculty) -> Result<Faculty> {
    input.validate()?;

    let NewFaculty {
      name,
      designation,
      department,
      email,
      joining_date,
      experience,
      employment_type,
      is_department_head,
      username,
      password,
      image,
      collections,
    } = input;

    let (username, password_hash) = if is_department_head {
      let hash = hash_password(password.as_deref().unwrap_or_default())?;
      (username, Some(hash))
    } else {
      (None, None)
    };

    let faculty = Faculty {
      faculty_id: Uuid::new_v4(),
      name,
      designation,
      department,
      email,
      joining_date,
      experience,
      employment_type,
      is_department_head,
      username,
      password_hash,
      image,
      collections: collections.into_records(),
    };
    let department = faculty.department.clone();

    let created = self
      .store
      .insert_faculty(faculty)
      .await
      .map_err(Into::<Error>::into)
      .inspect_err(|e| {
        if let Error::Conflict(reason) = e {
          warn!(%department, %reason, "rejected faculty create");
        }
      })?;

    info!(
      faculty_id = %created.faculty_id,
      department = %created.department,
      head = created.is_department_head,
      "created faculty"
    );
    Ok(created)
  }

  /// Fetch one hydrated aggregate.
  pub async fn get(&self, id: Uuid) -> Result<Faculty> {
    self
      .store
      .get_faculty(id)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or(Error::FacultyNotFound(id))
  }

  /// Apply a partial update. Omitted fields and collections are kept.
  pub async fn update(&self, id: Uuid, patch: FacultyPatch) -> Result<Faculty> {
    patch.validate()?;

    let mut faculty = self.get(id).await?;
    let was_head = faculty.is_department_head;

    let FacultyPatch {
      name,
      designation,
      department,
      email,
      joining_date,
      experience,
      employment_type,
      is_department_head,
      username,
      password,
      image,
      collections,
    } = patch;

    if let Some(v) = name { faculty.name = v; }
    if let Some(v) = designation { faculty.designation = v; }
    if let Some(v) = department { faculty.department = v; }
    if let Some(v) = email { faculty.email = v; }
    if let Some(v) = joining_date { faculty.joining_date = v; }
    if let Some(v) = experience { faculty.experience = v; }
    if let Some(v) = employment_type { faculty.employment_type = v; }
    if let Some(v) = image { faculty.image = Some(v); }
    if let Some(v) = is_department_head { faculty.is_department_head = v; }

    if faculty.is_department_head {
      if let Some(u) = username {
        faculty.username = Some(u);
      }
      if let Some(p) = password {
        faculty.password_hash = Some(hash_password(&p)?);
      }
      if faculty.username.is_none() || faculty.password_hash.is_none() {
        return Err(Error::Validation(
          "a department head requires a username and password".into(),
        ));
      }
    } else {
      faculty.username = None;
      faculty.password_hash = None;
    }

    let replaced = collections.apply(&mut faculty.collections);
    let department = faculty.department.clone();

    let updated = self
      .store
      .update_faculty(faculty, replaced)
      .await
      .map_err(Into::<Error>::into)
      .inspect_err(|e| {
        if let Error::Conflict(reason) = e {
          warn!(faculty_id = %id, %department, %reason, "rejected faculty update");
        }
      })?;

    match (was_head, updated.is_department_head) {
      (false, true) => info!(faculty_id = %id, %department, "promoted to department head"),
      (true, false) => info!(faculty_id = %id, %department, "demoted from department head"),
      _ => info!(faculty_id = %id, "updated faculty"),
    }
    Ok(updated)
  }

  /// Remove a faculty member and every child record it owns.
  pub async fn delete(&self, id: Uuid) -> Result<()> {
    let removed = self.store.delete_faculty(id).await.map_err(Into::<Error>::into)?;
    if !removed {
      return Err(Error::FacultyNotFound(id));
    }
    info!(faculty_id = %id, "deleted faculty");
    Ok(())
  }

  /// List faculty, optionally restricted to a department.
  pub async fn list(&self, query: FacultyQuery) -> Result<Vec<Faculty>> {
    self.store.list_faculty(query).await.map_err(Into::<Error>::into)
  }

  /// All faculty of one department, children included.
  pub async fn list_by_department(&self, department: &str) -> Result<Vec<Faculty>> {
    self
      .list(FacultyQuery {
        department: Some(department.to_owned()),
        hydrate:    true,
      })
      .await
  }

  pub async fn find_department_head(&self, department: &str) -> Result<Option<Faculty>> {
    self
      .store
      .find_department_head(department.to_owned())
      .await
      .map_err(Into::<Error>::into)
  }

  /// Check a department head's username and password.
  ///
  /// Unknown usernames, heads without a stored password and wrong passwords
  /// all fail the same way.
  pub async fn validate_department_head_credentials(
    &self,
    username: &str,
    password: &str,
  ) -> Result<Faculty> {
    let head = self
      .store
      .find_head_by_username(username.to_owned())
      .await
      .map_err(Into::<Error>::into)?;

    let Some(head) = head else {
      warn!(%username, "credential check for unknown department head");
      return Err(Error::Unauthorized);
    };

    let verified = head
      .password_hash
      .as_deref()
      .is_some_and(|hash| verify_password(password, hash));

    if !verified {
      warn!(%username, faculty_id = %head.faculty_id, "department head password rejected");
      return Err(Error::Unauthorized);
    }
    Ok(head)
  }
}
