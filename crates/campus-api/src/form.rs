//! Decoding of multipart faculty forms.
//!
//! Scalars arrive as text parts, the six child collections as JSON-encoded
//! text parts, and the avatar as an `image` file part. Unknown parts are
//! skipped.

use std::collections::HashMap;

use axum::extract::{Multipart, multipart::MultipartError};
use campus_core::faculty::{
  Collection, CollectionsPatch, EmploymentType, FacultyPatch, NewCollections,
  NewFaculty,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const SCALARS: [&str; 10] = [
  "name",
  "designation",
  "department",
  "email",
  "joiningDate",
  "experience",
  "employmentType",
  "isDepartmentHead",
  "username",
  "password",
];

fn multipart_error(err: MultipartError) -> ApiError {
  ApiError::BadRequest(err.body_text())
}

/// The parts of a faculty form, read into memory.
#[derive(Debug, Default)]
pub struct FacultyForm {
  fields: HashMap<String, String>,
  image:  Option<Vec<u8>>,
}

impl FacultyForm {
  pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
    let mut form = Self::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
      let Some(name) = field.name().map(str::to_owned) else {
        continue;
      };

      if name == "image" {
        let bytes = field.bytes().await.map_err(multipart_error)?;
        if !bytes.is_empty() {
          form.image = Some(bytes.to_vec());
        }
      } else if SCALARS.contains(&name.as_str())
        || Collection::from_field_name(&name).is_some()
      {
        let text = field.text().await.map_err(multipart_error)?;
        form.fields.insert(name, text);
      }
    }

    Ok(form)
  }

  /// A text part, with blank values treated as absent.
  fn take(&mut self, name: &str) -> Option<String> {
    self.fields.remove(name).filter(|v| !v.trim().is_empty())
  }

  fn take_employment_type(&mut self) -> Result<Option<EmploymentType>, ApiError> {
    self
      .take("employmentType")
      .map(|v| v.trim().parse::<EmploymentType>())
      .transpose()
      .map_err(ApiError::from)
  }

  fn take_bool(&mut self, name: &str) -> Result<Option<bool>, ApiError> {
    self
      .take(name)
      .map(|v| match v.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ApiError::BadRequest(format!(
          "{name} must be true or false, got {other:?}"
        ))),
      })
      .transpose()
  }

  fn take_collection<T: DeserializeOwned>(
    &mut self,
    collection: Collection,
  ) -> Result<Option<Vec<T>>, ApiError> {
    let name = collection.field_name();
    self
      .take(name)
      .map(|json| {
        serde_json::from_str(&json)
          .map_err(|e| ApiError::BadRequest(format!("invalid {name}: {e}")))
      })
      .transpose()
  }

  fn take_collections(&mut self) -> Result<CollectionsPatch, ApiError> {
    Ok(CollectionsPatch {
      qualifications:          self.take_collection(Collection::Qualifications)?,
      patents:                 self.take_collection(Collection::Patents)?,
      book_chapters:           self.take_collection(Collection::BookChapters)?,
      certifications:          self.take_collection(Collection::Certifications)?,
      journal_publications:    self.take_collection(Collection::JournalPublications)?,
      conference_publications: self.take_collection(Collection::ConferencePublications)?,
    })
  }

  /// Build creation input. Missing collections are empty; missing text
  /// scalars are left blank for validation to reject. A missing
  /// `employmentType` is rejected here.
  pub fn into_new_faculty(mut self) -> Result<NewFaculty, ApiError> {
    let collections = self.take_collections()?;

    Ok(NewFaculty {
      name:               self.take("name").unwrap_or_default(),
      designation:        self.take("designation").unwrap_or_default(),
      department:         self.take("department").unwrap_or_default(),
      email:              self.take("email").unwrap_or_default(),
      joining_date:       self.take("joiningDate").unwrap_or_default(),
      experience:         self.take("experience").unwrap_or_default(),
      employment_type:    self.take_employment_type()?.ok_or_else(|| {
        ApiError::BadRequest("employmentType is required".into())
      })?,
      is_department_head: self.take_bool("isDepartmentHead")?.unwrap_or(false),
      username:           self.take("username"),
      password:           self.take("password"),
      image:              self.image.take(),
      collections:        NewCollections {
        qualifications:          collections.qualifications.unwrap_or_default(),
        patents:                 collections.patents.unwrap_or_default(),
        book_chapters:           collections.book_chapters.unwrap_or_default(),
        certifications:          collections.certifications.unwrap_or_default(),
        journal_publications:    collections.journal_publications.unwrap_or_default(),
        conference_publications: collections.conference_publications.unwrap_or_default(),
      },
    })
  }

  /// Build update input. Anything absent or blank is left unchanged.
  pub fn into_patch(mut self) -> Result<FacultyPatch, ApiError> {
    Ok(FacultyPatch {
      name:               self.take("name"),
      designation:        self.take("designation"),
      department:         self.take("department"),
      email:              self.take("email"),
      joining_date:       self.take("joiningDate"),
      experience:         self.take("experience"),
      employment_type:    self.take_employment_type()?,
      is_department_head: self.take_bool("isDepartmentHead")?,
      username:           self.take("username"),
      password:           self.take("password"),
      image:              self.image.take(),
      collections:        self.take_collections()?,
    })
  }
}

#[cfg(test)]
impl FacultyForm {
  fn from_fields(fields: &[(&str, &str)]) -> Self {
    Self {
      fields: fields
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect(),
      image:  None,
    }
  }
}
