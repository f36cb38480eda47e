//! The Faculty aggregate: a faculty member plus six owned child collections.
//!
//! Children are owned by composition. They are created with the faculty,
//! replaced collection-by-collection on update, and deleted with it.

mod manager;
mod records;

pub use manager::FacultyManager;
pub use records::{
  BookChapter, Certification, ConferencePublication, JournalPublication, Patent,
  Qualification, Record, records,
};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  validate::{Validate, require, require_if_present},
};

// ─── Employment type ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmploymentType {
  #[default]
  Regular,
  Contract,
  Visiting,
}

impl EmploymentType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Regular => "Regular",
      Self::Contract => "Contract",
      Self::Visiting => "Visiting",
    }
  }
}

impl fmt::Display for EmploymentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EmploymentType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Regular" => Ok(Self::Regular),
      "Contract" => Ok(Self::Contract),
      "Visiting" => Ok(Self::Visiting),
      other => Err(Error::Validation(format!(
        "unknown employment type: {other:?}"
      ))),
    }
  }
}

// ─── Collections ─────────────────────────────────────────────────────────────

/// Names one of the six child collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
  Qualifications,
  Patents,
  BookChapters,
  Certifications,
  JournalPublications,
  ConferencePublications,
}

impl Collection {
  pub const ALL: [Collection; 6] = [
    Collection::Qualifications,
    Collection::Patents,
    Collection::BookChapters,
    Collection::Certifications,
    Collection::JournalPublications,
    Collection::ConferencePublications,
  ];

  /// The field name used on the wire, both in JSON and in multipart forms.
  pub fn field_name(self) -> &'static str {
    match self {
      Self::Qualifications => "qualifications",
      Self::Patents => "patents",
      Self::BookChapters => "bookChapters",
      Self::Certifications => "certifications",
      Self::JournalPublications => "internationalJournalPublications",
      Self::ConferencePublications => "internationalConferencePublications",
    }
  }

  pub fn from_field_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.field_name() == name)
  }
}

/// The stored child collections of a faculty member, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
  pub qualifications:          Vec<Record<Qualification>>,
  pub patents:                 Vec<Record<Patent>>,
  pub book_chapters:           Vec<Record<BookChapter>>,
  pub certifications:          Vec<Record<Certification>>,
  #[serde(rename = "internationalJournalPublications")]
  pub journal_publications:    Vec<Record<JournalPublication>>,
  #[serde(rename = "internationalConferencePublications")]
  pub conference_publications: Vec<Record<ConferencePublication>>,
}

/// Child collections supplied when creating a faculty member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCollections {
  pub qualifications:          Vec<Qualification>,
  pub patents:                 Vec<Patent>,
  pub book_chapters:           Vec<BookChapter>,
  pub certifications:          Vec<Certification>,
  pub journal_publications:    Vec<JournalPublication>,
  pub conference_publications: Vec<ConferencePublication>,
}

impl NewCollections {
  /// Assign fresh ids to every child.
  pub fn into_records(self) -> Collections {
    Collections {
      qualifications:          records(self.qualifications),
      patents:                 records(self.patents),
      book_chapters:           records(self.book_chapters),
      certifications:          records(self.certifications),
      journal_publications:    records(self.journal_publications),
      conference_publications: records(self.conference_publications),
    }
  }
}

impl Validate for NewCollections {
  fn validate(&self) -> Result<()> {
    self.qualifications.validate()?;
    self.patents.validate()?;
    self.book_chapters.validate()?;
    self.certifications.validate()?;
    self.journal_publications.validate()?;
    self.conference_publications.validate()
  }
}

/// Child collections supplied on update. `None` leaves the stored collection
/// untouched; `Some` replaces it entirely (an empty vec clears it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionsPatch {
  pub qualifications:          Option<Vec<Qualification>>,
  pub patents:                 Option<Vec<Patent>>,
  pub book_chapters:           Option<Vec<BookChapter>>,
  pub certifications:          Option<Vec<Certification>>,
  pub journal_publications:    Option<Vec<JournalPublication>>,
  pub conference_publications: Option<Vec<ConferencePublication>>,
}

impl CollectionsPatch {
  /// Overwrite the supplied collections in `target` and report which ones
  /// were replaced.
  pub fn apply(self, target: &mut Collections) -> Vec<Collection> {
    let mut replaced = Vec::new();
    if let Some(v) = self.qualifications {
      target.qualifications = records(v);
      replaced.push(Collection::Qualifications);
    }
    if let Some(v) = self.patents {
      target.patents = records(v);
      replaced.push(Collection::Patents);
    }
    if let Some(v) = self.book_chapters {
      target.book_chapters = records(v);
      replaced.push(Collection::BookChapters);
    }
    if let Some(v) = self.certifications {
      target.certifications = records(v);
      replaced.push(Collection::Certifications);
    }
    if let Some(v) = self.journal_publications {
      target.journal_publications = records(v);
      replaced.push(Collection::JournalPublications);
    }
    if let Some(v) = self.conference_publications {
      target.conference_publications = records(v);
      replaced.push(Collection::ConferencePublications);
    }
    replaced
  }
}

impl Validate for CollectionsPatch {
  fn validate(&self) -> Result<()> {
    self.qualifications.validate()?;
    self.patents.validate()?;
    self.book_chapters.validate()?;
    self.certifications.validate()?;
    self.journal_publications.validate()?;
    self.conference_publications.validate()
  }
}

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// A stored faculty member with its child collections.
///
/// `password_hash` never leaves the process: it is skipped by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
  #[serde(rename = "id")]
  pub faculty_id:         Uuid,
  pub name:               String,
  pub designation:        String,
  pub department:         String,
  pub email:              String,
  pub joining_date:       String,
  pub experience:         String,
  pub employment_type:    EmploymentType,
  pub is_department_head: bool,
  pub username:           Option<String>,
  #[serde(skip)]
  pub password_hash:      Option<String>,
  /// Avatar image bytes; base64 in JSON.
  #[serde(default, with = "avatar")]
  pub image:              Option<Vec<u8>>,
  #[serde(flatten)]
  pub collections:        Collections,
}

/// Input for [`FacultyManager::create`].
#[derive(Clone, Default)]
pub struct NewFaculty {
  pub name:               String,
  pub designation:        String,
  pub department:         String,
  pub email:              String,
  pub joining_date:       String,
  pub experience:         String,
  pub employment_type:    EmploymentType,
  pub is_department_head: bool,
  pub username:           Option<String>,
  /// Plaintext; hashed before it reaches the store.
  pub password:           Option<String>,
  pub image:              Option<Vec<u8>>,
  pub collections:        NewCollections,
}

impl Validate for NewFaculty {
  fn validate(&self) -> Result<()> {
    require("name", &self.name)?;
    require("designation", &self.designation)?;
    require("department", &self.department)?;
    require("email", &self.email)?;
    require("joiningDate", &self.joining_date)?;
    require("experience", &self.experience)?;
    if self.is_department_head {
      require("username", self.username.as_deref().unwrap_or_default())?;
      require("password", self.password.as_deref().unwrap_or_default())?;
    }
    self.collections.validate()
  }
}

/// Input for [`FacultyManager::update`]. Every `None` means "leave as is".
#[derive(Clone, Default)]
pub struct FacultyPatch {
  pub name:               Option<String>,
  pub designation:        Option<String>,
  pub department:         Option<String>,
  pub email:              Option<String>,
  pub joining_date:       Option<String>,
  pub experience:         Option<String>,
  pub employment_type:    Option<EmploymentType>,
  pub is_department_head: Option<bool>,
  pub username:           Option<String>,
  pub password:           Option<String>,
  pub image:              Option<Vec<u8>>,
  pub collections:        CollectionsPatch,
}

impl Validate for FacultyPatch {
  fn validate(&self) -> Result<()> {
    require_if_present("name", self.name.as_deref())?;
    require_if_present("designation", self.designation.as_deref())?;
    require_if_present("department", self.department.as_deref())?;
    require_if_present("email", self.email.as_deref())?;
    require_if_present("joiningDate", self.joining_date.as_deref())?;
    require_if_present("experience", self.experience.as_deref())?;
    require_if_present("username", self.username.as_deref())?;
    require_if_present("password", self.password.as_deref())?;
    self.collections.validate()
  }
}

// ─── Avatar encoding ─────────────────────────────────────────────────────────

mod avatar {
  use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(image: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match image {
      Some(bytes) => serializer.serialize_some(&B64.encode(bytes)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Option::<String>::deserialize(deserializer)?
      .map(|s| B64.decode(s).map_err(serde::de::Error::custom))
      .transpose()
  }
}
