//! The six kinds of child record owned by a faculty member.
//!
//! Each record type is plain data; identity is attached by wrapping it in a
//! [`Record`] once the record belongs to a stored aggregate.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{
  Result,
  validate::{Validate, require},
};

// ─── Identity wrapper ────────────────────────────────────────────────────────

/// A child record together with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T> {
  #[serde(rename = "id")]
  pub record_id: Uuid,
  #[serde(flatten)]
  pub value:     T,
}

impl<T> Record<T> {
  /// Wrap `value` under a fresh id.
  pub fn new(value: T) -> Self {
    Self { record_id: Uuid::new_v4(), value }
  }
}

/// Wrap every value under a fresh id, preserving order.
pub fn records<T>(values: Vec<T>) -> Vec<Record<T>> {
  values.into_iter().map(Record::new).collect()
}

/// Form clients send `""` for untouched optional inputs; store those as null.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.filter(|s| !s.trim().is_empty()))
}

// ─── Record types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
  pub degree:         String,
  pub passing_year:   String,
  pub college:        String,
  pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patent {
  pub title:              String,
  pub authors:            String,
  pub date:               String,
  pub application_number: String,
  pub patent_office:      String,
  pub status:             String,
  pub reference:          String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookChapter {
  pub title:            String,
  pub authors:          String,
  pub book_title:       String,
  pub publisher:        String,
  pub publication_year: String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub doi:              Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub isbn:             Option<String>,
  #[serde(default)]
  pub scopus_indexed:   bool,
  pub page_numbers:     String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
  pub name:                 String,
  pub issuing_organization: String,
  pub issue_date:           String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub expiry_date:          Option<String>,
  pub credential_id:        String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub credential_url:       Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub credits:              Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalPublication {
  pub title:            String,
  pub authors:          String,
  pub journal_name:     String,
  pub publication_date: String,
  pub volume:           String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub issue:            Option<String>,
  pub page_numbers:     String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub doi:              Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub issn:             Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub indexing:         Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferencePublication {
  pub title:           String,
  pub authors:         String,
  pub conference_name: String,
  pub conference_date: String,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub location:        Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub doi:             Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub publisher:       Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub isbn:            Option<String>,
  #[serde(default, deserialize_with = "empty_as_none")]
  pub page_numbers:    Option<String>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

impl Validate for Qualification {
  fn validate(&self) -> Result<()> {
    require("qualification degree", &self.degree)?;
    require("qualification passingYear", &self.passing_year)?;
    require("qualification college", &self.college)?;
    require("qualification specialization", &self.specialization)
  }
}

impl Validate for Patent {
  fn validate(&self) -> Result<()> {
    require("patent title", &self.title)?;
    require("patent authors", &self.authors)?;
    require("patent date", &self.date)?;
    require("patent applicationNumber", &self.application_number)?;
    require("patent patentOffice", &self.patent_office)?;
    require("patent status", &self.status)?;
    require("patent reference", &self.reference)
  }
}

impl Validate for BookChapter {
  fn validate(&self) -> Result<()> {
    require("book chapter title", &self.title)?;
    require("book chapter authors", &self.authors)?;
    require("book chapter bookTitle", &self.book_title)?;
    require("book chapter publisher", &self.publisher)?;
    require("book chapter publicationYear", &self.publication_year)?;
    require("book chapter pageNumbers", &self.page_numbers)
  }
}

impl Validate for Certification {
  fn validate(&self) -> Result<()> {
    require("certification name", &self.name)?;
    require("certification issuingOrganization", &self.issuing_organization)?;
    require("certification issueDate", &self.issue_date)?;
    require("certification credentialId", &self.credential_id)
  }
}

impl Validate for JournalPublication {
  fn validate(&self) -> Result<()> {
    require("journal publication title", &self.title)?;
    require("journal publication authors", &self.authors)?;
    require("journal publication journalName", &self.journal_name)?;
    require("journal publication publicationDate", &self.publication_date)?;
    require("journal publication volume", &self.volume)?;
    require("journal publication pageNumbers", &self.page_numbers)
  }
}

impl Validate for ConferencePublication {
  fn validate(&self) -> Result<()> {
    require("conference publication title", &self.title)?;
    require("conference publication authors", &self.authors)?;
    require("conference publication conferenceName", &self.conference_name)?;
    require("conference publication conferenceDate", &self.conference_date)
  }
}
