//! Encoding and decoding helpers between Rust domain types and the plain
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with fixed microsecond precision,
//! so lexical order in SQL matches chronological order. UUIDs are stored as
//! hyphenated lowercase strings. The buzz `design` document is stored as
//! compact JSON.

use campus_core::{
  buzz::Buzz,
  faculty::{
    BookChapter, Certification, Collection, Collections, ConferencePublication,
    EmploymentType, Faculty, JournalPublication, Patent, Qualification, Record,
  },
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Row, types::Value};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── EmploymentType ──────────────────────────────────────────────────────────

pub fn decode_employment_type(s: &str) -> Result<EmploymentType> {
  s.parse()
    .map_err(|_| Error::Decode(format!("unknown employment type: {s:?}")))
}

// ─── Child rows ──────────────────────────────────────────────────────────────

fn text(s: &str) -> Value { Value::Text(s.to_owned()) }

fn opt_text(s: &Option<String>) -> Value {
  match s {
    Some(v) => Value::Text(v.clone()),
    None => Value::Null,
  }
}

/// A child record type with its own table.
///
/// Every child table starts with `record_id, faculty_id, position`; the
/// record's own columns follow in [`ChildRow::COLUMNS`] order.
pub trait ChildRow: Sized {
  const TABLE: &'static str;
  const COLUMNS: &'static [&'static str];

  fn values(&self) -> Vec<Value>;

  /// Read the record's columns starting at index `at`.
  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self>;
}

impl ChildRow for Qualification {
  const TABLE: &'static str = "qualifications";
  const COLUMNS: &'static [&'static str] =
    &["degree", "passing_year", "college", "specialization"];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.degree),
      text(&self.passing_year),
      text(&self.college),
      text(&self.specialization),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      degree:         row.get(at)?,
      passing_year:   row.get(at + 1)?,
      college:        row.get(at + 2)?,
      specialization: row.get(at + 3)?,
    })
  }
}

impl ChildRow for Patent {
  const TABLE: &'static str = "patents";
  const COLUMNS: &'static [&'static str] = &[
    "title",
    "authors",
    "date",
    "application_number",
    "patent_office",
    "status",
    "reference",
  ];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.title),
      text(&self.authors),
      text(&self.date),
      text(&self.application_number),
      text(&self.patent_office),
      text(&self.status),
      text(&self.reference),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      title:              row.get(at)?,
      authors:            row.get(at + 1)?,
      date:               row.get(at + 2)?,
      application_number: row.get(at + 3)?,
      patent_office:      row.get(at + 4)?,
      status:             row.get(at + 5)?,
      reference:          row.get(at + 6)?,
    })
  }
}

impl ChildRow for BookChapter {
  const TABLE: &'static str = "book_chapters";
  const COLUMNS: &'static [&'static str] = &[
    "title",
    "authors",
    "book_title",
    "publisher",
    "publication_year",
    "doi",
    "isbn",
    "scopus_indexed",
    "page_numbers",
  ];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.title),
      text(&self.authors),
      text(&self.book_title),
      text(&self.publisher),
      text(&self.publication_year),
      opt_text(&self.doi),
      opt_text(&self.isbn),
      Value::Integer(i64::from(self.scopus_indexed)),
      text(&self.page_numbers),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      title:            row.get(at)?,
      authors:          row.get(at + 1)?,
      book_title:       row.get(at + 2)?,
      publisher:        row.get(at + 3)?,
      publication_year: row.get(at + 4)?,
      doi:              row.get(at + 5)?,
      isbn:             row.get(at + 6)?,
      scopus_indexed:   row.get(at + 7)?,
      page_numbers:     row.get(at + 8)?,
    })
  }
}

impl ChildRow for Certification {
  const TABLE: &'static str = "certifications";
  const COLUMNS: &'static [&'static str] = &[
    "name",
    "issuing_organization",
    "issue_date",
    "expiry_date",
    "credential_id",
    "credential_url",
    "credits",
  ];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.name),
      text(&self.issuing_organization),
      text(&self.issue_date),
      opt_text(&self.expiry_date),
      text(&self.credential_id),
      opt_text(&self.credential_url),
      opt_text(&self.credits),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      name:                 row.get(at)?,
      issuing_organization: row.get(at + 1)?,
      issue_date:           row.get(at + 2)?,
      expiry_date:          row.get(at + 3)?,
      credential_id:        row.get(at + 4)?,
      credential_url:       row.get(at + 5)?,
      credits:              row.get(at + 6)?,
    })
  }
}

impl ChildRow for JournalPublication {
  const TABLE: &'static str = "journal_publications";
  const COLUMNS: &'static [&'static str] = &[
    "title",
    "authors",
    "journal_name",
    "publication_date",
    "volume",
    "issue",
    "page_numbers",
    "doi",
    "issn",
    "indexing",
  ];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.title),
      text(&self.authors),
      text(&self.journal_name),
      text(&self.publication_date),
      text(&self.volume),
      opt_text(&self.issue),
      text(&self.page_numbers),
      opt_text(&self.doi),
      opt_text(&self.issn),
      opt_text(&self.indexing),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      title:            row.get(at)?,
      authors:          row.get(at + 1)?,
      journal_name:     row.get(at + 2)?,
      publication_date: row.get(at + 3)?,
      volume:           row.get(at + 4)?,
      issue:            row.get(at + 5)?,
      page_numbers:     row.get(at + 6)?,
      doi:              row.get(at + 7)?,
      issn:             row.get(at + 8)?,
      indexing:         row.get(at + 9)?,
    })
  }
}

impl ChildRow for ConferencePublication {
  const TABLE: &'static str = "conference_publications";
  const COLUMNS: &'static [&'static str] = &[
    "title",
    "authors",
    "conference_name",
    "conference_date",
    "location",
    "doi",
    "publisher",
    "isbn",
    "page_numbers",
  ];

  fn values(&self) -> Vec<Value> {
    vec![
      text(&self.title),
      text(&self.authors),
      text(&self.conference_name),
      text(&self.conference_date),
      opt_text(&self.location),
      opt_text(&self.doi),
      opt_text(&self.publisher),
      opt_text(&self.isbn),
      opt_text(&self.page_numbers),
    ]
  }

  fn from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      title:           row.get(at)?,
      authors:         row.get(at + 1)?,
      conference_name: row.get(at + 2)?,
      conference_date: row.get(at + 3)?,
      location:        row.get(at + 4)?,
      doi:             row.get(at + 5)?,
      publisher:       row.get(at + 6)?,
      isbn:            row.get(at + 7)?,
      page_numbers:    row.get(at + 8)?,
    })
  }
}

pub fn collection_table(collection: Collection) -> &'static str {
  match collection {
    Collection::Qualifications => Qualification::TABLE,
    Collection::Patents => Patent::TABLE,
    Collection::BookChapters => BookChapter::TABLE,
    Collection::Certifications => Certification::TABLE,
    Collection::JournalPublications => JournalPublication::TABLE,
    Collection::ConferencePublications => ConferencePublication::TABLE,
  }
}

fn insert_children<T: ChildRow>(
  conn:       &Connection,
  faculty_id: &str,
  records:    &[Record<T>],
) -> rusqlite::Result<()> {
  if records.is_empty() {
    return Ok(());
  }

  let columns      = T::COLUMNS.join(", ");
  let placeholders = (1..=T::COLUMNS.len() + 3)
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ");
  let sql = format!(
    "INSERT INTO {} (record_id, faculty_id, position, {columns}) VALUES ({placeholders})",
    T::TABLE
  );

  let mut stmt = conn.prepare(&sql)?;
  for (position, record) in records.iter().enumerate() {
    let mut values = vec![
      Value::Text(encode_uuid(record.record_id)),
      Value::Text(faculty_id.to_owned()),
      Value::Integer(position as i64),
    ];
    values.extend(record.value.values());
    stmt.execute(rusqlite::params_from_iter(values))?;
  }
  Ok(())
}

/// Insert the rows of the `which` collections of `collections`.
pub fn insert_collections(
  conn:        &Connection,
  faculty_id:  &str,
  collections: &Collections,
  which:       &[Collection],
) -> rusqlite::Result<()> {
  for collection in which {
    match collection {
      Collection::Qualifications => {
        insert_children(conn, faculty_id, &collections.qualifications)?
      }
      Collection::Patents => insert_children(conn, faculty_id, &collections.patents)?,
      Collection::BookChapters => {
        insert_children(conn, faculty_id, &collections.book_chapters)?
      }
      Collection::Certifications => {
        insert_children(conn, faculty_id, &collections.certifications)?
      }
      Collection::JournalPublications => {
        insert_children(conn, faculty_id, &collections.journal_publications)?
      }
      Collection::ConferencePublications => {
        insert_children(conn, faculty_id, &collections.conference_publications)?
      }
    }
  }
  Ok(())
}

/// Delete every row of one collection for a faculty member.
pub fn delete_collection(
  conn:       &Connection,
  faculty_id: &str,
  collection: Collection,
) -> rusqlite::Result<usize> {
  conn.execute(
    &format!(
      "DELETE FROM {} WHERE faculty_id = ?1",
      collection_table(collection)
    ),
    [faculty_id],
  )
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// A child record as read from its table, id not yet parsed.
pub struct RawRecord<T> {
  pub record_id: String,
  pub value:     T,
}

impl<T> RawRecord<T> {
  pub fn into_record(self) -> Result<Record<T>> {
    Ok(Record {
      record_id: decode_uuid(&self.record_id)?,
      value:     self.value,
    })
  }
}

fn select_children<T: ChildRow>(
  conn:       &Connection,
  faculty_id: &str,
) -> rusqlite::Result<Vec<RawRecord<T>>> {
  let sql = format!(
    "SELECT record_id, {} FROM {} WHERE faculty_id = ?1 ORDER BY position",
    T::COLUMNS.join(", "),
    T::TABLE
  );
  let mut stmt = conn.prepare(&sql)?;
  let rows = stmt
    .query_map([faculty_id], |row| {
      Ok(RawRecord {
        record_id: row.get(0)?,
        value:     T::from_row(row, 1)?,
      })
    })?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

fn decode_records<T>(raws: Vec<RawRecord<T>>) -> Result<Vec<Record<T>>> {
  raws.into_iter().map(RawRecord::into_record).collect()
}

/// All six child collections of one faculty member, as read.
#[derive(Default)]
pub struct RawCollections {
  pub qualifications:          Vec<RawRecord<Qualification>>,
  pub patents:                 Vec<RawRecord<Patent>>,
  pub book_chapters:           Vec<RawRecord<BookChapter>>,
  pub certifications:          Vec<RawRecord<Certification>>,
  pub journal_publications:    Vec<RawRecord<JournalPublication>>,
  pub conference_publications: Vec<RawRecord<ConferencePublication>>,
}

impl RawCollections {
  pub fn load(conn: &Connection, faculty_id: &str) -> rusqlite::Result<Self> {
    Ok(Self {
      qualifications:          select_children(conn, faculty_id)?,
      patents:                 select_children(conn, faculty_id)?,
      book_chapters:           select_children(conn, faculty_id)?,
      certifications:          select_children(conn, faculty_id)?,
      journal_publications:    select_children(conn, faculty_id)?,
      conference_publications: select_children(conn, faculty_id)?,
    })
  }

  pub fn into_collections(self) -> Result<Collections> {
    Ok(Collections {
      qualifications:          decode_records(self.qualifications)?,
      patents:                 decode_records(self.patents)?,
      book_chapters:           decode_records(self.book_chapters)?,
      certifications:          decode_records(self.certifications)?,
      journal_publications:    decode_records(self.journal_publications)?,
      conference_publications: decode_records(self.conference_publications)?,
    })
  }
}

/// Column list matching [`RawFaculty::from_row`].
pub const FACULTY_COLUMNS: &str = "faculty_id, name, designation, department, email, \
   joining_date, experience, employment_type, is_department_head, username, \
   password_hash, image";

/// Raw values read directly from a `faculty` row, plus its children if loaded.
pub struct RawFaculty {
  pub faculty_id:         String,
  pub name:               String,
  pub designation:        String,
  pub department:         String,
  pub email:              String,
  pub joining_date:       String,
  pub experience:         String,
  pub employment_type:    String,
  pub is_department_head: bool,
  pub username:           Option<String>,
  pub password_hash:      Option<String>,
  pub image:              Option<Vec<u8>>,
  pub collections:        RawCollections,
}

impl RawFaculty {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      faculty_id:         row.get(0)?,
      name:               row.get(1)?,
      designation:        row.get(2)?,
      department:         row.get(3)?,
      email:              row.get(4)?,
      joining_date:       row.get(5)?,
      experience:         row.get(6)?,
      employment_type:    row.get(7)?,
      is_department_head: row.get(8)?,
      username:           row.get(9)?,
      password_hash:      row.get(10)?,
      image:              row.get(11)?,
      collections:        RawCollections::default(),
    })
  }

  pub fn into_faculty(self) -> Result<Faculty> {
    Ok(Faculty {
      faculty_id:         decode_uuid(&self.faculty_id)?,
      name:               self.name,
      designation:        self.designation,
      department:         self.department,
      email:              self.email,
      joining_date:       self.joining_date,
      experience:         self.experience,
      employment_type:    decode_employment_type(&self.employment_type)?,
      is_department_head: self.is_department_head,
      username:           self.username,
      password_hash:      self.password_hash,
      image:              self.image,
      collections:        self.collections.into_collections()?,
    })
  }
}

/// Column list matching [`RawBuzz::from_row`].
pub const BUZZ_COLUMNS: &str = "buzz_id, content, design, created_at, updated_at";

/// Raw strings read directly from a `buzz` row.
pub struct RawBuzz {
  pub buzz_id:    String,
  pub content:    String,
  pub design:     String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawBuzz {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      buzz_id:    row.get(0)?,
      content:    row.get(1)?,
      design:     row.get(2)?,
      created_at: row.get(3)?,
      updated_at: row.get(4)?,
    })
  }

  pub fn into_buzz(self) -> Result<Buzz> {
    Ok(Buzz {
      buzz_id:    decode_uuid(&self.buzz_id)?,
      content:    self.content,
      design:     serde_json::from_str(&self.design)?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
