//! [`SqliteStore`], the SQLite implementation of [`CampusStore`].

use std::path::Path;

use campus_core::{
  buzz::Buzz,
  faculty::{Collection, Faculty},
  store::{CampusStore, FacultyQuery},
};
use rusqlite::{Connection, OptionalExtension as _};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    BUZZ_COLUMNS, FACULTY_COLUMNS, RawBuzz, RawCollections, RawFaculty,
    delete_collection, encode_dt, encode_uuid, insert_collections,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Campus store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. All calls
/// run one at a time on the connection's thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Why a faculty write was refused inside its transaction.
enum Rejected {
  HeadTaken,
  UsernameTaken,
  Missing,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_one_faculty(
    &self,
    filter: &'static str,
    param: String,
  ) -> Result<Option<Faculty>> {
    let raw = self
      .conn
      .call(move |conn| Ok(query_faculty(conn, filter, [param], true)?.pop()))
      .await?;
    raw.map(RawFaculty::into_faculty).transpose()
  }
}

#[cfg(test)]
impl SqliteStore {
  /// Child rows across all six tables, whichever faculty they belong to.
  pub(crate) async fn child_row_count(&self) -> Result<i64> {
    let count = self
      .conn
      .call(|conn| {
        let mut total = 0;
        for collection in Collection::ALL {
          let table = crate::encode::collection_table(collection);
          let n: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
          total += n;
        }
        Ok(total)
      })
      .await?;
    Ok(count)
  }
}

// ─── SQL helpers (run on the connection thread) ──────────────────────────────

fn query_faculty<P: rusqlite::Params>(
  conn:    &Connection,
  filter:  &str,
  params:  P,
  hydrate: bool,
) -> rusqlite::Result<Vec<RawFaculty>> {
  let sql = format!("SELECT {FACULTY_COLUMNS} FROM faculty {filter} ORDER BY rowid");
  let mut stmt = conn.prepare(&sql)?;
  let mut rows = stmt
    .query_map(params, RawFaculty::from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  if hydrate {
    for raw in &mut rows {
      raw.collections = RawCollections::load(conn, &raw.faculty_id)?;
    }
  }
  Ok(rows)
}

fn faculty_exists(conn: &Connection, faculty_id: &str) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM faculty WHERE faculty_id = ?1",
        [faculty_id],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

/// Look for another record already holding this record's headship or
/// username.
fn check_uniqueness(
  conn:    &Connection,
  faculty: &Faculty,
) -> rusqlite::Result<Option<Rejected>> {
  let id = encode_uuid(faculty.faculty_id);

  if faculty.is_department_head {
    let taken: bool = conn.query_row(
      "SELECT EXISTS (
         SELECT 1 FROM faculty
         WHERE department = ?1 AND is_department_head = 1 AND faculty_id != ?2
       )",
      rusqlite::params![faculty.department, id],
      |r| r.get(0),
    )?;
    if taken {
      return Ok(Some(Rejected::HeadTaken));
    }
  }

  if let Some(username) = &faculty.username {
    let taken: bool = conn.query_row(
      "SELECT EXISTS (
         SELECT 1 FROM faculty WHERE username = ?1 AND faculty_id != ?2
       )",
      rusqlite::params![username, id],
      |r| r.get(0),
    )?;
    if taken {
      return Ok(Some(Rejected::UsernameTaken));
    }
  }

  Ok(None)
}

/// Insert the faculty row and all of its children. Uniqueness is the
/// caller's concern.
fn insert_faculty_rows(conn: &Connection, faculty: &Faculty) -> rusqlite::Result<()> {
  let id = encode_uuid(faculty.faculty_id);
  conn.execute(
    &format!(
      "INSERT INTO faculty ({FACULTY_COLUMNS})
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
    ),
    rusqlite::params![
      id,
      faculty.name,
      faculty.designation,
      faculty.department,
      faculty.email,
      faculty.joining_date,
      faculty.experience,
      faculty.employment_type.as_str(),
      faculty.is_department_head,
      faculty.username,
      faculty.password_hash,
      faculty.image,
    ],
  )?;
  insert_collections(conn, &id, &faculty.collections, &Collection::ALL)
}

/// Identifies the faculty a rejected or failed write was about.
struct WriteTarget {
  faculty_id: Uuid,
  department: String,
  username:   Option<String>,
}

impl WriteTarget {
  fn of(faculty: &Faculty) -> Self {
    Self {
      faculty_id: faculty.faculty_id,
      department: faculty.department.clone(),
      username:   faculty.username.clone(),
    }
  }

  fn rejected(self, rejected: Rejected) -> Error {
    match rejected {
      Rejected::HeadTaken => Error::DepartmentHeadTaken(self.department),
      Rejected::UsernameTaken => Error::UsernameTaken(self.username.unwrap_or_default()),
      Rejected::Missing => Error::FacultyNotFound(self.faculty_id),
    }
  }

  /// Map a unique-index violation (the storage-level backstop) onto the
  /// matching domain error.
  fn failed(&self, err: tokio_rusqlite::Error) -> Error {
    let message = match &err {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, Some(msg)))
        if e.code == rusqlite::ErrorCode::ConstraintViolation =>
      {
        msg.as_str()
      }
      _ => return Error::Database(err),
    };
    if message.contains("faculty.department") {
      Error::DepartmentHeadTaken(self.department.clone())
    } else if message.contains("faculty.username") {
      Error::UsernameTaken(self.username.clone().unwrap_or_default())
    } else {
      Error::Database(err)
    }
  }
}

// ─── CampusStore impl ────────────────────────────────────────────────────────

impl CampusStore for SqliteStore {
  type Error = Error;

  // ── Faculty ───────────────────────────────────────────────────────────────

  async fn insert_faculty(&self, faculty: Faculty) -> Result<Faculty> {
    let target = WriteTarget::of(&faculty);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if let Some(rejected) = check_uniqueness(&tx, &faculty)? {
          return Ok(Err(rejected));
        }

        insert_faculty_rows(&tx, &faculty)?;
        tx.commit()?;
        Ok(Ok(faculty))
      })
      .await
      .map_err(|e| target.failed(e))?;

    outcome.map_err(|rejected| target.rejected(rejected))
  }

  async fn get_faculty(&self, id: Uuid) -> Result<Option<Faculty>> {
    self
      .query_one_faculty("WHERE faculty_id = ?1", encode_uuid(id))
      .await
  }

  async fn list_faculty(&self, query: FacultyQuery) -> Result<Vec<Faculty>> {
    let FacultyQuery { department, hydrate } = query;

    let raws: Vec<RawFaculty> = self
      .conn
      .call(move |conn| {
        let rows = match department {
          Some(d) => query_faculty(conn, "WHERE department = ?1", [d], hydrate)?,
          None => query_faculty(conn, "", rusqlite::params![], hydrate)?,
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFaculty::into_faculty).collect()
  }

  async fn update_faculty(
    &self,
    faculty:  Faculty,
    replaced: Vec<Collection>,
  ) -> Result<Faculty> {
    let target = WriteTarget::of(&faculty);

    let outcome = self
      .conn
      .call(move |conn| {
        let id = encode_uuid(faculty.faculty_id);

        let tx = conn.transaction()?;
        if !faculty_exists(&tx, &id)? {
          return Ok(Err(Rejected::Missing));
        }
        if let Some(rejected) = check_uniqueness(&tx, &faculty)? {
          return Ok(Err(rejected));
        }

        tx.execute(
          "UPDATE faculty SET
             name = ?2, designation = ?3, department = ?4, email = ?5,
             joining_date = ?6, experience = ?7, employment_type = ?8,
             is_department_head = ?9, username = ?10, password_hash = ?11,
             image = ?12
           WHERE faculty_id = ?1",
          rusqlite::params![
            id,
            faculty.name,
            faculty.designation,
            faculty.department,
            faculty.email,
            faculty.joining_date,
            faculty.experience,
            faculty.employment_type.as_str(),
            faculty.is_department_head,
            faculty.username,
            faculty.password_hash,
            faculty.image,
          ],
        )?;
        for collection in &replaced {
          delete_collection(&tx, &id, *collection)?;
        }
        insert_collections(&tx, &id, &faculty.collections, &replaced)?;
        tx.commit()?;

        // Read back what is now stored, untouched collections included.
        let stored = query_faculty(conn, "WHERE faculty_id = ?1", [&id], true)?.pop();
        Ok(stored.ok_or(Rejected::Missing))
      })
      .await
      .map_err(|e| target.failed(e))?;

    match outcome {
      Ok(raw) => raw.into_faculty(),
      Err(rejected) => Err(target.rejected(rejected)),
    }
  }

  async fn delete_faculty(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !faculty_exists(&tx, &id_str)? {
          return Ok(false);
        }
        for collection in Collection::ALL {
          delete_collection(&tx, &id_str, collection)?;
        }
        tx.execute("DELETE FROM faculty WHERE faculty_id = ?1", [&id_str])?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(removed)
  }

  async fn find_department_head(&self, department: String) -> Result<Option<Faculty>> {
    self
      .query_one_faculty(
        "WHERE department = ?1 AND is_department_head = 1",
        department,
      )
      .await
  }

  async fn find_head_by_username(&self, username: String) -> Result<Option<Faculty>> {
    self
      .query_one_faculty(
        "WHERE username = ?1 AND is_department_head = 1",
        username,
      )
      .await
  }

  // ── Buzz ──────────────────────────────────────────────────────────────────

  async fn insert_buzz(&self, buzz: Buzz) -> Result<Buzz> {
    let id_str      = encode_uuid(buzz.buzz_id);
    let design_json = serde_json::to_string(&buzz.design)?;
    let created_str = encode_dt(buzz.created_at);
    let updated_str = encode_dt(buzz.updated_at);
    let content     = buzz.content.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!("INSERT INTO buzz ({BUZZ_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
          rusqlite::params![id_str, content, design_json, created_str, updated_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(buzz)
  }

  async fn get_buzz(&self, id: Uuid) -> Result<Option<Buzz>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawBuzz> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {BUZZ_COLUMNS} FROM buzz WHERE buzz_id = ?1"),
              [id_str],
              RawBuzz::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawBuzz::into_buzz).transpose()
  }

  async fn list_buzz(&self) -> Result<Vec<Buzz>> {
    let raws: Vec<RawBuzz> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {BUZZ_COLUMNS} FROM buzz ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawBuzz::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBuzz::into_buzz).collect()
  }

  async fn update_buzz(&self, buzz: Buzz) -> Result<Buzz> {
    let id_str      = encode_uuid(buzz.buzz_id);
    let design_json = serde_json::to_string(&buzz.design)?;
    let updated_str = encode_dt(buzz.updated_at);
    let content     = buzz.content.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE buzz SET content = ?2, design = ?3, updated_at = ?4 WHERE buzz_id = ?1",
          rusqlite::params![id_str, content, design_json, updated_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::BuzzNotFound(buzz.buzz_id));
    }
    Ok(buzz)
  }

  async fn delete_buzz(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM buzz WHERE buzz_id = ?1", [id_str])?)
      })
      .await?;

    Ok(changed > 0)
  }
}
