//! SQL schema for the Campus SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS faculty (
    faculty_id         TEXT PRIMARY KEY,
    name               TEXT NOT NULL,
    designation        TEXT NOT NULL,
    department         TEXT NOT NULL,
    email              TEXT NOT NULL,
    joining_date       TEXT NOT NULL,
    experience         TEXT NOT NULL,
    employment_type    TEXT NOT NULL,   -- 'Regular' | 'Contract' | 'Visiting'
    is_department_head INTEGER NOT NULL DEFAULT 0,
    username           TEXT,
    password_hash      TEXT,            -- argon2 PHC string
    image              BLOB,
    CHECK (is_department_head IN (0, 1)),
    CHECK (is_department_head = 1 OR (username IS NULL AND password_hash IS NULL))
);

-- One head per department, and unambiguous credential lookup.
CREATE UNIQUE INDEX IF NOT EXISTS faculty_department_head_idx
    ON faculty(department) WHERE is_department_head = 1;
CREATE UNIQUE INDEX IF NOT EXISTS faculty_username_idx
    ON faculty(username) WHERE username IS NOT NULL;
CREATE INDEX IF NOT EXISTS faculty_department_idx ON faculty(department);

-- Child collections. Rows are removed explicitly before their faculty row;
-- the foreign keys reject anything left behind.
CREATE TABLE IF NOT EXISTS qualifications (
    record_id      TEXT PRIMARY KEY,
    faculty_id     TEXT NOT NULL REFERENCES faculty(faculty_id),
    position       INTEGER NOT NULL,
    degree         TEXT NOT NULL,
    passing_year   TEXT NOT NULL,
    college        TEXT NOT NULL,
    specialization TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS patents (
    record_id          TEXT PRIMARY KEY,
    faculty_id         TEXT NOT NULL REFERENCES faculty(faculty_id),
    position           INTEGER NOT NULL,
    title              TEXT NOT NULL,
    authors            TEXT NOT NULL,
    date               TEXT NOT NULL,
    application_number TEXT NOT NULL,
    patent_office      TEXT NOT NULL,
    status             TEXT NOT NULL,
    reference          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS book_chapters (
    record_id        TEXT PRIMARY KEY,
    faculty_id       TEXT NOT NULL REFERENCES faculty(faculty_id),
    position         INTEGER NOT NULL,
    title            TEXT NOT NULL,
    authors          TEXT NOT NULL,
    book_title       TEXT NOT NULL,
    publisher        TEXT NOT NULL,
    publication_year TEXT NOT NULL,
    doi              TEXT,
    isbn             TEXT,
    scopus_indexed   INTEGER NOT NULL DEFAULT 0,
    page_numbers     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS certifications (
    record_id            TEXT PRIMARY KEY,
    faculty_id           TEXT NOT NULL REFERENCES faculty(faculty_id),
    position             INTEGER NOT NULL,
    name                 TEXT NOT NULL,
    issuing_organization TEXT NOT NULL,
    issue_date           TEXT NOT NULL,
    expiry_date          TEXT,
    credential_id        TEXT NOT NULL,
    credential_url       TEXT,
    credits              TEXT
);

CREATE TABLE IF NOT EXISTS journal_publications (
    record_id        TEXT PRIMARY KEY,
    faculty_id       TEXT NOT NULL REFERENCES faculty(faculty_id),
    position         INTEGER NOT NULL,
    title            TEXT NOT NULL,
    authors          TEXT NOT NULL,
    journal_name     TEXT NOT NULL,
    publication_date TEXT NOT NULL,
    volume           TEXT NOT NULL,
    issue            TEXT,
    page_numbers     TEXT NOT NULL,
    doi              TEXT,
    issn             TEXT,
    indexing         TEXT
);

CREATE TABLE IF NOT EXISTS conference_publications (
    record_id       TEXT PRIMARY KEY,
    faculty_id      TEXT NOT NULL REFERENCES faculty(faculty_id),
    position        INTEGER NOT NULL,
    title           TEXT NOT NULL,
    authors         TEXT NOT NULL,
    conference_name TEXT NOT NULL,
    conference_date TEXT NOT NULL,
    location        TEXT,
    doi             TEXT,
    publisher       TEXT,
    isbn            TEXT,
    page_numbers    TEXT
);

CREATE INDEX IF NOT EXISTS qualifications_faculty_idx          ON qualifications(faculty_id);
CREATE INDEX IF NOT EXISTS patents_faculty_idx                 ON patents(faculty_id);
CREATE INDEX IF NOT EXISTS book_chapters_faculty_idx           ON book_chapters(faculty_id);
CREATE INDEX IF NOT EXISTS certifications_faculty_idx          ON certifications(faculty_id);
CREATE INDEX IF NOT EXISTS journal_publications_faculty_idx    ON journal_publications(faculty_id);
CREATE INDEX IF NOT EXISTS conference_publications_faculty_idx ON conference_publications(faculty_id);

CREATE TABLE IF NOT EXISTS buzz (
    buzz_id    TEXT PRIMARY KEY,
    content    TEXT NOT NULL,
    design     TEXT NOT NULL,   -- JSON object
    created_at TEXT NOT NULL,   -- RFC 3339 UTC, microseconds; server-assigned
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS buzz_created_idx ON buzz(created_at);

PRAGMA user_version = 1;
";
