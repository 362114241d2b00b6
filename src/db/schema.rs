//! SQL DDL for initializing the database schema.

/// SQLite schema: a single `quotes` table.
///
/// `id` is an `INTEGER PRIMARY KEY` alias of the rowid, so SQLite assigns it on insert and
/// it grows with insertion order.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY NOT NULL,
    author TEXT NOT NULL,
    text TEXT NOT NULL
);
"#;
