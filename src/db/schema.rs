//! SQL DDL for initializing the database schema.
//! SQLite-first design; every statement is idempotent.

/// SQLite schema includes:
/// - `items` table (one managed item per row, `id` assigned by SQLite)
/// - `ix_items_name` index for lookups by name
pub const SQLITE_INIT: &str = r"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_items_name ON items(name);
";
