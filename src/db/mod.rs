//! Database module: schema, row model and data access for the `items` table.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring an `items` row
//! - `payload.rs`: caller-supplied fields for create/update
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: `ItemStore`, the pooled data-access layer shared by handlers

pub mod models;
pub mod payload;
pub mod schema;
pub mod store;

pub use models::DbItem;
pub use payload::ItemPayload;
pub use schema::SQLITE_INIT;
pub use store::ItemStore;
