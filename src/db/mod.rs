//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the pool-backed storage handle and its queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, NewQuestion, Question, category_map};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TriviaStorage, connect};
