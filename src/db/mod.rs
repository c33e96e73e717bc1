//! Database module: models, schema and storage for the staff tables.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the owned storage handle and its queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Department, Employee, EmployeeDetail, EmployeeField, NewEmployee, Role};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, StaffStorage, connect};
