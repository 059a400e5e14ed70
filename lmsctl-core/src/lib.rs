pub mod config;
pub mod engine;
pub mod error;
pub mod schema;
pub mod seed;
pub mod value;

pub use config::DbConfig;
pub use engine::{create, delete, get, list, render_row, update, Record};
pub use error::{IntegrityKind, Result, StoreError};
pub use schema::{Column, ColumnKind, Table};
pub use value::Value;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
