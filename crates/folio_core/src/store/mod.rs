//! Key-value storage abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the injected storage contract replacing the page's implicit
//!   local-storage global.
//! - Isolate SQLite details from service/business orchestration.
//!
//! # Invariants
//! - `SqliteKeyValueStore` refuses connections without a migrated schema.
//! - Removing an absent key is a no-op, matching local-storage semantics.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod content_repo;
pub mod kv;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
