//! Error types for the Meal Tracker application

use thiserror::Error;

/// Errors surfaced by the record store.
///
/// Constraint violations on the storage layer are mapped to domain
/// errors here; everything else propagates as `Storage`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique-constraint violation on a user name.
    #[error("Username already exists.")]
    DuplicateName,

    /// A referenced id does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The database file is unreachable or a statement failed.
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

/// Errors raised while creating or upgrading the schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Storage unreachable: {0}")]
    Unreachable(String),

    #[error("Migration could not apply: {0}")]
    Migration(String),
}
