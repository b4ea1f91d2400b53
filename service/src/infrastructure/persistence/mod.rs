use antenne_common::Database;

use crate::domain::repository::RepositoryError;

mod agenda;
mod articles;
mod authorizations;
mod info;
mod questions;
mod shows;
mod videos;

/// One adapter for all aggregates; each `impl` block lives next to its SQL
/// in the per-aggregate module.
#[derive(Clone)]
pub struct PostgresStore {
    database: &'static Database,
}

impl PostgresStore {
    pub fn new(database: &'static Database) -> Self {
        Self { database }
    }

    pub(crate) fn pool(&self) -> &sqlx::PgPool {
        self.database.pool()
    }
}

pub(crate) fn storage_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(error.to_string())
}

/// Write-path mapping: a unique-index violation is a domain conflict (the
/// partial indexes backstop the transactional checks), anything else is a
/// storage failure.
pub(crate) fn write_error(error: sqlx::Error, conflict_message: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return RepositoryError::UniqueViolation(conflict_message.to_string());
        }
    }
    RepositoryError::DatabaseError(error.to_string())
}
