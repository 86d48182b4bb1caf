//! Embedded schema migrations for the task store.

use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Error raised when pending migrations cannot be applied.
#[derive(Debug, Error)]
#[error("failed to apply task migrations: {0}")]
pub struct TaskMigrationError(String);

/// Applies any pending migrations and returns how many ran.
///
/// # Errors
///
/// Returns [`TaskMigrationError`] when a migration fails.
pub fn run_migrations(connection: &mut PgConnection) -> Result<usize, TaskMigrationError> {
    connection
        .run_pending_migrations(MIGRATIONS)
        .map(|applied| applied.len())
        .map_err(|err| TaskMigrationError(err.to_string()))
}
