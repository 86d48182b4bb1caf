//! `PostgreSQL` adapters for task persistence.

mod migrations;
mod models;
mod repository;
mod schema;

pub use migrations::{TaskMigrationError, run_migrations};
pub use repository::{PostgresTaskRepository, TaskPgPool};
