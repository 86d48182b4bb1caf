//! Cluster lifecycle helpers for `PostgreSQL` integration tests.

use diesel::prelude::*;
use postgresql_embedded::{PostgreSQL, Status};
use rstest::fixture;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use tasktrack::task::adapters::postgres::{PostgresTaskRepository, run_migrations};
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();
static DATABASE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded `PostgreSQL` server shared by every test in the binary.
pub struct ManagedCluster {
    runtime: Runtime,
    postgres: PostgreSQL,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let runtime = test_runtime()?;
        let mut postgres = PostgreSQL::default();
        runtime.block_on(async {
            postgres.setup().await?;
            if !matches!(postgres.status(), Status::Started) {
                postgres.start().await?;
            }
            Ok::<(), postgresql_embedded::Error>(())
        })?;
        Ok(Self { runtime, postgres })
    }

    /// Creates a fresh, migrated database and returns it with a repository
    /// bound to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub fn temporary_database(
        &'static self,
        prefix: &str,
    ) -> Result<(TemporaryDatabase, PostgresTaskRepository), BoxError> {
        let sequence = DATABASE_COUNTER.fetch_add(1, Ordering::SeqCst);
        let name = format!("{prefix}_{}_{sequence}", std::process::id());
        self.runtime.block_on(self.postgres.create_database(&name))?;
        let database = TemporaryDatabase {
            cluster: self,
            name,
        };

        let url = database.url();
        let mut connection = PgConnection::establish(&url)?;
        run_migrations(&mut connection)?;
        let pool = PostgresTaskRepository::build_pool(&url, 2)?;
        Ok((database, PostgresTaskRepository::new(pool)))
    }
}

/// A database that is dropped when the guard goes out of scope.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Connection URL for this database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.postgres.settings().url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        drop(
            self.cluster
                .runtime
                .block_on(self.cluster.postgres.drop_database(&self.name)),
        );
    }
}

/// Builds a single-threaded runtime for driving async code from sync tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn test_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides the shared embedded `PostgreSQL` cluster.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    SHARED_CLUSTER.get_or_init(|| match ManagedCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    })
}
