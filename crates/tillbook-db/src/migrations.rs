//! # Database Migrations
//!
//! Embedded SQL migrations for TillBook POS.
//!
//! Migration files live in `migrations/sqlite/` at the workspace root and
//! are compiled into the binary; no runtime file access is needed. Add new
//! migrations as `NNN_description.sql` - never modify an applied one.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Idempotent: applied migrations are tracked in `_sqlx_migrations` and each
/// pending one runs in its own transaction, in filename order.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied");
    Ok(())
}
