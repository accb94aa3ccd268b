//! Database connection helpers.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::errors::domain::DomainError;

/// Connect to the database for the given profile.
///
/// The pool is capped at a single connection: SQLite serializes writers
/// anyway, an in-memory database exists only for the connection that opened
/// it, and the game model assumes one logical mutator per instance.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, DomainError> {
    let url = db_url(&profile);

    let mut options = ConnectOptions::new(url);
    options.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(options).await?;
    info!(?profile, "database connected");
    Ok(conn)
}

/// Run pending migrations (idempotent). Embedding binaries call this once at
/// startup, before serving any chat traffic.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(conn, None).await
}
