use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use sea_orm_migration::MigratorTrait;

use crate::migration::Migrator;

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection pool.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<OrmConn> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply pending migrations. With `reset` every table is dropped first.
pub async fn run_migrations(conn: &OrmConn, reset: bool) -> Result<()> {
    if reset {
        tracing::warn!("resetting database schema");
        Migrator::fresh(conn).await?;
    } else {
        Migrator::up(conn, None).await?;
    }
    Ok(())
}

/// Open a request-scoped session for a read-modify-write sequence.
///
/// The transaction rolls back when dropped, so only an explicit `commit`
/// persists the work.
pub async fn begin_session(conn: &OrmConn) -> Result<DatabaseTransaction, DbErr> {
    conn.begin().await
}
