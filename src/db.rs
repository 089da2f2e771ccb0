use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::{prelude::*, sql_query};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{DatabaseError, Result};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Ensures the database file exists and is migrated to the latest schema.
pub fn init(db_path: &str) -> Result<()> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }

    run_migrations(db_path)
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(DatabaseError::PoolCreationFailed)?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> std::result::Result<DbConnection, DatabaseError> {
    pool.get().map_err(DatabaseError::PoolCreationFailed)
}

fn establish_connection(db_path: &str) -> Result<SqliteConnection> {
    let mut conn =
        SqliteConnection::establish(db_path).map_err(DatabaseError::ConnectionFailed)?;

    // Enable foreign key constraint enforcement
    sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(DatabaseError::QueryFailed)?;

    Ok(conn)
}

fn run_migrations(db_path: &str) -> Result<()> {
    let mut connection = establish_connection(db_path)?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    Ok(())
}

fn create_db_file(db_path: &str) -> Result<()> {
    let db_dir = Path::new(db_path).parent().ok_or_else(|| {
        DatabaseError::MigrationFailed(format!("Invalid database path: {}", db_path))
    })?;

    if !db_dir.exists() {
        fs::create_dir_all(db_dir)?;
    }

    fs::File::create(db_path)?;
    Ok(())
}
