//! Raw read/write primitives over the relational backend.

use crate::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS config (
        configKey TEXT PRIMARY KEY,
        configValue TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS serverConfig (
        serverId TEXT NOT NULL,
        configKey TEXT NOT NULL,
        configValue TEXT NOT NULL,
        PRIMARY KEY (serverId, configKey)
    )",
    "CREATE TABLE IF NOT EXISTS memberConfig (
        memberId TEXT NOT NULL,
        configKey TEXT NOT NULL,
        configValue TEXT NOT NULL,
        PRIMARY KEY (memberId, configKey)
    )",
];

/// Connection-per-call access to the configuration tables.
///
/// Every call acquires a connection from the pool and releases it on
/// all exit paths. Backend failures surface as `Err(StoreError)`, so
/// callers can tell "no rows" from "backend unreachable".
#[derive(Clone)]
pub struct ConfigStore {
    pool: SqlitePool,
}

impl ConfigStore {
    /// Open the database and create the schema if needed.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // SQLite allows a single writer at a time; one pooled connection
        // also keeps in-memory databases on the same connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }

        info!("Config store ready at {}", url);
        Ok(Self { pool })
    }

    /// Close the pool. Subsequent reads and writes fail with
    /// `StoreError`.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run a parameterized SELECT, returning the first column of each row.
    pub async fn read(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let mut query = sqlx::query_scalar::<_, String>(sql);
        for param in params {
            query = query.bind(*param);
        }

        let rows = query.fetch_all(&mut *conn).await?;
        debug!("Read returned {} rows", rows.len());
        Ok(rows)
    }

    /// Run a parameterized INSERT, UPDATE or DELETE, returning the number
    /// of rows affected.
    pub async fn write(&self, sql: &str, params: &[&str]) -> Result<u64, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(*param);
        }

        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
