//! SQLite implementation of [`RecordStore`].
//!
//! The pool connects lazily: [`SqliteStore::open_lazy`] only validates the
//! connection string, and the first connection is made by
//! [`SqliteStore::init`] (or by whichever query runs first).

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::RecordStore;
use crate::models::{Pagination, Record, StoredRecord};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS repos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    owner       TEXT    NOT NULL,
    stars       INTEGER NOT NULL,
    url         TEXT    NOT NULL,
    description TEXT,
    searched_at INTEGER NOT NULL
)";

type RecordRow = (i64, String, String, i64, String, Option<String>, i64);

/// SQLite-backed record store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Build a pool for `url` without connecting.
    ///
    /// Fails only if `url` is not a valid SQLite connection string. The
    /// database file is created on first connect if it does not exist.
    pub fn open_lazy(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);
        Ok(Self { pool })
    }

    /// Connect and create the `repos` table if it is missing.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Open and initialize in one step.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let store = Self::open_lazy(url, max_connections)?;
        store.init().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl RecordStore for SqliteStore {
    async fn insert_many(&self, records: &[Record]) -> Result<(), sqlx::Error> {
        if records.is_empty() {
            return Ok(());
        }

        let searched_at = Utc::now().timestamp_millis();
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO repos (name, owner, stars, url, description, searched_at) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.name.clone())
                .push_bind(record.owner.clone())
                .push_bind(record.stars)
                .push_bind(record.url.clone())
                .push_bind(record.description.clone())
                .push_bind(searched_at);
        });
        builder.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<StoredRecord>, sqlx::Error> {
        // SQLite treats a negative LIMIT as "no limit".
        let limit = page.limit.map(clamp_i64).unwrap_or(-1);
        let offset = clamp_i64(page.offset());

        let rows: Vec<RecordRow> = sqlx::query_as(
            "SELECT id, name, owner, stars, url, description, searched_at \
             FROM repos ORDER BY searched_at DESC, id DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, owner, stars, url, description, searched_at)| StoredRecord {
                id,
                record: Record {
                    name,
                    owner,
                    stars,
                    url,
                    description,
                },
                searched_at: DateTime::from_timestamp_millis(searched_at).unwrap_or_else(|| {
                    tracing::warn!(raw = searched_at, id, "invalid searched_at; using now");
                    Utc::now()
                }),
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM repos")
            .fetch_one(&self.pool)
            .await
    }
}

fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
