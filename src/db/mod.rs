//! Record persistence.
//!
//! [`RecordStore`] is the interface the HTTP handlers use; [`sqlite::SqliteStore`]
//! is the implementation wired into [`crate::state::AppState`].

pub mod sqlite;

use crate::models::{Pagination, Record, StoredRecord};

/// Append-only store of search result records.
///
/// Records are never updated or deleted, and nothing prevents the same
/// repository from being stored many times.
pub trait RecordStore: Send + Sync + 'static {
    /// Persist a batch of records in a single write. The store stamps every
    /// record of the batch with the current time.
    fn insert_many(
        &self,
        records: &[Record],
    ) -> impl std::future::Future<Output = Result<(), sqlx::Error>> + Send;

    /// Read one page of records, most recently stored first.
    fn list(
        &self,
        page: Pagination,
    ) -> impl std::future::Future<Output = Result<Vec<StoredRecord>, sqlx::Error>> + Send;

    /// Total number of stored records.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, sqlx::Error>> + Send;
}
