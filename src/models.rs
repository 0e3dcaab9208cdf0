use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snapshot of one upstream search result, as returned by `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub owner: String,
    pub stars: i64,
    pub url: String,
    pub description: Option<String>,
}

/// A record as read back from storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: i64,
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "searchedAt")]
    pub searched_at: DateTime<Utc>,
}

/// Search request body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub keyword: Option<String>,
}

/// Query string for `/results`. Values stay raw so malformed input is
/// normalized by [`Pagination`] instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Normalized skip/limit window over stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    /// `None` means no limit.
    pub limit: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl Pagination {
    /// Missing, non-numeric or sub-1 pages become page 1. A missing or
    /// non-numeric limit becomes 10, zero means unlimited and a negative
    /// limit uses its absolute value.
    pub fn from_query(query: &ResultsQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p as u64)
            .unwrap_or(DEFAULT_PAGE);

        let limit = match query
            .limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
        {
            None => Some(DEFAULT_LIMIT),
            Some(0) => None,
            Some(l) => Some(l.unsigned_abs()),
        };

        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        match self.limit {
            Some(limit) => (self.page - 1).saturating_mul(limit),
            None => 0,
        }
    }
}
