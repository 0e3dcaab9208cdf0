use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::db::RecordStore;
use crate::error::ApiError;
use crate::models::{Record, SearchRequest};
use crate::state::AppState;

/// POST /search - Query the upstream API for `keyword`, store every returned
/// record and echo them back in their pre-storage shape.
///
/// Each call stores a fresh batch: repeating a keyword duplicates records.
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let keyword = match payload {
        Ok(Json(SearchRequest {
            keyword: Some(keyword),
        })) if !keyword.is_empty() => keyword,
        Ok(_) => return Err(ApiError::BadRequest("Keyword is required".to_string())),
        Err(rejection) => {
            tracing::debug!("Rejected search body: {rejection}");
            return Err(ApiError::BadRequest("Keyword is required".to_string()));
        }
    };

    let records = state
        .github
        .search_repositories(&keyword)
        .await
        .map_err(ApiError::Search)?;

    state
        .store
        .insert_many(&records)
        .await
        .context("Failed to store search results")
        .map_err(ApiError::Search)?;

    tracing::info!("Stored {} records for keyword '{keyword}'", records.len());
    Ok(Json(records))
}
