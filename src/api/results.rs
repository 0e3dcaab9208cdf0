use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::db::RecordStore;
use crate::error::ApiError;
use crate::models::{Pagination, ResultsQuery, StoredRecord};
use crate::state::AppState;

/// GET /results - Page through stored records, most recent first.
///
/// Unreadable query strings fall back to the default page rather than
/// failing the request.
pub async fn list_results(
    State(state): State<AppState>,
    query: Result<Query<ResultsQuery>, QueryRejection>,
) -> Result<Json<Vec<StoredRecord>>, ApiError> {
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            tracing::debug!("Ignoring malformed results query: {rejection}");
            ResultsQuery::default()
        }
    };
    let page = Pagination::from_query(&query);

    let records = state.store.list(page).await.map_err(ApiError::Results)?;
    Ok(Json(records))
}
