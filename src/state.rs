use std::sync::Arc;

use crate::config::Config;
use crate::db::sqlite::SqliteStore;
use crate::github::GithubClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<SqliteStore>,
    pub github: GithubClient,
}

impl AppState {
    /// Open the store, create its schema, and build the state.
    ///
    /// A failed initial connection is logged and does not abort startup;
    /// storage calls then fail per request.
    pub async fn connect(config: Config) -> anyhow::Result<Self> {
        let store = SqliteStore::open_lazy(&config.database_url, config.db_max_connections)?;
        match store.init().await {
            Ok(()) => tracing::info!("Database connected"),
            Err(e) => tracing::error!("Database connection error: {e}"),
        }
        Self::new(config, store)
    }

    /// Build the state around an already-opened store. The store may still be
    /// unconnected; handlers surface connection failures per request.
    pub fn new(config: Config, store: SqliteStore) -> anyhow::Result<Self> {
        let github = GithubClient::new(&config.github)?;
        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            github,
        })
    }
}
