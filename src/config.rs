use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind the HTTP server on
    pub host: String,
    /// Port to bind the HTTP server on
    pub port: u16,
    /// sqlx connection string for the record store (mandatory)
    pub database_url: String,
    /// Maximum pooled storage connections
    pub db_max_connections: u32,
    /// Upstream search API configuration
    pub github: GithubConfig,
    /// Emit logs as newline-delimited JSON
    pub log_json: bool,
}

/// Configuration for the upstream repository search API.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL, without trailing slash (e.g. "https://api.github.com").
    pub base_url: String,
    /// Number of items requested per search.
    pub per_page: usize,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            per_page: 10,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Fails only when `DATABASE_URL` is absent or empty; every other
    /// variable falls back to its default when missing or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => bail!("DATABASE_URL is not defined"),
        };

        let mut config = Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url,
            db_max_connections: 5,
            github: GithubConfig::default(),
            log_json: false,
        };

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            if let Ok(p) = port.parse() {
                config.port = p;
            }
        }
        if let Some(val) = lookup("DB_MAX_CONNECTIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.db_max_connections = v.max(1);
            }
        }
        if let Some(url) = lookup("GITHUB_API_URL") {
            config.github.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(val) = lookup("GITHUB_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.github.timeout_secs = v;
            }
        }
        if let Some(val) = lookup("LOG_JSON") {
            config.log_json = val == "1" || val.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
