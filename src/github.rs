use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::models::Record;

/// Client for the upstream repository search endpoint.
///
/// Requests are unauthenticated, so they are subject to the upstream's
/// anonymous rate limit.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    per_page: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    items: Vec<GithubRepo>,
}

#[derive(Deserialize)]
struct GithubRepo {
    name: String,
    owner: GithubOwner,
    stargazers_count: i64,
    html_url: String,
    description: Option<String>,
}

#[derive(Deserialize)]
struct GithubOwner {
    login: String,
}

impl GithubRepo {
    fn into_record(self) -> Record {
        Record {
            name: self.name,
            owner: self.owner.login,
            stars: self.stargazers_count,
            url: self.html_url,
            description: self.description,
        }
    }
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("repo-harvest/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            per_page: config.per_page,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search repositories matching `keyword`, returning at most `per_page`
    /// records in upstream order.
    pub async fn search_repositories(&self, keyword: &str) -> Result<Vec<Record>> {
        let url = format!("{}/search/repositories", self.base_url);
        let per_page = self.per_page.to_string();

        let resp = self
            .http
            .get(&url)
            .query(&[("q", keyword), ("per_page", per_page.as_str())])
            .send()
            .await
            .context("Failed to call GitHub search API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub search API returned {status}: {body}");
        }

        let body: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse GitHub search response")?;

        Ok(into_records(body, self.per_page))
    }
}

fn into_records(body: SearchResponse, cap: usize) -> Vec<Record> {
    body.items.into_iter().take(cap).map(GithubRepo::into_record).collect()
}
