// src/github/fetch.rs
// =============================================================================
// This module fetches repository and profile metadata from the GitHub API.
//
// Strategy:
// - Curated scope: one `GET /repos/{account}/{name}` per curated name, all
//   sent at once and awaited together. A 404 (or any non-2xx) for one name
//   just drops that repository.
// - Account scope: one `GET /users/{account}/repos?per_page=100&sort=updated`
// - Profile: `GET /users/{account}`, fetched alongside the repositories.
//   If it fails we quietly use defaults; it never breaks the repo fetch.
//
// Failure model:
// - Non-success status for a single curated repo  -> that repo is absent
// - Network/TLS/DNS error or undecodable JSON      -> whole fetch fails
// - Non-success status for the account listing    -> whole fetch fails
//
// The HTTP calls sit behind the GithubApi trait so the batching logic can
// be tested with an in-memory fake instead of the real network.
//
// Rust concepts:
// - Traits + async-trait: an interface with async methods
// - futures::future::join_all: wait for many futures, keep their order
// - tokio::join!: run two different futures concurrently
// =============================================================================

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::types::{Profile, RepositoryRecord};
use crate::config::{Config, CurationList, FetchScope};

// GitHub asks clients to send this media type
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

// The listing endpoint returns at most one page of this many repositories
const PER_PAGE: &str = "100";

// Transport-level timeout; there is no retry on top of it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("API base URL '{0}' cannot have path segments")]
    InvalidBase(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// The three GitHub calls the portfolio needs.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Metadata for one repository; `Ok(None)` when GitHub answers with a
    /// non-success status (typically 404 for a renamed or private repo)
    async fn repository(&self, account: &str, name: &str) -> Result<Option<RepositoryRecord>, FetchError>;

    /// Up to 100 repositories owned by the account, most recently updated first
    async fn account_repositories(&self, account: &str) -> Result<Vec<RepositoryRecord>, FetchError>;

    /// Public profile of the account
    async fn profile(&self, account: &str) -> Result<Profile, FetchError>;
}

/// Everything one fetch cycle produced
#[derive(Debug)]
pub struct Fetched {
    pub repositories: Result<Vec<RepositoryRecord>, FetchError>,
    /// `None` when the profile call failed; the page uses defaults then
    pub profile: Option<Profile>,
}

/// GithubApi implementation backed by reqwest
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base: Url) -> Result<Self, FetchError> {
        // Headers sent with every request.
        // GitHub rejects requests that have no User-Agent at all.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(GITHUB_API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base })
    }

    // Builds `{base}/{segment}/{segment}...` with each segment percent-encoded,
    // so a repository name can never change the shape of the path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response, FetchError> {
        debug!(%url, "GET");
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl GithubApi for HttpApi {
    async fn repository(&self, account: &str, name: &str) -> Result<Option<RepositoryRecord>, FetchError> {
        let url = self.endpoint(&["repos", account, name])?;
        let response = self.get(url.clone()).await?;

        if !response.status().is_success() {
            debug!(%url, status = response.status().as_u16(), "repository not available");
            return Ok(None);
        }

        let repo = response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;
        Ok(Some(repo))
    }

    async fn account_repositories(&self, account: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        let mut url = self.endpoint(&["users", account, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", PER_PAGE)
            .append_pair("sort", "updated");

        let response = self.get(url.clone()).await?;
        let response = require_success(&url, response)?;

        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn profile(&self, account: &str) -> Result<Profile, FetchError> {
        let url = self.endpoint(&["users", account])?;
        let response = self.get(url.clone()).await?;
        let response = require_success(&url, response)?;

        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn require_success(url: &Url, response: Response) -> Result<Response, FetchError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        })
    }
}

/// Runs one full fetch cycle: repositories and profile, concurrently.
///
/// The profile result never influences the repository result.
pub async fn fetch_all(api: &dyn GithubApi, config: &Config) -> Fetched {
    let (repositories, profile) = tokio::join!(
        fetch_repositories(api, config),
        fetch_profile(api, &config.account),
    );

    Fetched { repositories, profile }
}

/// Fetches the repositories selected by the configured scope
pub async fn fetch_repositories(api: &dyn GithubApi, config: &Config) -> Result<Vec<RepositoryRecord>, FetchError> {
    let result = match config.scope() {
        FetchScope::Curated => fetch_curated(api, &config.account, &config.curated).await,
        FetchScope::Account => api.account_repositories(&config.account).await,
    };

    match &result {
        Ok(repos) => info!(account = %config.account, count = repos.len(), "fetched repositories"),
        Err(e) => warn!(account = %config.account, error = %e, "repository fetch failed"),
    }

    result
}

// One request per curated name, all in flight at once.
//
// join_all waits for *every* request, even if an early one fails, and hands
// the results back in list order. Only then do we look at them: absent repos
// are skipped, and the first hard error (in list order) fails the batch.
async fn fetch_curated(
    api: &dyn GithubApi,
    account: &str,
    curated: &CurationList,
) -> Result<Vec<RepositoryRecord>, FetchError> {
    let requests = curated.names().iter().map(|name| api.repository(account, name));
    let results = join_all(requests).await;

    let mut repos = Vec::with_capacity(results.len());
    for (name, result) in curated.names().iter().zip(results) {
        match result? {
            Some(repo) => repos.push(repo),
            None => debug!(%name, "dropping curated repository that could not be fetched"),
        }
    }

    Ok(repos)
}

/// Fetches the account profile; any failure becomes `None`
pub async fn fetch_profile(api: &dyn GithubApi, account: &str) -> Option<Profile> {
    match api.profile(account).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            debug!(%account, error = %e, "profile unavailable, using defaults");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why join_all instead of buffer_unordered?
//    - join_all returns results in the same order as the input futures
//    - The curated list order is the display order, so we want to keep it
//    - There are only a handful of curated repos, so no concurrency limit
//
// 2. Why does repository() return Result<Option<T>>?
//    - Ok(Some(repo)) = fetched
//    - Ok(None)       = GitHub said no (404 etc.), skip it quietly
//    - Err(e)         = we couldn't talk to GitHub at all
//    - Two different "failures" get two different shapes in the type
//
// 3. What does #[async_trait] do?
//    - Rewrites `async fn` in the trait into methods returning boxed futures
//    - This makes `&dyn GithubApi` possible, so tests can swap in a fake
// -----------------------------------------------------------------------------
