// src/github/types.rs
// =============================================================================
// Data structures for the GitHub API responses we consume.
//
// GitHub returns much more than we need; serde simply ignores fields that
// are not declared here. Fields that GitHub sometimes sends as `null`, as an
// empty string or not at all get normalised while decoding, so the rest of
// the program never has to ask "is this missing or empty?".
//
// Rust concepts:
// - #[derive(Deserialize)]: serde generates the JSON decoding code
// - #[serde(default, deserialize_with = ...)]: custom decoding per field
// - Option<T>: a value that may be absent
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Metadata for one repository, as returned by `GET /repos/{owner}/{repo}`
/// and by the `GET /users/{account}/repos` listing.
///
/// Records are never modified after decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name, unique within the account
    pub name: String,
    /// Link to the repository page on github.com
    pub html_url: String,
    /// Project website ("Live" link), if the owner set one
    #[serde(default, deserialize_with = "empty_as_none")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    /// Primary language as detected by GitHub
    #[serde(default, deserialize_with = "empty_as_none")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u64,
    /// True when this repository is a fork of another one
    #[serde(default, deserialize_with = "null_as_default")]
    pub fork: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Account metadata from `GET /users/{account}`.
///
/// Every display field is optional; the page falls back to defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub html_url: Option<String>,
}

// Decodes `null` as the type's default value (0, false, empty Vec)
//
// `#[serde(default)]` alone only covers a *missing* field; GitHub also
// sends explicit nulls.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Decodes `null`, `""` and whitespace-only strings as None
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
