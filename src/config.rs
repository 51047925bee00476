// src/config.rs
// =============================================================================
// Portfolio configuration: whose repositories we show, and which ones.
//
// Three layers, later ones win:
// 1. Built-in defaults (the constants below)
// 2. An optional TOML file passed with --config
// 3. Command-line flags (--account, --curated, --scope, --api-base)
//
// Example portfolio.toml:
//
//   account = "octocat"
//   curated = ["Hello-World", "Spoon-Knife"]
//   scope = "curated"        # or "account" to list every repository
//
// Rust concepts:
// - thiserror: derive std::error::Error for our own error enum
// - Option layering with .or() / .unwrap_or_else()
// - Newtype pattern: CurationList wraps a Vec<String> with extra behaviour
// =============================================================================

use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// GitHub account whose repositories make up the portfolio
pub const DEFAULT_ACCOUNT: &str = "gautamHCSCV";

/// Hand-picked repositories, in the order they should be shown
pub const DEFAULT_CURATED: &[&str] = &[
    "Image-Anonymization-using-Adversarial-Attacks",
    "Number_Plate_detection-using-YOLO-v7",
    "Telmedicine-chatbot-for-disease-prediction",
    "Transformers-Applications",
];

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Which repositories get fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchScope {
    /// One request per curated repository name
    #[default]
    Curated,
    /// A single listing of the account's repositories (newest first, up to 100)
    Account,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("account name must not be empty")]
    EmptyAccount,

    #[error("invalid API base URL '{value}': {source}")]
    InvalidApiBase {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Ordered list of repository names that controls inclusion and priority.
///
/// Names are trimmed, blanks dropped and duplicates removed (first one wins).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurationList {
    names: Vec<String>,
}

impl CurationList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of `name` in the list, or `None` if it isn't curated
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|curated| curated == name)
    }

    /// Sort key for curated ordering: uncurated names rank after every
    /// curated one (rank == list length)
    pub fn rank(&self, name: &str) -> usize {
        self.position(name).unwrap_or(self.names.len())
    }
}

// Shape of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    account: Option<String>,
    curated: Option<Vec<String>>,
    scope: Option<FetchScope>,
    api_base: Option<String>,
}

/// Values given on the command line. `None` / empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub account: Option<String>,
    pub curated: Vec<String>,
    pub scope: Option<FetchScope>,
    pub api_base: Option<String>,
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub account: String,
    pub curated: CurationList,
    scope: FetchScope,
    pub api_base: Url,
}

impl Config {
    /// Builds the configuration from defaults, an optional file and CLI flags
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => load_file(path)?,
            None => ConfigFile::default(),
        };
        Self::merge(file, overrides)
    }

    fn merge(file: ConfigFile, overrides: Overrides) -> Result<Self, ConfigError> {
        let account = overrides
            .account
            .or(file.account)
            .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string())
            .trim()
            .to_string();

        if account.is_empty() {
            return Err(ConfigError::EmptyAccount);
        }

        let curated = if !overrides.curated.is_empty() {
            CurationList::new(&overrides.curated)
        } else if let Some(names) = file.curated {
            CurationList::new(names)
        } else {
            CurationList::new(DEFAULT_CURATED)
        };

        let scope = overrides.scope.or(file.scope).unwrap_or_default();

        let raw_base = overrides
            .api_base
            .or(file.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw_base).map_err(|source| ConfigError::InvalidApiBase {
            value: raw_base.clone(),
            source,
        })?;

        Ok(Self {
            account,
            curated,
            scope,
            api_base,
        })
    }

    /// The scope actually used for fetching.
    ///
    /// An empty curated list has nothing to fetch one by one, so it always
    /// falls back to listing the whole account.
    pub fn scope(&self) -> FetchScope {
        if self.curated.is_empty() {
            FetchScope::Account
        } else {
            self.scope
        }
    }
}

fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
