// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Decoding repository and profile JSON into our own types (types.rs)
// - Fetching curated repositories concurrently, or the account listing
// - Fetching the profile without letting its failure affect anything else
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod types;

// Re-export the pieces the rest of the app uses
pub use fetch::{fetch_all, FetchError, GithubApi, HttpApi};
pub use types::{Profile, RepositoryRecord};
