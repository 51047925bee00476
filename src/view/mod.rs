// src/view/mod.rs
// =============================================================================
// This module decides what the reader sees.
//
// Submodules:
// - sort: fork filtering and the five sort modes
// - state: the fetched collection for this run, and mounting views of it
// =============================================================================

mod sort;
mod state;

pub use sort::{SortMode, ViewState};
pub use state::AppState;
