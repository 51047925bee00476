// src/render/mod.rs
// =============================================================================
// This module turns repositories into HTML.
//
// Submodules:
// - escape: HTML escaping for untrusted text
// - date: "last updated" display dates
// - card: repository -> card view-model -> <article> markup
// - grid: the card container plus its status line
// - page: the full HTML document
// =============================================================================

mod card;
mod date;
mod escape;
mod grid;
mod page;

pub use card::Card;
pub use grid::{Grid, Status};
pub use page::{render_page, Page, ProfileView};
