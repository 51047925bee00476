// src/view/sort.rs
// =============================================================================
// Picks which repositories are shown and in what order.
//
// Input:  the fetched repositories (never modified), the curated list and
//         the current view state (sort mode + "show forks").
// Output: a new Vec of references in display order.
//
// Steps:
// 1. Drop forks unless the view asks for them (every mode)
// 2. Sort the working copy with the comparator for the selected mode
// 3. `featured` additionally truncates to FEATURED_LIMIT cards
//
// All sorts are stable (Vec::sort_by), so equal keys keep fetch order.
//
// Rust concepts:
// - Vec<&T>: a working copy that borrows instead of cloning records
// - std::cmp::Ordering + .then_with(): composing comparators
// - clap::ValueEnum: lets the same enum be parsed from CLI flags
// =============================================================================

use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;

use crate::config::CurationList;
use crate::github::RepositoryRecord;

/// Maximum number of cards in `featured` mode
pub const FEATURED_LIMIT: usize = 9;

/// How the cards are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    /// Order of the curated list
    #[default]
    Curated,
    /// Most recently updated first
    Updated,
    /// Most stars first
    Stars,
    /// Alphabetical
    Name,
    /// Curated repositories first, then the most starred others (max 9)
    Featured,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Curated,
        SortMode::Updated,
        SortMode::Stars,
        SortMode::Name,
        SortMode::Featured,
    ];

    /// Value used in CLI flags and in the page's sort selector
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Curated => "curated",
            SortMode::Updated => "updated",
            SortMode::Stars => "stars",
            SortMode::Name => "name",
            SortMode::Featured => "featured",
        }
    }

    /// Human-readable label for the sort selector
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Curated => "Curated order",
            SortMode::Updated => "Recently updated",
            SortMode::Stars => "Most stars",
            SortMode::Name => "Name (A–Z)",
            SortMode::Featured => "Featured",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the reader asked to see. Recomputed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub mode: SortMode,
    pub show_forks: bool,
}

/// Filters and orders `repos` for display.
///
/// `repos` itself is left untouched; the result borrows from it.
pub fn select<'a>(
    repos: &'a [RepositoryRecord],
    curated: &CurationList,
    view: &ViewState,
) -> Vec<&'a RepositoryRecord> {
    let mut working: Vec<&RepositoryRecord> = repos
        .iter()
        .filter(|repo| view.show_forks || !repo.fork)
        .collect();

    match view.mode {
        SortMode::Curated => working.sort_by_key(|repo| curated.rank(&repo.name)),
        SortMode::Updated => working.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortMode::Stars => working.sort_by(|a, b| by_stars_desc(a, b)),
        SortMode::Name => working.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortMode::Featured => working = featured(working, curated),
    }

    working
}

fn by_stars_desc(a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
    b.stargazers_count.cmp(&a.stargazers_count)
}

// Curated repositories first (in list order), then everything else by stars
fn featured<'a>(working: Vec<&'a RepositoryRecord>, curated: &CurationList) -> Vec<&'a RepositoryRecord> {
    let (mut picked, mut rest): (Vec<_>, Vec<_>) = working
        .into_iter()
        .partition(|repo| curated.position(&repo.name).is_some());

    picked.sort_by_key(|repo| curated.rank(&repo.name));
    rest.sort_by(|a, b| by_stars_desc(a, b));

    picked.extend(rest);
    picked.truncate(FEATURED_LIMIT);
    picked
}

/// Name comparison in the order browsers use for `localeCompare` (Unicode
/// root collation), closely enough for repository names:
///
/// - whitespace < punctuation < digits < letters, so `a_b < a-b < a.b < a1 < ab`
/// - letters compare without case first; a case-only difference puts the
///   lowercase name first (`alpha < Alpha`)
///
/// Accented letters are not folded onto their base letter; they sort by
/// code point after the ASCII letters.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    a_lower
        .chars()
        .map(collation_key)
        .cmp(b_lower.chars().map(collation_key))
        // Same letters: reversed code point order puts lowercase first
        .then_with(|| b.cmp(a))
}

// Punctuation and symbols in root collation order
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

// (character class, position within the class)
fn collation_key(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if c.is_alphabetic() {
        (3, c as u32)
    } else if c.is_numeric() {
        (2, c as u32)
    } else {
        // Symbols missing from the table go after it, by code point
        match PUNCTUATION.chars().position(|p| p == c) {
            Some(rank) => (1, rank as u32),
            None => (1, PUNCTUATION.len() as u32 + c as u32),
        }
    }
}
