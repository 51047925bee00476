// src/render/grid.rs
// =============================================================================
// The grid is the container the cards are mounted into, together with the
// status line shown above it ("Showing 4 selected repositories.").
//
// Mounting always starts from an empty grid, so calling mount() again with a
// different ordering simply replaces what was there.
// =============================================================================

use std::fmt;

use super::card::{render_card, Card};
use crate::github::RepositoryRecord;

/// Text of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Before anything was fetched
    Loading,
    /// The fetch failed as a whole
    Failed,
    /// Fetch worked, but nothing survived selection
    Empty,
    /// This many cards are mounted
    Showing(usize),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Loading => f.write_str("Loading selected repositories…"),
            Status::Failed => f.write_str("Couldn’t load repositories right now."),
            Status::Empty => {
                f.write_str("No repositories found (check the curated repository names or filters).")
            }
            Status::Showing(count) => write!(f, "Showing {count} selected repositories."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cards: Vec<Card>,
    status: Status,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: Status::Loading,
        }
    }

    /// Replaces the mounted cards with one card per repository, in order
    pub fn mount(&mut self, repos: &[&RepositoryRecord]) {
        self.cards.clear();
        self.cards.extend(repos.iter().map(|repo| Card::from_record(repo)));

        self.status = if self.cards.is_empty() {
            Status::Empty
        } else {
            Status::Showing(self.cards.len())
        };
    }

    /// Clears the grid and reports the fetch failure
    pub fn fail(&mut self) {
        self.cards.clear();
        self.status = Status::Failed;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// HTML for all mounted cards, in order
    pub fn render(&self) -> String {
        self.cards.iter().map(render_card).collect()
    }
}
