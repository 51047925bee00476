// src/render/card.rs
// =============================================================================
// One repository -> one card.
//
// Two steps, kept separate on purpose:
// 1. Card::from_record() builds a plain view-model: placeholders filled in,
//    topics capped, date formatted. Nothing is escaped yet.
// 2. render_card() turns the view-model into HTML, escaping every field
//    that came from GitHub (URLs included) right at the point of insertion.
//
// The view-model is also what `list --json` prints.
//
// Rust concepts:
// - From-style constructors: building one type from a borrowed other
// - serde::Serialize with skip_serializing_if for optional fields
// - String building with format! and Iterator::map + collect
// =============================================================================

use serde::Serialize;

use super::date::display_date;
use super::escape::escape_html;
use crate::github::RepositoryRecord;

/// Shown in the language tag when GitHub detected no language
pub const NO_LANGUAGE: &str = "—";

/// Shown when the repository has no description
pub const NO_DESCRIPTION: &str = "Add a GitHub description to improve this card.";

/// At most this many topic tags per card
pub const MAX_TOPICS: usize = 6;

/// Everything a card displays, placeholders already applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    pub url: String,
    pub language: String,
    pub description: String,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl Card {
    pub fn from_record(repo: &RepositoryRecord) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            language: repo.language.clone().unwrap_or_else(|| NO_LANGUAGE.to_string()),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            topics: repo.topics.iter().take(MAX_TOPICS).cloned().collect(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: display_date(&repo.updated_at),
            homepage: repo.homepage.clone(),
        }
    }
}

/// Renders a card as an `<article>` element
pub fn render_card(card: &Card) -> String {
    let topics: String = card
        .topics
        .iter()
        .map(|topic| format!(r#"<span class="tag">{}</span>"#, escape_html(topic)))
        .collect();

    // The "Live" link only exists when the repo has a homepage
    let live = card
        .homepage
        .as_deref()
        .map(|homepage| {
            format!(
                r#"<a class="tag" href="{}" target="_blank" rel="noreferrer">Live</a>"#,
                escape_html(homepage)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="repo">
  <div class="repo-top">
    <a class="title" href="{url}" target="_blank" rel="noreferrer">{name}</a>
    <span class="tag" title="Primary language">{language}</span>
  </div>
  <p class="desc">{description}</p>
  <div class="tags">{topics}</div>
  <div class="repo-footer">
    <span title="Stars">★ {stars}</span>
    <span title="Forks">⑂ {forks}</span>
    <span title="Last updated">Updated: {updated}</span>
    {live}
  </div>
</article>
"#,
        url = escape_html(&card.url),
        name = escape_html(&card.name),
        language = escape_html(&card.language),
        description = escape_html(&card.description),
        topics = topics,
        stars = card.stars,
        forks = card.forks,
        updated = escape_html(&card.updated),
        live = live,
    )
}
