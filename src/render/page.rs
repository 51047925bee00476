// src/render/page.rs
// =============================================================================
// Assembles the full HTML document around the mounted grid.
//
// Page regions (ids match what the stylesheet and menu script expect):
// - header: avatar, display name, bio, location (from the GitHub profile,
//   or defaults when the profile couldn't be fetched)
// - #menuBtn / #nav: navigation panel, rendered closed (aria-expanded=false)
// - #sortMode: sort selector with the active mode preselected
// - #showForks: forks checkbox
// - #projectsState: status line
// - #projectsGrid: the cards
// - #year: current calendar year in the footer
// =============================================================================

use super::escape::escape_html;
use super::grid::Grid;
use crate::github::Profile;
use crate::view::{SortMode, ViewState};

pub const DEFAULT_BIO: &str = "Developer portfolio";
pub const DEFAULT_LOCATION: &str = "Somewhere on the internet";

/// Profile fields as displayed, with every gap filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: String,
    pub bio: String,
    pub location: String,
    pub avatar_url: String,
    pub profile_url: String,
}

impl ProfileView {
    pub fn new(account: &str, profile: Option<&Profile>) -> Self {
        Self {
            display_name: pick(profile, |p| p.name.as_ref()).unwrap_or_else(|| account.to_string()),
            bio: pick(profile, |p| p.bio.as_ref()).unwrap_or_else(|| DEFAULT_BIO.to_string()),
            location: pick(profile, |p| p.location.as_ref())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            avatar_url: pick(profile, |p| p.avatar_url.as_ref())
                .unwrap_or_else(|| format!("https://github.com/{account}.png")),
            profile_url: pick(profile, |p| p.html_url.as_ref())
                .unwrap_or_else(|| format!("https://github.com/{account}")),
        }
    }
}

fn pick(profile: Option<&Profile>, field: impl Fn(&Profile) -> Option<&String>) -> Option<String> {
    profile.and_then(field).cloned()
}

/// Everything the page needs
pub struct Page<'a> {
    pub profile: ProfileView,
    pub grid: &'a Grid,
    pub view: ViewState,
    pub year: i32,
}

pub fn render_page(page: &Page<'_>) -> String {
    let profile = &page.profile;

    let options: String = SortMode::ALL
        .iter()
        .map(|mode| {
            let selected = if *mode == page.view.mode { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                mode.as_str(),
                selected,
                escape_html(mode.label())
            )
        })
        .collect();

    let forks_checked = if page.view.show_forks { " checked" } else { "" };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name} · Projects</title>
</head>
<body>
  <header class="site-header">
    <a class="brand" href="{profile_url}" target="_blank" rel="noreferrer">
      <img class="avatar" src="{avatar}" alt="{name}" width="48" height="48">
      <span>{name}</span>
    </a>
    <button id="menuBtn" class="menu-btn" type="button" aria-expanded="false" aria-controls="nav">Menu</button>
    <nav id="nav" class="nav">
      <a href="#projects">Projects</a>
      <a href="{profile_url}" target="_blank" rel="noreferrer">GitHub</a>
    </nav>
  </header>

  <main>
    <section class="intro">
      <h1>{name}</h1>
      <p class="bio">{bio}</p>
      <p class="location">{location}</p>
    </section>

    <section id="projects" class="projects">
      <div class="controls">
        <label for="sortMode">Sort</label>
        <select id="sortMode">{options}</select>
        <label><input id="showForks" type="checkbox"{forks_checked}> Show forks</label>
      </div>
      <p id="projectsState" class="state">{status}</p>
      <div id="projectsGrid" class="grid">
{cards}      </div>
    </section>
  </main>

  <footer class="site-footer">© <span id="year">{year}</span> {name}</footer>
</body>
</html>
"##,
        name = escape_html(&profile.display_name),
        profile_url = escape_html(&profile.profile_url),
        avatar = escape_html(&profile.avatar_url),
        bio = escape_html(&profile.bio),
        location = escape_html(&profile.location),
        options = options,
        forks_checked = forks_checked,
        status = escape_html(&page.grid.status().to_string()),
        cards = page.grid.render(),
        year = page.year,
    )
}
