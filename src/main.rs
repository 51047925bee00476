// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Resolve the configuration (defaults, config file, flags)
// 3. Fetch repositories + profile once, store them in the app state
// 4. Select/sort for the requested view and mount it into the grid
// 5. Write the page (build) or print the cards (list)
// 6. Exit with proper code (0 = ok, 1 = fetch failed, 2 = error)
//
// Rust concepts used:
// - async/await: the GitHub requests run concurrently
// - Result<T, E> + anyhow::Context: errors with a human-readable trail
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod config;  // src/config.rs - account, curated list, scope
mod github;  // src/github/ - GitHub API client
mod render;  // src/render/ - cards and page HTML
mod view;    // src/view/ - selection, sorting, app state

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SourceArgs, ViewArgs};
use config::Config;
use github::{HttpApi, Profile};
use render::{Card, Grid, Page, ProfileView, Status};
use view::{AppState, ViewState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Run our application logic and capture the exit code
    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with a page written to stdout
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Returns:
//   Ok(0) = page/list produced from a successful fetch (even if empty)
//   Ok(1) = the fetch failed; output shows the failure status
//   Err   = configuration or I/O problem
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Build { source, view, output } => handle_build(&source, view, output.as_deref()).await,
        Commands::List { source, view, json } => handle_list(&source, view, json).await,
    }
}

// Result of the single fetch cycle
struct Loaded {
    config: Config,
    state: AppState,
    profile: Option<Profile>,
}

async fn load(source: &SourceArgs) -> Result<Loaded> {
    let config = Config::resolve(source.config.as_deref(), source.overrides())
        .context("failed to load configuration")?;

    let api = HttpApi::new(config.api_base.clone()).context("failed to set up GitHub client")?;

    eprintln!("🔍 {} ({})", Status::Loading, config.account);

    let fetched = github::fetch_all(&api, &config).await;
    let state = AppState::new(config.curated.clone(), fetched.repositories);

    Ok(Loaded {
        config,
        state,
        profile: fetched.profile,
    })
}

// Handles the 'build' subcommand
async fn handle_build(source: &SourceArgs, view: ViewArgs, output: Option<&Path>) -> Result<i32> {
    let loaded = load(source).await?;
    let view_state = view.view_state();

    let mut grid = Grid::new();
    loaded.state.show(&view_state, &mut grid);

    let html = render::render_page(&Page {
        profile: ProfileView::new(&loaded.config.account, loaded.profile.as_ref()),
        grid: &grid,
        view: view_state,
        year: chrono::Local::now().year(),
    });

    match output {
        Some(path) => {
            std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("📄 Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    report_status(grid.status());
    Ok(exit_code(&loaded.state))
}

// Handles the 'list' subcommand
async fn handle_list(source: &SourceArgs, view: ViewArgs, json: bool) -> Result<i32> {
    let loaded = load(source).await?;

    let mut grid = Grid::new();
    loaded.state.show(&view.view_state(), &mut grid);

    if json {
        let json_output = serde_json::to_string_pretty(grid.cards())?;
        println!("{}", json_output);
    } else {
        print_table(grid.cards(), &view.view_state());
        println!(
            "{} shown, {} fetched",
            grid.cards().len(),
            loaded.state.repositories().len()
        );
    }

    report_status(grid.status());
    Ok(exit_code(&loaded.state))
}

fn exit_code(state: &AppState) -> i32 {
    if state.failed() {
        1
    } else {
        0
    }
}

fn report_status(status: Status) {
    match status {
        Status::Failed => eprintln!("❌ {}", status),
        Status::Empty => eprintln!("⚠️  {}", status),
        _ => eprintln!("✅ {}", status),
    }
}

// Prints the cards as a human-readable table
fn print_table(cards: &[Card], view: &ViewState) {
    println!("Sorted by: {}{}", view.mode.label(), if view.show_forks { " (forks shown)" } else { "" });
    println!("{:<50} {:>7} {:>7} {:<14} {:<20}", "NAME", "STARS", "FORKS", "UPDATED", "LANGUAGE");
    println!("{}", "=".repeat(102));

    for card in cards {
        // Truncate long names so the columns stay aligned
        let name = if card.name.chars().count() > 47 {
            format!("{}...", card.name.chars().take(47).collect::<String>())
        } else {
            card.name.clone()
        };

        println!(
            "{:<50} {:>7} {:>7} {:<14} {:<20}",
            name, card.stars, card.forks, card.updated, card.language
        );
    }

    println!();
}
