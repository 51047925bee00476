// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands share the same two groups of flags:
// - SourceArgs: where the repositories come from (config file, account,
//   curated names, fetch scope, API base URL)
// - ViewArgs: how they are shown (sort mode, forks on/off)
//
// #[command(flatten)] pastes a group's flags into each subcommand, so both
// commands accept exactly the same options without repeating them.
// =============================================================================

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{FetchScope, Overrides};
use crate::view::{SortMode, ViewState};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-cards",
    version,
    about = "Build a portfolio page of repository cards from the GitHub API",
    long_about = "portfolio-cards fetches a developer's public repositories from GitHub, \
                  orders a curated selection of them and renders each one as a card \
                  in a static HTML page."
)]
pub struct Cli {
    /// More log output on stderr (-v = info, -vv = debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch repositories and write the portfolio page
    ///
    /// Example: portfolio-cards build --sort stars --output index.html
    Build {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Where to write the HTML page (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch repositories and print them in display order
    ///
    /// Example: portfolio-cards list --sort updated --json
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// Print the cards as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// TOML config file (account, curated, scope, api_base)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// GitHub account whose repositories are shown
    #[arg(long)]
    pub account: Option<String>,

    /// Curated repository name; repeat the flag to list several, in order
    #[arg(long = "curated", value_name = "NAME")]
    pub curated: Vec<String>,

    /// Fetch only the curated repositories, or list the whole account
    #[arg(long, value_enum)]
    pub scope: Option<FetchScope>,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

impl SourceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            account: self.account.clone(),
            curated: self.curated.clone(),
            scope: self.scope,
            api_base: self.api_base.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ViewArgs {
    /// Sort order of the cards
    #[arg(long, value_enum, default_value_t = SortMode::Curated)]
    pub sort: SortMode,

    /// Include forked repositories
    #[arg(long)]
    pub show_forks: bool,
}

impl ViewArgs {
    pub fn view_state(&self) -> ViewState {
        ViewState {
            mode: self.sort,
            show_forks: self.show_forks,
        }
    }
}
