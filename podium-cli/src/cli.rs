//! # Command Line Interface
//!
//! Defines the CLI structure for the podium tool: one positional roster
//! path plus a verbosity flag.

use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};

/// Top-level CLI command for the podium tool
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Build a contributor leaderboard from GitHub pull requests")]
#[command(
  long_about = "Podium queries the GitHub search API for pull requests authored by the\n\
        participants listed in a roster file, aggregates per-user merge and open\n\
        counts, and writes a ranked JSON report to leaderboard.json."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Path to the roster CSV file with `username` and `name` columns
  pub roster: PathBuf,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,
}
