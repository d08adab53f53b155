//! CLI argument definitions for gemwhy.
//!
//! Uses `clap` derive macros. The package name is deliberately optional so
//! that a missing name produces gemwhy's own usage error (exit 1) instead of
//! clap's, matching the behavior of `bundle why` with no argument.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gemwhy",
    version,
    about = "Explain why a gem is present in your bundle",
    long_about = "gemwhy reads a resolved Gemfile.lock and answers \"why is this gem \
                  installed?\": which gems require it, directly and transitively, and \
                  which top-level Gemfile entries pulled it in."
)]
pub struct Cli {
    /// Name of the gem to explain (case-insensitive)
    pub package: Option<String>,

    /// Path to the lockfile
    #[arg(short, long, default_value = "Gemfile.lock")]
    pub lockfile: PathBuf,

    /// Show the flat transitive dependents list instead of the tree
    #[arg(long, conflicts_with_all = ["chains", "json"])]
    pub flat: bool,

    /// Show only the dependency chains back to the Gemfile
    #[arg(long, conflicts_with = "json")]
    pub chains: bool,

    /// Limit the displayed tree depth
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Emit the full explanation as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
