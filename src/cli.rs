//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// daybook - recent commits across repositories, grouped by day
#[derive(Parser, Debug, Default)]
#[command(name = "daybook", version, about)]
#[command(after_help = "\
Examples:
  daybook                         Timeline of the current repository
  daybook ~/src/api ~/src/web     Several repositories, one color each
  daybook --days 14               Look back two weeks
  daybook --feed timeline.json    Read a prepared feed instead of running git

Set DAYBOOK_LOG=/path/to/file to write logs (filter with RUST_LOG).")]
pub struct Cli {
    /// Repositories to read (overrides `repos` from the config file)
    pub repos: Vec<String>,

    /// Config file (default: <config dir>/daybook/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How many days back to show
    #[arg(long, short = 'd', value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Read day buckets from a JSON file instead of git
    #[arg(long, value_name = "FILE.json")]
    pub feed: Option<PathBuf>,

    /// Shuffle the color palette at startup
    #[arg(long)]
    pub shuffle_palette: bool,
}

impl Cli {
    /// Layer the command line over a loaded config
    pub fn apply(&self, config: &mut Config) {
        if !self.repos.is_empty() {
            config.repos = self.repos.clone();
        }
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(ref feed) = self.feed {
            config.feed = Some(feed.clone());
        }
        if self.shuffle_palette {
            config.shuffle_palette = true;
        }
    }
}
