//! User configuration
//!
//! Loaded from `--config PATH`, or `<config dir>/daybook/config.toml` when present.
//! Command line arguments are layered on top by [`Cli::apply`](crate::cli::Cli::apply).

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::feed::{DEFAULT_WINDOW_DAYS, FeedSource, GitFeed, JsonFileFeed};
use crate::model::{ColorPair, default_palette};
use crate::ui::theme;
use crate::util;

/// Errors from loading or validating the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid palette entry: {0}")]
    InvalidPalette(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Repository paths, in the order they should claim colors
    pub repos: Vec<String>,
    /// Look-back window in days
    pub days: u32,
    pub shuffle_palette: bool,
    /// `[unselected, selected]` color classes; `None` uses the built-in palette
    pub palette: Option<Vec<[String; 2]>>,
    /// Read the feed from a JSON file instead of git
    pub feed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            days: DEFAULT_WINDOW_DAYS,
            shuffle_palette: false,
            palette: None,
            feed: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config file
    ///
    /// An explicit path must exist. Without one, the default location is used if the
    /// file is there; otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Self::from_toml_str(&content)
    }

    /// `<config dir>/daybook/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("daybook").join("config.toml"))
    }

    /// Palette to build the color registry from (validated, shuffled if configured)
    pub fn palette(&self) -> Result<Vec<ColorPair>, ConfigError> {
        let mut palette = match &self.palette {
            None => default_palette(),
            Some(entries) => entries
                .iter()
                .map(|[unselected, selected]| {
                    for class in [unselected, selected] {
                        if !theme::is_valid_class(class) {
                            return Err(ConfigError::InvalidPalette(format!(
                                "{:?} is not a color",
                                class
                            )));
                        }
                    }
                    Ok(ColorPair::new(unselected.as_str(), selected.as_str()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        if self.shuffle_palette {
            util::shuffle(&mut palette);
        }
        Ok(palette)
    }

    /// Feed to load the timeline from
    ///
    /// A JSON feed file wins over repositories. With neither, the current directory is read.
    pub fn feed_source(&self) -> Arc<dyn FeedSource> {
        if let Some(ref path) = self.feed {
            return Arc::new(JsonFileFeed::new(path));
        }

        let repos = if self.repos.is_empty() {
            vec![".".to_string()]
        } else {
            self.repos.clone()
        };
        Arc::new(GitFeed::new(repos, self.days))
    }
}
