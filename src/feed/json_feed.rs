//! Feed read from a JSON file
//!
//! Format: `[{"date": "...", "commits": [{"hash", "author", "email", "date", "message", "repoPath"}]}]`

use std::fs;
use std::path::{Path, PathBuf};

use super::{FeedError, FeedSource};
use crate::model::RawDayBucket;

/// Day buckets stored as JSON, re-read on every fetch
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON document in feed format
    pub fn parse(content: &str) -> Result<Vec<RawDayBucket>, FeedError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl FeedSource for JsonFileFeed {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError> {
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}
