//! Raw feed records, as delivered by a feed source
//!
//! Field names follow the JSON feed format (`repoPath` in camelCase).

use serde::{Deserialize, Serialize};

/// One commit as it arrives from the feed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCommit {
    /// Full commit hash
    pub hash: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Author timestamp (RFC 3339)
    pub date: String,
    /// Commit message, one trimmed non-blank line per `\n`
    pub message: String,
    /// Path of the repository the commit belongs to (color key)
    pub repo_path: String,
}

/// Commits of one calendar day, newest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDayBucket {
    /// ISO-8601 date (`2023-01-04`) or the first commit's full timestamp
    pub date: String,
    pub commits: Vec<RawCommit>,
}
