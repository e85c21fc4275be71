//! Feed sources
//!
//! A feed source produces the ordered list of day buckets the timeline is built
//! from. The timeline only sees the [`FeedSource`] trait.

mod git_feed;
mod group;
mod json_feed;

pub use git_feed::{DEFAULT_WINDOW_DAYS, GitFeed};
pub use group::group_by_day;
pub use json_feed::JsonFileFeed;

use std::fmt::Debug;
use std::io;

use thiserror::Error;

use crate::git::GitError;
use crate::model::RawDayBucket;

/// Errors that make a feed unavailable
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(#[from] GitError),

    #[error("failed to read feed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Producer of day buckets, newest day first
///
/// `fetch` runs on a background thread, so implementations must be `Send + Sync`.
pub trait FeedSource: Send + Sync + Debug {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError>;
}
