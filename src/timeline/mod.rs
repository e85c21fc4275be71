//! Timeline controller
//!
//! Owns the day groups shown by the UI, the color registry they were built
//! with, and the feed loads that replace them.

mod controller;

pub use controller::TimelineController;

use crate::feed::FeedError;

/// Monotonic id of a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

/// Address of a commit in one specific timeline generation
///
/// Refs from an earlier generation (before a reload) resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitRef {
    pub generation: u64,
    pub day: usize,
    pub index: usize,
}

/// Counts of a freshly applied timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub days: usize,
    pub commits: usize,
}

/// Result of a finished load, as seen by the UI
#[derive(Debug)]
pub enum LoadOutcome {
    /// Latest request succeeded; the timeline was replaced
    Loaded(LoadSummary),
    /// Latest request failed; the previous timeline is kept
    Failed(FeedError),
    /// A newer request was issued meanwhile; this response was discarded
    Stale(RequestId),
}
