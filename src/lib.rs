//! daybook - a terminal timeline of recent commits
//!
//! Shows the commits of the last few days across several git repositories,
//! grouped by day and colored per repository.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`feed`]: Commit feed sources (git, JSON file)
//! - [`git`]: git command execution and parsing
//! - [`keys`]: Key binding definitions
//! - [`model`]: Display models (commits, day groups, color registry)
//! - [`timeline`]: Load orchestration and interaction state
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod config;
pub mod feed;
pub mod git;
pub mod keys;
pub mod model;
pub mod timeline;
pub mod ui;
pub mod util;
