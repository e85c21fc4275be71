//! git-specific constants
//!
//! Centralized definitions for git command names and flags.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
}

/// git command flags
pub mod flags {
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Never spawn a pager (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Lower bound on author/commit date (`git log` only)
    pub const SINCE: &str = "--since";
}

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating the directory is not inside a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Pattern reported by `-C` when the directory does not exist
    pub const CANNOT_CHANGE_DIR: &str = "cannot change to";
    /// Pattern reported for a repository with no commits yet
    pub const NO_COMMITS_YET: &str = "does not have any commits yet";
}
