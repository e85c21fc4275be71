//! UI symbols (markers, rules)

/// Commit markers in the timeline
pub mod markers {
    /// Selected commit (●)
    pub const SELECTED: char = '●';
    /// Unselected commit (○)
    pub const UNSELECTED: char = '○';
    /// Day header rule (─)
    pub const RULE: char = '─';
}

/// Empty state texts
pub mod empty {
    /// Shown before the first load resolves
    pub const LOADING: &str = "Loading timeline…";
    /// Shown when the feed has no commits
    pub const NO_COMMITS: &str = "No commits in this window.";
    /// Hint under the empty state
    pub const HINT: &str = "Hint: press 'r' to reload, or pass more repositories";
}
