//! Color theme definitions
//!
//! Centralized color constants, plus the mapping from repository color classes
//! to terminal colors.

use std::str::FromStr;

use ratatui::style::Color;

/// Colors for the timeline view
pub mod timeline_view {
    use super::*;

    /// Day header text
    pub const DAY_HEADER: Color = Color::Cyan;
    /// Day header rule
    pub const DAY_RULE: Color = Color::DarkGray;
    /// Commit time column
    pub const TIME: Color = Color::DarkGray;
    /// Author column
    pub const AUTHOR: Color = Color::Gray;
    /// Short hash column
    pub const HASH: Color = Color::Yellow;
    /// Selection marker
    pub const SELECTED_MARKER: Color = Color::Yellow;
    /// Repository name when the commit has no color class
    pub const REPO_FALLBACK: Color = Color::Reset;
}

/// Hovered row highlight
pub mod hover {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

/// Terminal color for a repository color class
///
/// Classes use ratatui's color syntax (`"blue"`, `"lightblue"`, `"#5f87af"`, `"42"`).
/// Unknown or empty classes (the unregistered sentinel) yield `None`.
pub fn class_color(class: &str) -> Option<Color> {
    if class.trim().is_empty() {
        return None;
    }
    Color::from_str(class).ok()
}

/// True if `class` is a usable repository color class
pub fn is_valid_class(class: &str) -> bool {
    class_color(class).is_some()
}
