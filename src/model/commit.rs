//! Commit display model

use chrono::{DateTime, FixedOffset, Timelike};

use super::{ColorPair, ColorRegistry, DisplayZone, INVALID_DATE, RawCommit};
use crate::util::{pad_zero, repo_display_name};

/// A feed commit with derived display fields and interaction state
///
/// Created once per load. Only `hover` and `selected` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub email: String,
    /// Author timestamp in the display zone (`None` if the feed sent an unparsable date)
    pub date: Option<DateTime<FixedOffset>>,
    pub message: String,
    pub repo_path: String,
    /// Cursor is on this commit
    pub hover: bool,
    /// Toggled by the user
    pub selected: bool,
    colors: ColorPair,
}

impl Commit {
    /// Build the display model, registering the repository with `registry`
    pub fn new(raw: RawCommit, registry: &mut ColorRegistry, zone: DisplayZone) -> Self {
        let date = match DateTime::parse_from_rfc3339(&raw.date) {
            Ok(date) => Some(zone.localize(date)),
            Err(e) => {
                tracing::debug!(hash = %raw.hash, date = %raw.date, error = %e, "unparsable commit date");
                None
            }
        };

        registry.register(&raw.repo_path);
        let colors = registry.color_for(&raw.repo_path);

        Self {
            hash: raw.hash,
            author: raw.author,
            email: raw.email,
            date,
            message: raw.message,
            repo_path: raw.repo_path,
            hover: false,
            selected: false,
            colors,
        }
    }

    /// 12-hour clock time, e.g. `"1:30 PM"`
    ///
    /// Read in the display zone. Midnight is `12:xx AM`, noon `12:xx PM`.
    pub fn pretty_time(&self) -> String {
        let Some(date) = self.date else {
            return INVALID_DATE.to_string();
        };
        let hour = date.hour() as i32;
        let display_hour = (hour - 1).rem_euclid(12) + 1;
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        format!("{}:{} {}", display_hour, pad_zero(date.minute()), meridiem)
    }

    /// Last non-empty segment of the repository path (`"/x/proj/"` -> `"proj"`)
    pub fn pretty_repo_name(&self) -> &str {
        repo_display_name(&self.repo_path)
    }

    /// Pair the registry holds for this repository
    pub fn color_pair(&self) -> &ColorPair {
        &self.colors
    }

    /// Pick up the registry's current pair after its assignments changed
    pub fn refresh_colors(&mut self, registry: &ColorRegistry) {
        self.colors = registry.color_for(&self.repo_path);
    }

    /// Color class for the current selection state
    pub fn current_color_class(&self) -> &str {
        self.colors.class(self.selected)
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated hash (first 8 characters)
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.hash.len());
        &self.hash[..end]
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }

    pub fn set_hover(&mut self, value: bool) {
        self.hover = value;
    }
}
