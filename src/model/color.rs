//! Repository color assignment
//!
//! Each distinct repository path is given a [`ColorPair`] the first time it is
//! registered. Pairs are handed out round-robin from a fixed palette and wrap
//! once the palette is exhausted. An assignment never changes until [`ColorRegistry::reset`].

use std::collections::HashMap;

/// Unselected/selected color classes for one repository
///
/// A class is a ratatui color string (`"blue"`, `"lightblue"`, `"#5f87af"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    pub unselected: String,
    pub selected: String,
}

impl ColorPair {
    pub fn new(unselected: impl Into<String>, selected: impl Into<String>) -> Self {
        Self {
            unselected: unselected.into(),
            selected: selected.into(),
        }
    }

    /// The `("", "")` pair returned for unregistered repositories
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.unselected.is_empty() && self.selected.is_empty()
    }

    /// Class for the given selection state (`false` -> 0, `true` -> 1)
    pub fn class(&self, selected: bool) -> &str {
        self.as_array()[selected as usize]
    }

    pub fn as_array(&self) -> [&str; 2] {
        [&self.unselected, &self.selected]
    }
}

/// Built-in palette (8 entries, readable on dark and light terminals)
pub fn default_palette() -> Vec<ColorPair> {
    [
        ("blue", "lightblue"),
        ("green", "lightgreen"),
        ("magenta", "lightmagenta"),
        ("cyan", "lightcyan"),
        ("yellow", "lightyellow"),
        ("red", "lightred"),
        ("#5f87af", "#87afd7"),
        ("#af875f", "#d7af87"),
    ]
    .into_iter()
    .map(|(unselected, selected)| ColorPair::new(unselected, selected))
    .collect()
}

/// Append-only mapping from repository path to palette entry
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    palette: Vec<ColorPair>,
    assignments: HashMap<String, usize>,
    /// Repository paths in first-seen order
    order: Vec<String>,
    cursor: usize,
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new(default_palette())
    }
}

impl ColorRegistry {
    /// Create a registry over `palette` (an empty palette falls back to the default one)
    pub fn new(palette: Vec<ColorPair>) -> Self {
        let palette = if palette.is_empty() {
            default_palette()
        } else {
            palette
        };
        Self {
            palette,
            assignments: HashMap::new(),
            order: Vec::new(),
            cursor: 0,
        }
    }

    /// Assign the next palette entry to `repo_path` unless it already has one
    pub fn register(&mut self, repo_path: &str) {
        if self.assignments.contains_key(repo_path) {
            return;
        }
        self.assignments.insert(repo_path.to_string(), self.cursor);
        self.order.push(repo_path.to_string());
        self.cursor = (self.cursor + 1) % self.palette.len();
    }

    /// Pair assigned to `repo_path`, or the empty pair if it was never registered
    pub fn color_for(&self, repo_path: &str) -> ColorPair {
        self.assignments
            .get(repo_path)
            .and_then(|&slot| self.palette.get(slot))
            .cloned()
            .unwrap_or_default()
    }

    /// Forget every assignment and restart from the first palette entry
    pub fn reset(&mut self) {
        self.assignments.clear();
        self.order.clear();
        self.cursor = 0;
    }

    pub fn palette(&self) -> &[ColorPair] {
        &self.palette
    }

    /// Registered repository paths in first-seen order
    pub fn repositories(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
