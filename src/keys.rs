//! Keybinding definitions for daybook
//!
//! All keybindings are defined here so the help panel and status bar stay in sync
//! with input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (reload)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Go back
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Timeline keys
// =============================================================================

/// Toggle selection of the hovered commit
pub const TOGGLE_SELECT: KeyCode = KeyCode::Char(' ');

/// Reload the feed
pub const RELOAD: KeyCode = KeyCode::Char('r');

/// Reassign repository colors from the start of the palette
pub const RESET_COLORS: KeyCode = KeyCode::Char('c');

// =============================================================================
// Help panel entries
// =============================================================================

/// One row of the help panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

const fn entry(key: &'static str, description: &'static str) -> KeyBindEntry {
    KeyBindEntry { key, description }
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    entry("?", "Toggle this help"),
    entry("q", "Quit (back from help)"),
    entry("Esc", "Back"),
    entry("Ctrl+C", "Quit immediately"),
];

pub const NAV_KEYS: &[KeyBindEntry] = &[
    entry("j/↓", "Next commit"),
    entry("k/↑", "Previous commit"),
    entry("g", "First commit"),
    entry("G", "Last commit"),
];

pub const TIMELINE_KEYS: &[KeyBindEntry] = &[
    entry("Space", "Select / deselect commit"),
    entry("r", "Reload timeline"),
    entry("Ctrl+L", "Reload timeline"),
    entry("c", "Reset repository colors"),
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const TIMELINE_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Space",
        label: "Select",
        color: Color::Yellow,
    },
    KeyHint {
        key: "r",
        label: "Reload",
        color: Color::Green,
    },
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const HELP_HINTS: &[KeyHint] = &[KeyHint {
    key: "q/?",
    label: "Back",
    color: Color::Cyan,
}];
