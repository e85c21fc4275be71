//! git pretty-format templates for stable output parsing
//!
//! The separators are ASCII control characters, so they cannot collide with
//! author names or commit messages.

/// Separator between fields of one commit (ASCII unit separator)
pub const FIELD_SEPARATOR: char = '\x1f';

/// Terminator after each commit record (ASCII record separator)
pub const RECORD_SEPARATOR: char = '\x1e';

/// Templates for git commands
pub struct Templates;

impl Templates {
    /// `--format` argument for `git log`
    ///
    /// Fields (separated by 0x1f, record terminated by 0x1e):
    /// 1. full hash
    /// 2. author name
    /// 3. author email
    /// 4. author date, strict ISO 8601 (`2023-01-04T10:00:00+01:00`)
    /// 5. raw body (subject + body)
    pub fn log() -> &'static str {
        concat!(
            "--format=",
            "%H",
            "%x1f",
            "%an",
            "%x1f",
            "%ae",
            "%x1f",
            "%aI",
            "%x1f",
            "%B",
            "%x1e"
        )
    }
}
