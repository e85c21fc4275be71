//! Help panel widget
//!
//! `build_help_lines()` is shared by rendering and the scroll bound in the help view.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// A single line in the help panel
pub struct HelpLine {
    pub line: Line<'static>,
    /// Whether this line is a key binding entry (vs section title / blank)
    pub is_entry: bool,
}

/// Build all help panel lines
pub fn build_help_lines() -> Vec<HelpLine> {
    let mut lines = vec![
        HelpLine {
            line: Line::from("Key bindings:".bold()),
            is_entry: false,
        },
        HelpLine {
            line: Line::from(""),
            is_entry: false,
        },
    ];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Timeline", keys::TIMELINE_KEYS);

    lines
}

fn push_section(lines: &mut Vec<HelpLine>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(HelpLine {
        line: Line::from(format!("{title}:")).underlined(),
        is_entry: false,
    });

    for entry in entries {
        lines.push(HelpLine {
            line: Line::from(vec![
                Span::styled(format!("  {:10}", entry.key), Style::default().fg(Color::Yellow)),
                Span::raw(entry.description.to_string()),
            ]),
            is_entry: true,
        });
    }

    lines.push(HelpLine {
        line: Line::from(""),
        is_entry: false,
    });
}

/// Number of rendered help lines (upper bound for scrolling)
pub fn help_line_count() -> u16 {
    build_help_lines().len() as u16
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" daybook - Help ").bold().white().centered();

    let display_lines: Vec<Line<'static>> =
        build_help_lines().into_iter().map(|hl| hl.line).collect();

    frame.render_widget(
        Paragraph::new(display_lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
