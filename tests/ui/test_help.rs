//! Render tests for the help panel

use ratatui::{Terminal, backend::TestBackend};

use daybook::keys;
use daybook::ui::widgets::render_help_panel;

fn render(width: u16, height: u16, scroll: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            render_help_panel(frame, frame.area(), scroll);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_help_panel_lists_all_sections() {
    let screen = render(80, 30, 0);

    assert!(screen.contains("daybook - Help"));
    for section in ["Global:", "Navigation:", "Timeline:"] {
        assert!(screen.contains(section), "missing section {section}");
    }
    for entry in keys::GLOBAL_KEYS
        .iter()
        .chain(keys::NAV_KEYS)
        .chain(keys::TIMELINE_KEYS)
    {
        assert!(
            screen.contains(entry.description),
            "missing entry {}",
            entry.description
        );
    }
}

#[test]
fn test_help_panel_scrolls() {
    let top = render(80, 8, 0);
    let scrolled = render(80, 8, 4);

    assert!(top.contains("Key bindings:"));
    assert!(!scrolled.contains("Key bindings:"));
}
