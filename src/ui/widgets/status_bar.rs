//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::model::ColorRegistry;
use crate::ui::theme;
use crate::util::repo_display_name;

/// Height of the status bar (single row)
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Repository names in their assigned (unselected) colors, in first-seen order
pub fn build_repo_legend(registry: &ColorRegistry) -> Vec<Span<'static>> {
    registry
        .repositories()
        .iter()
        .map(|repo| {
            let name = repo_display_name(repo);
            let color = theme::class_color(&registry.color_for(repo).unselected)
                .unwrap_or(theme::timeline_view::REPO_FALLBACK);
            Span::styled(format!(" {} ", name), Style::default().fg(color).bold())
        })
        .collect()
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

/// Render the status bar for the timeline view (hints, then the repository legend)
pub fn render_timeline_status_bar(frame: &mut Frame, registry: &ColorRegistry) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let mut status = build_status_bar(keys::TIMELINE_HINTS);
    let legend = build_repo_legend(registry);
    if !legend.is_empty() {
        status.spans.push(Span::raw(" │"));
        status.spans.extend(legend);
    }
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for the help view
pub fn render_help_status_bar(frame: &mut Frame) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(keys::HELP_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}
