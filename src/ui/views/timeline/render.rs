//! Rendering for TimelineView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::model::{Commit, DayGroup, Notification};
use crate::timeline::TimelineController;
use crate::ui::{components, symbols, theme};

use super::TimelineView;

impl TimelineView {
    /// Render the view with optional notification in title bar
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        timeline: &TimelineController,
        notification: Option<&Notification>,
    ) {
        let title = build_title(timeline);

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if timeline.is_empty() {
            render_empty_state(frame, area, block, timeline.is_loading());
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let rule_width = area.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut cursor_row = None;

        for (day_index, day) in timeline.days().iter().enumerate() {
            if day.is_empty() {
                continue;
            }
            lines.push(build_day_header(day, rule_width));
            for (index, commit) in day.commits().iter().enumerate() {
                let is_cursor = self
                    .cursor
                    .is_some_and(|c| c.day == day_index && c.index == index);
                if is_cursor {
                    cursor_row = Some(lines.len());
                }
                lines.push(build_commit_line(commit));
            }
        }

        self.scroll_offset = calculate_scroll_offset(self.scroll_offset, cursor_row, inner_height);
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(self.scroll_offset)
            .take(inner_height)
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

fn build_title(timeline: &TimelineController) -> Line<'static> {
    let summary = timeline.summary();
    let text = if summary.commits == 0 {
        " daybook - Timeline ".to_string()
    } else {
        format!(
            " daybook - Timeline [{} commits, {} selected] ",
            summary.commits,
            timeline.selected_count()
        )
    };
    Line::from(text).bold().cyan().centered()
}

fn render_empty_state(frame: &mut Frame, area: Rect, block: Block<'static>, loading: bool) {
    let lines = if loading {
        empty_state_lines(symbols::empty::LOADING, None)
    } else {
        empty_state_lines(symbols::empty::NO_COMMITS, Some(symbols::empty::HINT))
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Centered message, with an optional dimmed hint under it
fn empty_state_lines(title: &str, hint: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint.to_string()).dark_gray().centered());
    }
    lines
}

/// Keep the cursor row on screen, scrolling as little as possible
pub(super) fn calculate_scroll_offset(
    current: usize,
    cursor_row: Option<usize>,
    visible_rows: usize,
) -> usize {
    let Some(row) = cursor_row else {
        return 0;
    };
    if visible_rows == 0 {
        return 0;
    }

    if row < current {
        // Show the day header when the cursor is on a day's first commit
        row.saturating_sub(1)
    } else if row >= current + visible_rows {
        row + 1 - visible_rows
    } else {
        current
    }
}

fn build_day_header(day: &DayGroup, rule_width: usize) -> Line<'static> {
    let label = format!(" {} ", day.pretty_date());
    let rule_len = rule_width.saturating_sub(label.chars().count() + 1);
    let rule: String = std::iter::repeat_n(symbols::markers::RULE, rule_len).collect();

    Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme::timeline_view::DAY_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", rule),
            Style::default().fg(theme::timeline_view::DAY_RULE),
        ),
    ])
}

fn build_commit_line(commit: &Commit) -> Line<'static> {
    let repo_color = theme::class_color(commit.current_color_class())
        .unwrap_or(theme::timeline_view::REPO_FALLBACK);

    let (marker, marker_style) = if commit.selected {
        (
            symbols::markers::SELECTED,
            Style::default().fg(theme::timeline_view::SELECTED_MARKER),
        )
    } else {
        (symbols::markers::UNSELECTED, Style::default().fg(repo_color))
    };

    let mut repo_style = Style::default().fg(repo_color);
    if commit.selected {
        repo_style = repo_style.add_modifier(Modifier::BOLD);
    }

    let spans = vec![
        Span::styled(format!("  {} ", marker), marker_style),
        Span::styled(
            format!("{:>8} ", commit.pretty_time()),
            Style::default().fg(theme::timeline_view::TIME),
        ),
        Span::styled(
            format!("{} ", commit.short_hash()),
            Style::default().fg(theme::timeline_view::HASH),
        ),
        Span::styled(format!("{} ", commit.pretty_repo_name()), repo_style),
        Span::styled(
            format!("{} ", commit.author),
            Style::default().fg(theme::timeline_view::AUTHOR),
        ),
        Span::raw(commit.summary().to_string()),
    ];

    let line = Line::from(spans);
    if commit.hover {
        line.style(
            Style::default()
                .fg(theme::hover::FG)
                .bg(theme::hover::BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}
