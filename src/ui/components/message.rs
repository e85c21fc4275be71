//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// the message is truncated with "…". Returns an empty line if nothing fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
    };
    let label = notification.label();
    let message = &notification.message;

    // " | " + label + " " + message + " "
    let fixed_width = 3 + label.len() + 1;
    let full_width = fixed_width + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full_width > max => {
            let available = max.saturating_sub(fixed_width + 2);
            if available == 0 {
                return Line::from(vec![]);
            }
            let truncated: String = message.chars().take(available).collect();
            format!("{}… ", truncated)
        }
        _ => format!("{} ", message),
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}
