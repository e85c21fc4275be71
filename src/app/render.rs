//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::model::Notification;
use crate::ui::widgets::{
    STATUS_BAR_HEIGHT, render_error_banner, render_help_panel, render_help_status_bar,
    render_timeline_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        match self.current_view {
            View::Timeline => self.render_timeline_view(frame, notification.as_ref()),
            View::Help => self.render_help_view(frame),
        }

        // Errors are always shown above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }
    }

    fn render_timeline_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let main_area = main_area(frame.area());
        self.timeline_view
            .render(frame, main_area, &self.timeline, notification);
        render_timeline_status_bar(frame, self.timeline.registry());
    }

    fn render_help_view(&self, frame: &mut Frame) {
        let main_area = main_area(frame.area());
        render_help_panel(frame, main_area, self.help_scroll);
        render_help_status_bar(frame);
    }
}

/// Area above the status bar
fn main_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
    }
}
