//! Application state and view management

use crate::model::Notification;
use crate::timeline::TimelineController;
use crate::ui::views::TimelineView;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Timeline,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Timeline view state (cursor and scroll)
    pub timeline_view: TimelineView,
    /// Loaded days and commit interaction state
    pub timeline: TimelineController,
    /// Help panel scroll offset
    pub help_scroll: u16,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
}

impl App {
    /// Construct a new [`App`] and start the first background load.
    pub fn new(timeline: TimelineController) -> Self {
        let mut app = Self::with_timeline(timeline);
        app.timeline.load();
        app
    }

    /// Construct without loading (the timeline may already be populated)
    pub fn with_timeline(timeline: TimelineController) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Timeline,
            previous_view: None,
            timeline_view: TimelineView::new(),
            timeline,
            help_scroll: 0,
            error_message: None,
            notification: None,
        };
        app.timeline_view.reset_cursor(&mut app.timeline);
        app
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or(View::Timeline);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
