//! Data refresh operations (reload from the feed)

use crate::model::Notification;
use crate::timeline::LoadOutcome;

use super::state::App;

impl App {
    /// Start a background reload of the timeline
    ///
    /// A load already in flight is superseded; its response will be discarded.
    pub fn reload(&mut self) {
        self.timeline.load();
        self.notification = Some(Notification::info("Reloading"));
    }

    /// Idle processing between frames: apply finished loads, expire notifications
    pub fn on_tick(&mut self) {
        while let Some(outcome) = self.timeline.poll() {
            self.handle_load_outcome(outcome);
        }
        self.clear_expired_notification();
    }

    pub(crate) fn handle_load_outcome(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(summary) => {
                self.timeline_view.reset_cursor(&mut self.timeline);
                self.error_message = None;
                self.notification = Some(Notification::success(format!(
                    "{} commits in {} days",
                    summary.commits, summary.days
                )));
            }
            LoadOutcome::Failed(e) => {
                self.error_message = Some(format!("Feed error: {}", e));
                self.notification = if self.timeline.is_empty() {
                    None
                } else {
                    Some(Notification::warning("Showing previous timeline"))
                };
            }
            LoadOutcome::Stale(_) => {}
        }
    }
}
