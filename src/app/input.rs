//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::model::Notification;
use crate::ui::views::TimelineAction;
use crate::ui::widgets::help_line_count;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if keys::is_refresh_key(&key) {
            self.reload();
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                if self.current_view == View::Help {
                    self.go_back();
                } else {
                    self.go_to_view(View::Help);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Timeline {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Timeline {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Timeline => {
                let action = self.timeline_view.handle_key(key);
                self.handle_timeline_action(action);
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max_scroll = help_line_count().saturating_sub(1);
        match key.code {
            k if keys::is_move_down(k) => {
                self.help_scroll = (self.help_scroll + 1).min(max_scroll);
            }
            k if keys::is_move_up(k) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            k if k == keys::GO_TOP => self.help_scroll = 0,
            k if k == keys::GO_BOTTOM => self.help_scroll = max_scroll,
            _ => {}
        }
    }

    pub(crate) fn handle_timeline_action(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::None => {}
            TimelineAction::MoveUp => self.timeline_view.move_up(&mut self.timeline),
            TimelineAction::MoveDown => self.timeline_view.move_down(&mut self.timeline),
            TimelineAction::Top => self.timeline_view.move_to_top(&mut self.timeline),
            TimelineAction::Bottom => self.timeline_view.move_to_bottom(&mut self.timeline),
            TimelineAction::ToggleSelected(commit_ref) => {
                if !self.timeline.toggle_commit(commit_ref) {
                    tracing::debug!(?commit_ref, "toggle ignored for stale commit ref");
                }
            }
            TimelineAction::Reload => self.reload(),
            TimelineAction::ResetColors => {
                self.timeline.reset_colors();
                self.notification = Some(Notification::info("Colors reset"));
            }
        }
    }
}
