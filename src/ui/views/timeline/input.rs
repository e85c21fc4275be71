//! Input handling for TimelineView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{TimelineAction, TimelineView};

impl TimelineView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> TimelineAction {
        match key.code {
            k if keys::is_move_down(k) => TimelineAction::MoveDown,
            k if keys::is_move_up(k) => TimelineAction::MoveUp,
            k if k == keys::GO_TOP => TimelineAction::Top,
            k if k == keys::GO_BOTTOM => TimelineAction::Bottom,
            k if k == keys::TOGGLE_SELECT => match self.cursor {
                Some(cursor) => TimelineAction::ToggleSelected(cursor),
                None => TimelineAction::None,
            },
            k if k == keys::RELOAD => TimelineAction::Reload,
            k if k == keys::RESET_COLORS => TimelineAction::ResetColors,
            _ => TimelineAction::None,
        }
    }
}
