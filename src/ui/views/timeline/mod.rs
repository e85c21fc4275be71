//! Timeline View - commits of the last few days, grouped by day
//!
//! The main view of daybook. The view owns only the cursor and the scroll
//! position; commits and their selection state live in [`TimelineController`].

mod input;
mod render;

use crate::timeline::{CommitRef, TimelineController};

/// Actions that TimelineView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAction {
    /// No action needed
    None,
    MoveUp,
    MoveDown,
    Top,
    Bottom,
    /// Toggle selection of the commit under the cursor
    ToggleSelected(CommitRef),
    /// Refetch the feed
    Reload,
    ResetColors,
}

/// Timeline View state
#[derive(Debug, Default)]
pub struct TimelineView {
    /// Commit under the cursor (hovered)
    cursor: Option<CommitRef>,
    /// Scroll offset in rows (day headers included)
    pub scroll_offset: usize,
}

impl TimelineView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<CommitRef> {
        self.cursor
    }

    /// Move the cursor to `target`, moving the hover flag along with it
    ///
    /// `None` leaves the cursor where it is.
    pub fn move_cursor(&mut self, timeline: &mut TimelineController, target: Option<CommitRef>) {
        let Some(target) = target else {
            return;
        };
        if self.cursor == Some(target) {
            return;
        }
        if let Some(old) = self.cursor {
            timeline.set_hover(old, false);
        }
        if timeline.set_hover(target, true) {
            self.cursor = Some(target);
        }
    }

    /// Put the cursor on the first commit of a freshly loaded timeline
    pub fn reset_cursor(&mut self, timeline: &mut TimelineController) {
        self.cursor = None;
        self.scroll_offset = 0;
        let first = timeline.first_ref();
        self.move_cursor(timeline, first);
    }

    pub fn move_up(&mut self, timeline: &mut TimelineController) {
        let target = match self.cursor {
            Some(current) => timeline.prev_ref(current),
            None => timeline.first_ref(),
        };
        self.move_cursor(timeline, target);
    }

    pub fn move_down(&mut self, timeline: &mut TimelineController) {
        let target = match self.cursor {
            Some(current) => timeline.next_ref(current),
            None => timeline.first_ref(),
        };
        self.move_cursor(timeline, target);
    }

    pub fn move_to_top(&mut self, timeline: &mut TimelineController) {
        let target = timeline.first_ref();
        self.move_cursor(timeline, target);
    }

    pub fn move_to_bottom(&mut self, timeline: &mut TimelineController) {
        let target = timeline.last_ref();
        self.move_cursor(timeline, target);
    }
}
