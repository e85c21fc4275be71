//! Data models for daybook
//!
//! Raw feed records and the display models built from them. Nothing here
//! depends on the terminal UI.

mod color;
mod commit;
mod day_group;
mod notification;
mod raw;
mod zone;

pub use color::{ColorPair, ColorRegistry, default_palette};
pub use commit::Commit;
pub use day_group::DayGroup;
pub use notification::{Notification, NotificationKind};
pub use raw::{RawCommit, RawDayBucket};
pub use zone::DisplayZone;

/// Display value for a date the feed sent in an unparsable form
pub const INVALID_DATE: &str = "Invalid Date";
