//! Zone the timeline is displayed in

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Clock times and day headers are read in this zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The viewer's local zone
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// `date` as it reads on a wall clock in this zone
    pub fn localize(self, date: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Self::Local => date.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => date.with_timezone(&offset),
        }
    }
}
