//! View components
//!
//! Each view represents a screen in the application.

mod timeline;

pub use timeline::{TimelineAction, TimelineView};
