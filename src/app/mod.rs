//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `refresh`: Applying finished feed loads
//! - `render`: UI rendering

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
