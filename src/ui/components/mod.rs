//! Reusable UI components
//!
//! Common building blocks for views.

pub mod blocks;
pub mod message;

pub use blocks::*;
pub use message::*;
