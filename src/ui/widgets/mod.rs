//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{HelpLine, build_help_lines, help_line_count, render_help_panel};
pub use status_bar::{
    STATUS_BAR_HEIGHT, build_repo_legend, build_status_bar, render_help_status_bar,
    render_timeline_status_bar,
};
