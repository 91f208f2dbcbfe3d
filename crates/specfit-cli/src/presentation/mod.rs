//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms. Comparison results
//! arrive fully computed from core services.

pub mod report;
pub mod style;
pub mod tables;

// Re-export commonly used items
pub use report::{
    render_catalog_rows, render_report, render_system_profile, render_titles, report_json,
};
pub use style::Style;
pub use tables::format_optional;
