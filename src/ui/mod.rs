// UI and formatting module

pub mod formatters;
pub mod messages;
pub mod report;

// Re-export commonly used items for cleaner imports
pub use formatters::format_size;
pub use messages::{dimmed, error, success, warn};
pub use report::{print_report, render_report};
