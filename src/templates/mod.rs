pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{active_filters, error_page, filter_bar, records_table};
pub use layouts::desktop::desktop_layout;
