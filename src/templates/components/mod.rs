pub mod error;
pub mod filters;
pub mod table;

pub use error::error_page;
pub use filters::{active_filters, filter_bar};
pub use table::records_table;
