pub mod home;
pub mod list;

pub use home::home_page;
pub use list::{list_page, ListPageVm};
