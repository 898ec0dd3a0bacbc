//! View components for the application.

mod account_list;
mod header;

pub use account_list::view_account_list;
pub use header::{view_error_banner, view_header};
