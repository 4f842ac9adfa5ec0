//! HTTP request handlers.

pub mod points;
pub mod process;

pub use points::points_handler;
pub use process::process_receipt_handler;
