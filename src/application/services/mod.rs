//! Business logic services for the application layer.

pub mod receipt_service;

pub use receipt_service::ReceiptService;
