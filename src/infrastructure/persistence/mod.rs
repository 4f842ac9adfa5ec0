//! Repository implementations.

pub mod memory_receipt_repository;

pub use memory_receipt_repository::InMemoryReceiptRepository;
