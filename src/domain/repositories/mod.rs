//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod receipt_repository;

pub use receipt_repository::ReceiptRepository;

#[cfg(test)]
pub use receipt_repository::MockReceiptRepository;
