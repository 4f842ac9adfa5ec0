//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Receipts are
//! immutable once constructed; item order is preserved as submitted.
//!
//! # Entity Types
//!
//! - [`Receipt`] - A purchase receipt submitted for scoring
//! - [`Item`] - A single line item on a receipt
//! - [`ReceiptId`] - The opaque identifier a receipt is stored under

pub mod receipt;
pub mod receipt_id;

pub use receipt::{Item, Receipt};
pub use receipt_id::ReceiptId;
