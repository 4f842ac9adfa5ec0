//! Repository trait for receipt storage.

use crate::domain::entities::{Receipt, ReceiptId};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the identifier-keyed receipt store.
///
/// Receipts are write-once: stored on submit, never mutated, never deleted.
/// Lookups treat the identifier as an opaque string; there is no
/// partial-match or prefix lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryReceiptRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Stores a receipt under the given identifier.
    ///
    /// Identifiers are random and not collision-checked; a duplicate would
    /// silently replace the previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, id: ReceiptId, receipt: Receipt) -> Result<(), AppError>;

    /// Finds a receipt by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Receipt))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Receipt>, AppError>;
}
