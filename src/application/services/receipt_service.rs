//! Receipt submission and scoring service.

use std::sync::Arc;

use crate::domain::entities::{Receipt, ReceiptId};
use crate::domain::repositories::ReceiptRepository;
use crate::domain::scoring::calculate_points;
use crate::error::AppError;

/// Service for submitting receipts and computing their points.
///
/// Owns identifier assignment and the lookup-then-score flow. The points
/// total is never stored; it is recomputed from the stored receipt on every
/// query.
pub struct ReceiptService<R: ReceiptRepository> {
    repository: Arc<R>,
}

impl<R: ReceiptRepository> ReceiptService<R> {
    /// Creates a new receipt service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a receipt under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the random source cannot supply an
    /// identifier or the store rejects the insert. Neither is retried.
    pub async fn submit(&self, receipt: Receipt) -> Result<ReceiptId, AppError> {
        let id = ReceiptId::generate()?;

        self.repository.insert(id.clone(), receipt).await?;

        tracing::debug!(id = %id, "receipt stored");

        Ok(id)
    }

    /// Resolves an identifier to its receipt and computes the points.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an identifier that was never
    /// returned by [`Self::submit`]. A miss is an expected steady-state
    /// outcome, not an exceptional condition.
    pub async fn points(&self, id: &str) -> Result<u64, AppError> {
        let receipt = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Receipt not found"))?;

        Ok(calculate_points(&receipt))
    }
}
