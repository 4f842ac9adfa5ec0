use std::sync::Arc;

use crate::application::services::ReceiptService;
use crate::infrastructure::persistence::InMemoryReceiptRepository;

/// Shared application state injected into all handlers.
///
/// Constructed once at process start; the store it owns lives for the
/// process duration.
#[derive(Clone)]
pub struct AppState {
    pub receipt_service: Arc<ReceiptService<InMemoryReceiptRepository>>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(receipt_service: Arc<ReceiptService<InMemoryReceiptRepository>>) -> Self {
        Self { receipt_service }
    }
}
