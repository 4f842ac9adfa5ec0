//! In-memory receipt repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::entities::{Receipt, ReceiptId};
use crate::domain::repositories::ReceiptRepository;
use crate::error::AppError;

/// Process-lifetime receipt store backed by a lock-guarded map.
///
/// All access goes through the `RwLock`; the lock is never held across an
/// await point. Storage is unbounded: entries are never evicted, expired,
/// or deleted.
pub struct InMemoryReceiptRepository {
    receipts: RwLock<HashMap<String, Receipt>>,
}

impl InMemoryReceiptRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryReceiptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptRepository {
    async fn insert(&self, id: ReceiptId, receipt: Receipt) -> Result<(), AppError> {
        self.receipts.write().insert(String::from(id), receipt);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Receipt>, AppError> {
        Ok(self.receipts.read().get(id).cloned())
    }
}
