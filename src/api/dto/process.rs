//! DTOs for the receipt submission endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, Receipt};

/// A receipt as submitted on the wire.
///
/// Every field defaults so that a body like `{}` decodes to zero values
/// instead of being rejected; the scoring rules define the behavior for
/// such receipts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptBody {
    #[serde(default)]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: String,

    /// Purchase time, `HH:MM`, 24h.
    #[serde(default)]
    pub purchase_time: String,

    #[serde(default)]
    pub items: Vec<ItemBody>,

    /// Total amount as a decimal string.
    #[serde(default)]
    pub total: String,
}

/// A line item as submitted on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub price: String,
}

impl ReceiptBody {
    /// Converts the wire representation into the domain entity.
    pub fn into_receipt(self) -> Receipt {
        Receipt::new(
            self.retailer,
            self.purchase_date,
            self.purchase_time,
            self.items
                .into_iter()
                .map(|item| Item::new(item.short_description, item.price))
                .collect(),
            self.total,
        )
    }
}

/// Response returned on a successful submission.
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}
