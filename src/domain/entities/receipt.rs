//! Receipt entity representing a submitted purchase.

/// A single line item on a receipt.
///
/// Both fields are kept as the submitted strings; the scoring engine parses
/// them on demand and degrades unparsable values to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    /// Creates a new Item instance.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt, the unit that is stored and scored.
///
/// Immutable after creation. `purchase_date` (`YYYY-MM-DD`) and
/// `purchase_time` (`HH:MM`, 24h) stay as strings; `total` is the decimal
/// amount as submitted. Item order is preserved even though scoring does
/// not depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Receipt {
    /// Creates a new Receipt instance.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: impl Into<String>,
        purchase_time: impl Into<String>,
        items: Vec<Item>,
        total: impl Into<String>,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: purchase_date.into(),
            purchase_time: purchase_time.into(),
            items,
            total: total.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_creation() {
        let receipt = Receipt::new(
            "Target",
            "2022-01-01",
            "13:01",
            vec![Item::new("Mountain Dew 12PK", "6.49")],
            "6.49",
        );

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_item_order_is_preserved() {
        let receipt = Receipt::new(
            "Corner Store",
            "2022-03-20",
            "14:33",
            vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Pepsi", "1.25"),
                Item::new("Chips", "3.10"),
            ],
            "6.60",
        );

        let descriptions: Vec<&str> = receipt
            .items
            .iter()
            .map(|i| i.short_description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Gatorade", "Pepsi", "Chips"]);
    }

    #[test]
    fn test_receipt_equality_is_structural() {
        let a = Receipt::new("A", "2022-01-01", "13:01", vec![], "1.00");
        let b = a.clone();
        assert_eq!(a, b);
    }
}
