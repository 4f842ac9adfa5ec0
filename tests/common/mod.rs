#![allow(dead_code)]

use std::sync::Arc;

use receipt_points::application::services::ReceiptService;
use receipt_points::infrastructure::persistence::InMemoryReceiptRepository;
use receipt_points::state::AppState;
use serde_json::{Value, json};

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryReceiptRepository::new());
    AppState::new(Arc::new(ReceiptService::new(repository)))
}

/// The Target reference receipt; scores 28 points.
pub fn target_receipt_json() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

/// The M&M Corner Market reference receipt; scores 109 points.
pub fn corner_market_receipt_json() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}
