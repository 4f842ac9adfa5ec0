//! The points rule engine.
//!
//! Scoring is a pure function of the receipt: seven independent rules, each
//! computed on its own and summed. No rule can fail. Unparsable numeric,
//! date, or time values degrade to zero values instead of rejecting the
//! receipt, so a stored receipt always has a score.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::domain::entities::Receipt;

/// Points awarded when the total is a round dollar amount.
const ROUND_DOLLAR_BONUS: u64 = 50;

/// Points awarded when the total is a multiple of 0.25.
const QUARTER_MULTIPLE_BONUS: u64 = 25;

/// Points awarded per pair of items.
const ITEM_PAIR_BONUS: u64 = 5;

/// Points awarded when the purchase day-of-month is odd.
const ODD_DAY_BONUS: u64 = 6;

/// Points awarded when the purchase falls in the 14:00-15:59 window.
const AFTERNOON_BONUS: u64 = 10;

/// Computes the point total for a receipt.
///
/// Deterministic: the same receipt always scores the same total, regardless
/// of the identifier it is stored under or how often it is queried.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    let mut points = retailer_points(&receipt.retailer);
    points += round_dollar_points(&receipt.total);
    points += quarter_multiple_points(&receipt.total);
    points += item_pair_points(receipt.items.len());
    points += description_points(receipt);
    points += odd_day_points(&receipt.purchase_date);
    points += afternoon_points(&receipt.purchase_time);
    points
}

/// One point for every ASCII alphanumeric character in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total ends in the literal suffix `.00`.
///
/// A textual check, independent of numeric parsing.
fn round_dollar_points(total: &str) -> u64 {
    if total.ends_with(".00") {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

/// 25 points if the total in cents is a multiple of 25.
///
/// An unparsable total degrades to 0.0, which is a multiple of 25 and earns
/// the bonus.
fn quarter_multiple_points(total: &str) -> u64 {
    let total: f64 = total.parse().unwrap_or(0.0);

    if (total * 100.0) % 25.0 == 0.0 {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// 5 points for every two items; an odd item out earns nothing.
fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_BONUS
}

/// Per item: if the trimmed description length is a multiple of 3, award
/// `ceil(price * 0.2)` points.
///
/// Length 0 is a multiple of 3, so an all-whitespace description still earns
/// the price bonus. Unparsable prices degrade to 0.0.
fn description_points(receipt: &Receipt) -> u64 {
    receipt
        .items
        .iter()
        .map(|item| {
            if item.short_description.trim().len() % 3 == 0 {
                let price: f64 = item.price.parse().unwrap_or(0.0);
                (price * 0.2).ceil() as u64
            } else {
                0
            }
        })
        .sum()
}

/// 6 points if the purchase day-of-month is odd.
///
/// An unparsable date degrades to the epoch date, whose day is 1.
fn odd_day_points(purchase_date: &str) -> u64 {
    let date = NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d").unwrap_or_default();

    if date.day() % 2 == 1 { ODD_DAY_BONUS } else { 0 }
}

/// 10 points if the purchase hour is in `[14, 16)`.
///
/// An unparsable time degrades to midnight.
fn afternoon_points(purchase_time: &str) -> u64 {
    let time = NaiveTime::parse_from_str(purchase_time, "%H:%M").unwrap_or_default();

    if time.hour() >= 14 && time.hour() < 16 {
        AFTERNOON_BONUS
    } else {
        0
    }
}
