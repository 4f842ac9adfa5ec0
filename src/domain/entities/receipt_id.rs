//! Opaque receipt identifier generation.
//!
//! Identifiers are 128 bits of OS entropy rendered in the familiar
//! 8-4-4-4-12 hex grouping, with the UUID version nibble forced to `4` and
//! the variant bits forced to `10`. They are never parsed back; lookups
//! treat them as plain strings.

use std::fmt;

use crate::error::AppError;

/// Number of random bytes backing an identifier.
const ID_LENGTH_BYTES: usize = 16;

/// An opaque identifier a stored receipt is keyed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh random identifier.
    ///
    /// No collision check is performed; at 122 random bits the collision
    /// probability is treated as negligible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the OS random source cannot supply
    /// 16 bytes. The failure is not retried.
    pub fn generate() -> Result<Self, AppError> {
        let mut bytes = [0u8; ID_LENGTH_BYTES];

        getrandom::fill(&mut bytes)
            .map_err(|e| AppError::internal(format!("random source failure: {e}")))?;

        // Force variant `10` and version `4` bit patterns.
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        bytes[6] = (bytes[6] & 0x0f) | 0x40;

        Ok(Self(format!(
            "{}-{}-{}-{}-{}",
            hex::encode(&bytes[0..4]),
            hex::encode(&bytes[4..6]),
            hex::encode(&bytes[6..8]),
            hex::encode(&bytes[8..10]),
            hex::encode(&bytes[10..16]),
        )))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}
