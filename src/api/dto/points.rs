//! DTOs for the points query endpoint.

use serde::Serialize;

/// Response carrying the computed point total.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}
