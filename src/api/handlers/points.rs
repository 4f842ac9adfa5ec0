//! Handler for the points query endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::points::PointsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the point total for a previously submitted receipt.
///
/// Points are recomputed from the stored receipt on every query; nothing is
/// cached or stored alongside it.
///
/// # Endpoint
///
/// `GET /receipts/{id}/points`
///
/// # Response
///
/// ```json
/// { "points": 28 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found with the plain-text body `Receipt not found` for
/// an unknown identifier. Any method other than GET receives 405.
pub async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let points = state.receipt_service.points(&id).await?;

    Ok(Json(PointsResponse { points }))
}
