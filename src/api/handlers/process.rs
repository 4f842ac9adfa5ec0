//! Handler for the receipt submission endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::process::{ProcessReceiptResponse, ReceiptBody};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a submitted receipt and returns its identifier.
///
/// # Endpoint
///
/// `POST /receipts/process`
///
/// # Request Body
///
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [
///     { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
///   ],
///   "total": "6.49"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "7fb1377b-b223-49d9-a31a-5a02701dd310" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the decoder's message if the body is not
/// parsable JSON. Returns 500 Internal Server Error if identifier
/// generation fails. Any method other than POST receives 405.
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptBody>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let id = state.receipt_service.submit(body.into_receipt()).await?;

    Ok(Json(ProcessReceiptResponse { id: String::from(id) }))
}
