use crate::batch;
use crate::bos_client::BosApiClient;
use crate::errors::AppError;
use crate::models::{BatchOutcome, BatchRequest};
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the BOS fortune-calculation API.
    pub bos_client: BosApiClient,
}

/// Service status endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with the static service descriptor.
pub async fn status() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "running",
            "service": "bos-relay-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/calculate_golden_card
///
/// Accepts a batch of wallets, relays each to the BOS API sequentially and
/// returns the aggregated golden-card results in input order.
///
/// The body is parsed manually so a malformed batch surfaces as the standard
/// `{"success": false, "error": ...}` failure shape instead of a framework
/// rejection.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `body` - JSON body `{ shopify_order_id, wallets: [...] }`.
///
/// # Returns
///
/// * `Result<Json<BatchOutcome>, AppError>` - The batch outcome or an error.
pub async fn calculate_golden_card(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<BatchOutcome>, AppError> {
    let request: BatchRequest = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid batch request: {}", e)))?;

    tracing::info!(
        "Received calculation request: order {:?}, {} wallet(s)",
        request.shopify_order_id,
        request.wallets.len()
    );

    let outcome = batch::process_batch(&state.bos_client, &request.wallets).await;

    Ok(Json(outcome))
}

/// GET /check-ip
///
/// Looks up this server's outbound IP via api.ipify.org. The BOS provider
/// whitelists callers by IP, so operators use this to find the address to
/// register. Lookup failures return an error payload rather than an error
/// status.
pub async fn check_ip() -> Json<Value> {
    match fetch_outbound_ip().await {
        Ok(ip) => Json(json!({
            "server_ip": ip,
            "message": "Send this IP to BOS API provider for whitelisting"
        })),
        Err(e) => {
            tracing::error!("Outbound IP lookup failed: {}", e);
            Json(json!({
                "error": e.to_string(),
                "message": "Could not fetch IP"
            }))
        }
    }
}

async fn fetch_outbound_ip() -> Result<String, AppError> {
    let response = reqwest::get("https://api.ipify.org?format=json")
        .await
        .map_err(|e| AppError::ExternalApiError(format!("ipify request failed: {}", e)))?;

    let data: Value = response
        .json()
        .await
        .map_err(|e| AppError::ExternalApiError(format!("Failed to parse ipify response: {}", e)))?;

    data.get("ip")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::ExternalApiError("ipify response missing 'ip' field".to_string()))
}
