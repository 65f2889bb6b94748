use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

use crate::models::{ApiResponse, BfhlData, BfhlRequest};
use crate::services::math::{self, MathError};
use crate::startup::AppState;

/// `POST /bfhl`: run the single operation named by the body's only key.
///
/// The body is taken raw so that a missing or non-JSON body still gets the
/// envelope instead of an extractor rejection.
pub async fn bfhl(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<BfhlData>>, AppError> {
    let request = BfhlRequest::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bfhl request");
        e
    })?;
    let key = request.key();

    let data = dispatch(&state, request).await.map_err(|e| {
        tracing::debug!(key, error = %e, "bfhl operation failed");
        e
    })?;

    tracing::info!(key, "bfhl request served");
    Ok(Json(ApiResponse::success(state.official_email(), data)))
}

pub async fn dispatch(state: &AppState, request: BfhlRequest) -> Result<BfhlData, AppError> {
    let key = request.key();
    let overflow = |_: MathError| {
        AppError::bad_request(format!("{key} result exceeds the supported integer range"))
    };

    let data = match request {
        BfhlRequest::Fibonacci(count) => {
            BfhlData::Sequence(math::fibonacci(count).map_err(overflow)?)
        }
        BfhlRequest::Prime(candidates) => BfhlData::Integers(math::primes(&candidates)),
        BfhlRequest::Lcm(values) => {
            // Parsing guarantees a non-empty list.
            let result = math::lcm_all(&values)
                .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("lcm over empty input")))?;
            BfhlData::Integer(result.map_err(overflow)?)
        }
        BfhlRequest::Hcf(values) => {
            let result = math::hcf_all(&values)
                .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("hcf over empty input")))?;
            BfhlData::Integer(result)
        }
        BfhlRequest::Ai(prompt) => BfhlData::Text(state.ai.ask(&prompt).await),
    };

    Ok(data)
}
