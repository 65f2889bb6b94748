//! HTTP handlers for the bfhl service.

pub mod bfhl;
pub mod health;

use service_core::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not found"))
}
