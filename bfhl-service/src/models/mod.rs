//! Domain models for the bfhl service.

pub mod request;
pub mod response;

pub use request::BfhlRequest;
pub use response::{ApiResponse, BfhlData};
