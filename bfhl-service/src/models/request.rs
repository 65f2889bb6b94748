//! Parsing of the `/bfhl` request body into a typed operation.

use serde_json::{Map, Value};
use service_core::error::AppError;

pub const KEY_FIBONACCI: &str = "fibonacci";
pub const KEY_PRIME: &str = "prime";
pub const KEY_LCM: &str = "lcm";
pub const KEY_HCF: &str = "hcf";
pub const KEY_AI: &str = "AI";

pub const MSG_EXACTLY_ONE_KEY: &str = "Request must contain exactly one key";
pub const MSG_INVALID_JSON: &str = "Invalid JSON body";
pub const MSG_INVALID_KEY: &str = "Invalid key";
pub const MSG_FIBONACCI: &str = "fibonacci must be a positive integer";
pub const MSG_PRIME: &str = "prime must be an array";
pub const MSG_LCM: &str = "lcm must be an array of positive integers";
pub const MSG_HCF: &str = "hcf must be an array of positive integers";
pub const MSG_AI: &str = "AI input must be a string";

/// One recognised operation and its validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfhlRequest {
    Fibonacci(u64),
    /// Integer elements of the submitted array, in order. Anything else in
    /// the array is dropped here rather than rejected.
    Prime(Vec<i64>),
    Lcm(Vec<u64>),
    Hcf(Vec<u64>),
    Ai(String),
}

impl BfhlRequest {
    /// Parse a raw body. An empty body counts as a missing one.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::bad_request(MSG_EXACTLY_ONE_KEY));
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|_| AppError::bad_request(MSG_INVALID_JSON))?;
        Self::parse(value)
    }

    pub fn parse(body: Value) -> Result<Self, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::bad_request(MSG_EXACTLY_ONE_KEY));
        };
        let (key, value) = single_entry(map)?;

        match key.as_str() {
            KEY_FIBONACCI => match as_integer(&value) {
                Some(n) if n > 0 => Ok(BfhlRequest::Fibonacci(n as u64)),
                _ => Err(AppError::bad_request(MSG_FIBONACCI)),
            },
            KEY_PRIME => match value {
                Value::Array(items) => Ok(BfhlRequest::Prime(
                    items.iter().filter_map(as_integer).collect(),
                )),
                _ => Err(AppError::bad_request(MSG_PRIME)),
            },
            KEY_LCM => positive_integers(&value)
                .map(BfhlRequest::Lcm)
                .ok_or_else(|| AppError::bad_request(MSG_LCM)),
            KEY_HCF => positive_integers(&value)
                .map(BfhlRequest::Hcf)
                .ok_or_else(|| AppError::bad_request(MSG_HCF)),
            KEY_AI => match value {
                Value::String(prompt) => Ok(BfhlRequest::Ai(prompt)),
                _ => Err(AppError::bad_request(MSG_AI)),
            },
            _ => Err(AppError::bad_request(MSG_INVALID_KEY)),
        }
    }

    /// Body key this operation was parsed from.
    pub fn key(&self) -> &'static str {
        match self {
            BfhlRequest::Fibonacci(_) => KEY_FIBONACCI,
            BfhlRequest::Prime(_) => KEY_PRIME,
            BfhlRequest::Lcm(_) => KEY_LCM,
            BfhlRequest::Hcf(_) => KEY_HCF,
            BfhlRequest::Ai(_) => KEY_AI,
        }
    }
}

fn single_entry(map: Map<String, Value>) -> Result<(String, Value), AppError> {
    if map.len() != 1 {
        return Err(AppError::bad_request(MSG_EXACTLY_ONE_KEY));
    }
    map.into_iter()
        .next()
        .ok_or_else(|| AppError::bad_request(MSG_EXACTLY_ONE_KEY))
}

/// Integer view of a JSON number. Floats count when they have no fractional
/// part, so `5.0` is `5`.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    let f = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Non-empty array whose elements are all integers above zero.
fn positive_integers(value: &Value) -> Option<Vec<u64>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| as_integer(item).filter(|&n| n > 0).map(|n| n as u64))
        .collect()
}
