use serde::Serialize;

/// Success half of the response envelope. Failures are rendered by
/// `service_core::error::AppError`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub is_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(official_email: Option<String>, data: T) -> Self {
        Self {
            is_success: true,
            official_email,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a payload, as served by `/health`.
    pub fn empty(official_email: Option<String>) -> Self {
        Self {
            is_success: true,
            official_email,
            data: None,
        }
    }
}

/// Payload of a successful `/bfhl` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BfhlData {
    Sequence(Vec<u64>),
    Integers(Vec<i64>),
    Integer(u64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let body = ApiResponse::success(
            Some("ops@example.com".to_string()),
            BfhlData::Sequence(vec![0, 1, 1]),
        );
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"is_success": true, "official_email": "ops@example.com", "data": [0, 1, 1]})
        );
    }

    #[test]
    fn missing_email_is_omitted() {
        let body = ApiResponse::success(None, BfhlData::Integer(12));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"is_success": true, "data": 12})
        );
    }

    #[test]
    fn health_envelope_has_no_data() {
        let body = ApiResponse::empty(Some("ops@example.com".to_string()));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"is_success": true, "official_email": "ops@example.com"})
        );
    }

    #[test]
    fn text_payload_serializes_as_string() {
        let value = serde_json::to_value(BfhlData::Text("AI_error".to_string())).unwrap();
        assert_eq!(value, json!("AI_error"));
    }
}
