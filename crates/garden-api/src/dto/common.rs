//! Common DTO types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success envelope: `{success, data, message?}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always true
    pub success: bool,
    /// Payload
    pub data: T,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Envelope for list payloads, with a count like the mobile client expects
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Always true
    pub success: bool,
    /// Items
    pub data: Vec<T>,
    /// Item count
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// Server time response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimeResponse {
    /// Server time in milliseconds
    pub server_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_flat() {
        let body = serde_json::to_value(ApiResponse::ok(serde_json::json!({"gold": 5}))).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["gold"], 5);
        assert!(body.get("message").is_none());

        let body =
            serde_json::to_value(ApiResponse::with_message(1, "Tree planted successfully")).unwrap();
        assert_eq!(body["message"], "Tree planted successfully");
    }

    #[test]
    fn list_envelope_counts() {
        let body = serde_json::to_value(ListResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(body["count"], 3);
    }
}
