//! Envelope uniforme de la API
//!
//! Todas las respuestas usan el mismo shape `{success, data?, error?}`.

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("boom".to_string())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
