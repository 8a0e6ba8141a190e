use serde::{Deserialize, Serialize};

/// Message shown when the backend answers 401 for an authenticated call.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Error body shape returned by the backend.
///
/// The backend is not consistent about the key it uses, so every known
/// variant is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    /// First non-empty human readable message in the body
    pub fn best_message(&self) -> Option<String> {
        let direct = [&self.message, &self.error, &self.detail]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string);

        direct.or_else(|| {
            self.errors.iter().find_map(|e| match e {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                serde_json::Value::Object(map) => map
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty()),
                _ => None,
            })
        })
    }
}

/// Generic fallback used when the backend did not explain itself.
pub fn fallback_message(status: u16) -> String {
    format!("Request failed (HTTP {})", status)
}

/// Build the user-facing message for a failed response.
///
/// Prefers the backend's own text, falls back to a generic string.
/// 401 always maps to the session-expired message.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if status == 401 {
        return SESSION_EXPIRED_MESSAGE.to_string();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback_message(status);
    }

    match serde_json::from_str::<ApiErrorBody>(trimmed) {
        Ok(parsed) => parsed
            .best_message()
            .unwrap_or_else(|| fallback_message(status)),
        // Plain-text bodies are short error strings from proxies/axum rejections
        Err(_) if trimmed.len() <= 200 && !trimmed.starts_with('<') => trimmed.to_string(),
        Err(_) => fallback_message(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_message_field() {
        let body = r#"{"message": "Email already in use", "error": "conflict"}"#;
        assert_eq!(extract_error_message(409, body), "Email already in use");
    }

    #[test]
    fn test_uses_error_and_detail() {
        assert_eq!(extract_error_message(400, r#"{"error": "Bad slot count"}"#), "Bad slot count");
        assert_eq!(extract_error_message(422, r#"{"detail": "Invalid date"}"#), "Invalid date");
    }

    #[test]
    fn test_errors_array() {
        let body = r#"{"errors": [{"field": "sku", "message": "SKU must be unique"}]}"#;
        assert_eq!(extract_error_message(422, body), "SKU must be unique");
        let body = r#"{"errors": ["Name is required"]}"#;
        assert_eq!(extract_error_message(422, body), "Name is required");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(extract_error_message(500, ""), "Request failed (HTTP 500)");
        assert_eq!(extract_error_message(500, "{}"), "Request failed (HTTP 500)");
        assert_eq!(
            extract_error_message(502, "<html><body>Bad gateway</body></html>"),
            "Request failed (HTTP 502)"
        );
        assert_eq!(extract_error_message(404, "Not Found"), "Not Found");
    }

    #[test]
    fn test_unauthorized_is_session_expired() {
        assert_eq!(
            extract_error_message(401, r#"{"message": "jwt expired"}"#),
            SESSION_EXPIRED_MESSAGE
        );
    }
}
