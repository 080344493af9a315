use serde::{Deserialize, Serialize};

/// Error body returned by the backend: `{ "message": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract the server message from a raw response body.
    /// Non-JSON bodies and bodies without `message` yield `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"La categoría no existe","code":400}"#),
            Some("La categoría no existe".to_string())
        );
    }

    #[test]
    fn test_no_message() {
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"x"}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"message":null}"#), None);
        assert_eq!(ApiErrorBody::message_from("Internal Server Error"), None);
        assert_eq!(ApiErrorBody::message_from(""), None);
    }
}
