//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and the error type returned by
//! every HTTP client in the crate.

use crate::shared::config::ApiConfig;
use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    /// Request body could not be built; nothing was sent
    #[error("could not build request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an HTTP error from the status and raw body text
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: ApiErrorBody::message_from(body),
        }
    }

    /// Message supplied by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Get the base URL for API requests
///
/// Uses `base_url` when configured, otherwise the current window location
/// with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = &config.base_url {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin(&protocol, &hostname, config.port)
}

fn origin(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(&config.api, &config.api.products_path);
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", api_base(config), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(origin("https:", "shop.local", 3000), "https://shop.local:3000");
    }

    #[test]
    fn test_configured_base_url_wins() {
        let config = ApiConfig {
            base_url: Some("https://api.example.com/".to_string()),
            port: 3000,
            categories_path: "/api/categoria".to_string(),
            products_path: "/api/producto".to_string(),
        };
        assert_eq!(api_url(&config, "/api/producto"), "https://api.example.com/api/producto");
    }

    #[test]
    fn test_server_message() {
        let err = ApiError::from_response(422, r#"{"message":"Nombre duplicado"}"#);
        assert_eq!(err.server_message(), Some("Nombre duplicado"));
        assert_eq!(ApiError::from_response(500, "oops").server_message(), None);
        assert_eq!(ApiError::Network("offline".into()).server_message(), None);
        assert_eq!(err.to_string(), "HTTP 422");
    }

    #[test]
    fn test_encode_error_has_no_server_message() {
        let err = ApiError::Encode("FormData".into());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "could not build request: FormData");
    }
}
