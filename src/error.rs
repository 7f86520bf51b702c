use std::fmt;

/// Custom error type for Mixpanel operations
#[derive(Debug)]
pub enum MixpanelError {
    /// Service account username or secret missing at client construction
    MissingCredentials(String),
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a non-2xx response
    Api { status: u16, body: String },
    /// Response body did not have the expected shape
    Decode { field: String, value: String },
    /// The account has no organization to create projects in
    NoOrganization,
    /// Timezone name absent from the reference list
    TimezoneNotFound(String),
    /// Caller cancelled while the request waited for a free slot
    Cancelled,
    /// Operation the service account cannot perform
    Unsupported(String),
    /// Configuration error
    Config(String),
}

impl MixpanelError {
    /// Build a decode error from a field description and the offending value
    pub fn decode(field: impl Into<String>, value: impl fmt::Display) -> Self {
        MixpanelError::Decode {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            MixpanelError::Api { status, .. } => Some(*status),
            MixpanelError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for MixpanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixpanelError::MissingCredentials(msg) => {
                write!(f, "Missing service account credentials: {}", msg)
            }
            MixpanelError::Http(e) => write!(f, "HTTP request failed: {}", e),
            MixpanelError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            MixpanelError::Decode { field, value } => {
                write!(f, "Failed to decode {}: {}", field, value)
            }
            MixpanelError::NoOrganization => {
                write!(f, "No organization found for this service account")
            }
            MixpanelError::TimezoneNotFound(name) => write!(f, "Timezone not found: {}", name),
            MixpanelError::Cancelled => write!(f, "Request cancelled"),
            MixpanelError::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
            MixpanelError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MixpanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MixpanelError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MixpanelError {
    fn from(err: reqwest::Error) -> Self {
        MixpanelError::Http(err)
    }
}

impl From<serde_json::Error> for MixpanelError {
    fn from(err: serde_json::Error) -> Self {
        MixpanelError::decode("response body", err)
    }
}

impl From<serde_yml::Error> for MixpanelError {
    fn from(err: serde_yml::Error) -> Self {
        MixpanelError::Config(format!("YAML serialization failed: {}", err))
    }
}

/// Result type alias for Mixpanel operations
pub type Result<T> = std::result::Result<T, MixpanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = MixpanelError::Api {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("forbidden"));
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MixpanelError>();
    }

    #[test]
    fn test_decode_error_names_field_and_value() {
        let err = MixpanelError::decode("results[2][0]", "\"abc\"");
        let msg = err.to_string();
        assert!(msg.contains("results[2][0]"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_timezone_not_found_display() {
        let err = MixpanelError::TimezoneNotFound("UTC".to_string());
        assert_eq!(err.to_string(), "Timezone not found: UTC");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MixpanelError = json_err.into();
        match err {
            MixpanelError::Decode { field, value } => {
                assert_eq!(field, "response body");
                assert!(!value.is_empty());
            }
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        assert!(MixpanelError::NoOrganization.source().is_none());
        assert!(MixpanelError::Cancelled.source().is_none());
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(MixpanelError::NoOrganization.status(), None);
        assert_eq!(MixpanelError::Cancelled.status(), None);
    }
}
