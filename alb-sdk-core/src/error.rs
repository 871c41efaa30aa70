//! Errors returned by controller sessions and resource clients.

use thiserror::Error;

/// Result type alias for controller operations.
pub type AviResult<T> = Result<T, AviError>;

/// Errors related to talking to an Avi Controller.
#[derive(Debug, Error)]
pub enum AviError {
    /// The controller answered with a non-success status.
    #[error("{verb} {url} failed with status {status}: {message}")]
    Api {
        verb: String,
        url: String,
        status: u16,
        /// The `error` member of the response body, or the raw body.
        message: String,
    },

    /// The controller rejected the credentials.
    #[error("login to {controller} failed with status {status}: {message}")]
    LoginFailed {
        controller: String,
        status: u16,
        message: String,
    },

    /// A lookup by name or filter matched no object.
    #[error("no {object_type} object named '{name}' found")]
    NotFound { object_type: String, name: String },

    /// An object was about to be sent without all required fields.
    #[error("{object_type} is missing required fields: {}", .fields.join(", "))]
    MissingRequired {
        object_type: String,
        fields: Vec<String>,
    },

    /// An update was attempted on an object that has no uuid yet.
    #[error("{object_type} object has no uuid")]
    MissingUuid { object_type: String },

    /// The session configuration is incomplete or malformed.
    #[error("invalid session configuration: {0}")]
    Config(String),

    /// Failure below HTTP in a transport other than reqwest.
    #[error("transport error: {0}")]
    Transport(String),

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request could not be assembled.
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AviError {
    /// HTTP status of a failed request, if the controller answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AviError::Api { status, .. } | AviError::LoginFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AviError::NotFound { .. }) || self.status() == Some(404)
    }

    /// Whether the request may be sent again: failures below HTTP, and a
    /// login turned away by the gateway while the controller restarts.
    pub(crate) fn is_transient(&self) -> bool {
        matches!(
            self,
            AviError::Network(_)
                | AviError::Transport(_)
                | AviError::LoginFailed {
                    status: 502..=504,
                    ..
                }
        )
    }

    /// Builds an [AviError::Api] from a failed response body.
    pub(crate) fn api(verb: &str, url: &str, status: u16, body: &[u8]) -> Self {
        AviError::Api {
            verb: verb.to_string(),
            url: url.to_string(),
            status,
            message: error_message(body),
        }
    }
}

/// The controller reports failures as `{"error": "..."}`; anything else is passed on verbatim.
pub(crate) fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let error = AviError::api(
            "GET",
            "https://10.10.10.10/api/pool/pool-1",
            404,
            br#"{"error": "Pool object not found!"}"#,
        );
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/api/pool/pool-1"));
        assert!(msg.contains("Pool object not found!"));
        assert_eq!(Some(404), error.status());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_plain_body_is_kept() {
        assert_eq!("Bad Gateway", error_message(b"Bad Gateway\n"));
        assert_eq!("", error_message(b""));
        assert_eq!(r#"{"detail":"x"}"#, error_message(br#"{"detail":"x"}"#));
    }

    #[test]
    fn test_missing_required_message() {
        let error = AviError::MissingRequired {
            object_type: "trustedhostprofile".to_string(),
            fields: vec!["hosts".to_string(), "name".to_string()],
        };
        assert_eq!(
            "trustedhostprofile is missing required fields: hosts, name",
            error.to_string()
        );
        assert_eq!(None, error.status());
    }

    #[test]
    fn test_not_found() {
        let error = AviError::NotFound {
            object_type: "techsupportprofile".to_string(),
            name: "default".to_string(),
        };
        assert!(error.is_not_found());
        assert!(error.to_string().contains("'default'"));
        assert!(!AviError::Config("no password".to_string()).is_not_found());
    }

    #[test]
    fn test_transient() {
        assert!(AviError::Transport("connection reset".to_string()).is_transient());
        assert!(!AviError::api("GET", "/api/pool", 500, b"").is_transient());

        let login_failed = |status| AviError::LoginFailed {
            controller: "10.10.10.10".to_string(),
            status,
            message: String::new(),
        };
        assert!(login_failed(503).is_transient());
        assert!(!login_failed(401).is_transient());
        assert!(!login_failed(403).is_transient());
    }
}
