//! Error types for workspace API calls and URI resolution.
//!
//! Transport-level failures (`ApiError`) and domain-level resolution
//! failures (`ResolveError`) are kept separate; resolution passes transport
//! errors through unchanged.

use thiserror::Error;

/// Result type alias for workspace API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for URI resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised by the workspace API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("workspace API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by [`UriResolver::resolve`](crate::UriResolver::resolve).
///
/// Exactly one variant per failure mode; none of them is retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No workspace identifier was configured. Raised before any network
    /// call is attempted.
    #[error("workspace identifier is not set")]
    MissingWorkspaceId,

    /// The workspace was fetched but has no active runtime.
    #[error("workspace '{workspace_id}' is not running")]
    NotRunning {
        /// The workspace that was fetched
        workspace_id: String,
    },

    /// The runtime holds no server tagged `type = "ide-dev"`.
    #[error("no server with type \"ide-dev\" found in workspace '{workspace_id}'")]
    DevServerNotFound {
        /// The workspace whose runtime was scanned
        workspace_id: String,
    },

    /// The matched server's URL string does not parse.
    #[error("server URL '{url}' is not a valid URL")]
    InvalidServerUrl {
        /// The URL string reported by the API
        url: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// Transport or API failure, passed through unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = ApiError::RequestFailed {
            status: 503,
            url: "http://localhost:8080/api/workspace/ws0".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/workspace/ws0"));
    }

    #[test]
    fn test_missing_workspace_id_message() {
        let error = ResolveError::MissingWorkspaceId;
        assert_eq!(error.to_string(), "workspace identifier is not set");
    }

    #[test]
    fn test_not_running_message() {
        let error = ResolveError::NotRunning {
            workspace_id: "workspace0x1".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("workspace0x1"));
        assert!(msg.contains("not running"));
    }

    #[test]
    fn test_dev_server_not_found_message() {
        let error = ResolveError::DevServerNotFound {
            workspace_id: "workspace0x1".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("ide-dev"));
        assert!(msg.contains("workspace0x1"));
    }

    #[test]
    fn test_invalid_server_url_message() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = ResolveError::InvalidServerUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_api_error_passes_through_transparently() {
        let inner = ApiError::RequestFailed {
            status: 500,
            url: "http://localhost:8080/api/workspace/ws0".to_string(),
        };
        let inner_msg = inner.to_string();
        let error = ResolveError::from(inner);
        // transparent: the resolve-level error renders the transport message
        assert_eq!(error.to_string(), inner_msg);
    }

    #[test]
    fn test_distinct_messages_per_kind() {
        let messages = [
            ResolveError::MissingWorkspaceId.to_string(),
            ResolveError::NotRunning {
                workspace_id: "ws".to_string(),
            }
            .to_string(),
            ResolveError::DevServerNotFound {
                workspace_id: "ws".to_string(),
            }
            .to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
