//! Public configuration for the workspace API client and resolver.
//!
//! Configuration is an explicit struct handed to constructors; nothing in the
//! crate reads process globals behind the caller's back. `from_env` exists as
//! a convenience for hosts that pass settings through the environment.

use std::env;
use std::time::Duration;

/// Environment variable holding the base URL of the workspace API.
pub(crate) const ENV_API_URL: &str = "DEVSPACE_API_URL";
/// Environment variable holding the optional bearer token.
pub(crate) const ENV_API_TOKEN: &str = "DEVSPACE_API_TOKEN";
/// Environment variable holding the workspace identifier.
pub(crate) const ENV_WORKSPACE_ID: &str = "DEVSPACE_WORKSPACE_ID";

/// Default base URL when none is configured.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration for the workspace API client and URI resolver.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use devspace_uri::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://workspaces.example.com/api")
///     .with_timeout(Duration::from_secs(60))
///     .with_workspace_id("workspace0x1");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the workspace API
    pub(crate) base_url: String,
    /// Optional bearer token attached to every request
    pub(crate) token: Option<String>,
    /// Identifier of the workspace to resolve against
    pub(crate) workspace_id: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient transport errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            workspace_id: None,
            user_agent: concat!("devspace-uri/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from the host environment.
    ///
    /// Reads `DEVSPACE_API_URL`, `DEVSPACE_API_TOKEN` and
    /// `DEVSPACE_WORKSPACE_ID`. Unset variables leave the defaults in place;
    /// a missing workspace id is only reported once `resolve()` is called.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(ENV_API_URL) {
            config.base_url = url;
        }
        config.token = env::var(ENV_API_TOKEN).ok().filter(|t| !t.is_empty());
        config.workspace_id = env::var(ENV_WORKSPACE_ID).ok().filter(|id| !id.is_empty());
        config
    }

    /// Set the base URL of the workspace API.
    ///
    /// Defaults to `http://localhost:8080/api`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a bearer token attached to every API request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the identifier of the workspace to resolve against.
    #[must_use]
    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient transport
    /// errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
