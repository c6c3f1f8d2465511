//! Workspace API client and the port trait consumed by the resolver.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::Workspace;
use crate::url::build_workspace_url;
use async_trait::async_trait;
use url::Url;

// ============================================================================
// Port Trait
// ============================================================================

/// The single remote capability the resolver depends on: fetch one workspace
/// snapshot by identifier.
///
/// Substitute implementations stand in for the real API in tests; the
/// production implementation is [`WorkspaceClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Fetch the workspace with the given identifier.
    async fn workspace_by_id(&self, workspace_id: &str) -> ApiResult<Workspace>;
}

// ============================================================================
// Client
// ============================================================================

/// Default workspace API client using the reqwest HTTP backend.
pub type DefaultWorkspaceClient = WorkspaceClient<ReqwestBackend>;

/// Client for the workspace-management API.
///
/// Generic over an HTTP backend for testability; production code uses
/// [`DefaultWorkspaceClient`]. The client is built once from its
/// configuration and holds no other state.
pub struct WorkspaceClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
}

impl DefaultWorkspaceClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = Url::parse(&config.base_url).unwrap_or_else(|_| {
            Url::parse(DEFAULT_BASE_URL).expect("default API URL is valid")
        });
        Self {
            backend: ReqwestBackend::new(config),
            base_url,
        }
    }
}

impl<B: HttpBackend> WorkspaceClient<B> {
    /// Create a client over a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }
}

#[async_trait]
impl<B: HttpBackend> WorkspaceApi for WorkspaceClient<B> {
    async fn workspace_by_id(&self, workspace_id: &str) -> ApiResult<Workspace> {
        let url = build_workspace_url(&self.base_url, workspace_id);
        tracing::debug!(workspace_id, url = %url, "Fetching workspace snapshot");
        self.backend.get_json(&url).await
    }
}
