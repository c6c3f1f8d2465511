//! Resolution of the hosted IDE dev-server URI from a workspace snapshot.

use crate::client::{DefaultWorkspaceClient, WorkspaceApi};
use crate::config::ClientConfig;
use crate::error::{ResolveError, ResolveResult};
use url::Url;

/// Default resolver backed by the reqwest workspace client.
pub type DefaultUriResolver = UriResolver<DefaultWorkspaceClient>;

/// Resolves the external URL of a workspace's `ide-dev` server.
///
/// The resolver holds its API port and the configured workspace id for the
/// lifetime of the host process. Each [`resolve`](Self::resolve) call is an
/// independent fresh fetch; nothing is cached between calls, since the
/// workspace state can change at any time (e.g. the target server starting
/// up).
pub struct UriResolver<A: WorkspaceApi> {
    api: A,
    workspace_id: Option<String>,
}

impl DefaultUriResolver {
    /// Create a resolver from the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: DefaultWorkspaceClient::new(config),
            workspace_id: config.workspace_id.clone(),
        }
    }
}

impl<A: WorkspaceApi> UriResolver<A> {
    /// Create a resolver over any [`WorkspaceApi`] implementation.
    pub fn with_api(api: A, workspace_id: Option<String>) -> Self {
        Self { api, workspace_id }
    }

    /// Resolve the external URL of the workspace's `ide-dev` server.
    ///
    /// Performs one workspace fetch and a linear scan of the runtime
    /// topology, failing with exactly one [`ResolveError`] per failure mode:
    /// the workspace id is checked before any network call, a workspace
    /// without a runtime is not running, and a runtime without a tagged
    /// server has nothing to attach to. Transport failures surface
    /// unchanged; none of these conditions is retried here.
    ///
    /// If more than one server carries the `ide-dev` tag, the first match in
    /// lexicographic order (machine name, then server name) wins; duplicate
    /// tags are never an error.
    pub async fn resolve(&self) -> ResolveResult<Url> {
        let workspace_id = self
            .workspace_id
            .as_deref()
            .ok_or(ResolveError::MissingWorkspaceId)?;

        let workspace = self.api.workspace_by_id(workspace_id).await?;

        let Some(runtime) = workspace.runtime else {
            tracing::debug!(
                workspace_id,
                status = workspace.status.as_deref(),
                "Workspace has no active runtime"
            );
            return Err(ResolveError::NotRunning {
                workspace_id: workspace_id.to_string(),
            });
        };

        let Some((machine_name, server_name, server)) =
            runtime.servers().find(|(_, _, server)| server.is_dev_server())
        else {
            return Err(ResolveError::DevServerNotFound {
                workspace_id: workspace_id.to_string(),
            });
        };

        tracing::debug!(
            workspace_id,
            machine = machine_name,
            server = server_name,
            url = %server.url,
            "Found hosted IDE dev server"
        );

        Url::parse(&server.url).map_err(|source| ResolveError::InvalidServerUrl {
            url: server.url.clone(),
            source,
        })
    }
}
