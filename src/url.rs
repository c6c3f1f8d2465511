//! URL construction helpers for the workspace API.

use url::Url;

/// Build the URL for the workspace-by-id endpoint.
pub fn build_workspace_url(base_url: &Url, workspace_id: &str) -> Url {
    let mut url = base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/workspace/{workspace_id}"));

    url
}
