//! Repository widget configuration retrieval.

use crate::github::error::GitHubError;
use crate::github::models::RepoConfig;
use crate::github::util::{is_not_found, spawn_task};
use crate::runtime::ApiTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Read and decode the repository's widget configuration file.
pub(crate) fn load_repo_config(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
) -> ApiTask<RepoConfig> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let content_items = match inner.repos(&owner, &repo).get_content().path(&path).send().await {
            Ok(items) => items,
            Err(e) if is_not_found(&e) => {
                return Err(GitHubError::NotFound(format!(
                    "Repo \"{owner}/{repo}\" does not have an {path} file"
                )));
            }
            Err(e) => return Err(GitHubError::from(e)),
        };

        let content = content_items
            .items
            .into_iter()
            .next()
            .and_then(|item| item.decoded_content())
            .ok_or_else(|| GitHubError::Decode(format!("{owner}/{repo}/{path} has no content")))?;

        let config: RepoConfig = serde_json::from_str(&content)?;
        Ok(config)
    })
}
