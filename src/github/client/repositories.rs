//! Repository API methods

use super::GitHubClient;
use crate::github::models::RepoConfig;
use crate::runtime::ApiTask;

impl GitHubClient {
    /// Read the repository's widget configuration file at `path`
    pub fn load_repo_config(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> ApiTask<RepoConfig> {
        crate::github::load_repo_config::load_repo_config(self.inner.clone(), owner, repo, path)
    }
}
