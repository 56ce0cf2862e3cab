//! Production backend bound to one repository.

use crate::auth::TokenStore;
use crate::config::WidgetConfig;
use crate::github::backend::{CommentSource, IssueBackend, RepoConfigSource};
use crate::github::client::GitHubClient;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::{Issue, IssueComment, NewIssue, RepoConfig, User};
use crate::github::widget_api::UtterancesApi;
use log::info;

/// GitHub REST API for reads and comments, widget API for issue creation.
#[derive(Debug, Clone)]
pub struct GitHubBackend {
    client: GitHubClient,
    api: UtterancesApi,
    owner: String,
    repo: String,
    token: Option<String>,
    repo_config_path: String,
}

impl GitHubBackend {
    /// Bind a backend to `owner/repo`.
    ///
    /// Loads the session token through `tokens` (the widget API's cookie
    /// exchange on first use) and authenticates the GitHub client with it.
    ///
    /// # Errors
    ///
    /// Fails when the token exchange errors or a client cannot be built.
    pub async fn connect(
        owner: impl Into<String>,
        repo: impl Into<String>,
        tokens: &TokenStore,
        config: &WidgetConfig,
    ) -> GitHubResult<Self> {
        let api = UtterancesApi::new(&config.api_base_url)?;
        let token = tokens.load(&api).await?;

        let mut builder = GitHubClient::builder();
        if let Some(token) = &token {
            builder = builder.personal_token(token.clone());
        }
        if let Some(uri) = &config.github_base_uri {
            builder = builder.base_uri(uri.clone());
        }
        let client = builder.build()?;

        let (owner, repo) = (owner.into(), repo.into());
        info!(
            "Connected to {owner}/{repo} ({})",
            if token.is_some() { "signed in" } else { "anonymous" }
        );
        Ok(Self {
            client,
            api,
            owner,
            repo,
            token,
            repo_config_path: config.repo_config_path.clone(),
        })
    }
}

impl CommentSource for GitHubBackend {
    async fn fetch_comments_page(
        &self,
        issue_number: u64,
        page_index: u32,
        page_size: u32,
    ) -> GitHubResult<Vec<IssueComment>> {
        self.client
            .load_comments_page(&self.owner, &self.repo, issue_number, page_index, page_size)
            .await
    }
}

impl RepoConfigSource for GitHubBackend {
    async fn fetch_repo_config(&self, owner: &str, repo: &str) -> GitHubResult<RepoConfig> {
        self.client
            .load_repo_config(owner, repo, &self.repo_config_path)
            .await
    }
}

impl IssueBackend for GitHubBackend {
    async fn load_issue_by_number(&self, number: u64) -> GitHubResult<Option<Issue>> {
        self.client
            .load_issue_by_number(&self.owner, &self.repo, number)
            .await
    }

    async fn load_issue_by_term(&self, term: &str) -> GitHubResult<Option<Issue>> {
        self.client
            .load_issue_by_term(&self.owner, &self.repo, term)
            .await
    }

    async fn load_user(&self) -> GitHubResult<Option<User>> {
        self.client.load_user().await
    }

    async fn create_issue(&self, request: &NewIssue) -> GitHubResult<Issue> {
        let token = self.token.as_deref().ok_or(GitHubError::AuthRequired)?;
        self.api
            .create_issue(&self.owner, &self.repo, token, request)
            .await
    }

    async fn post_comment(&self, issue_number: u64, body: &str) -> GitHubResult<IssueComment> {
        if !self.client.is_authenticated() {
            return Err(GitHubError::AuthRequired);
        }
        self.client
            .post_comment(&self.owner, &self.repo, issue_number, body)
            .await
    }
}
