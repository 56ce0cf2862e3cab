//! GitHub API client wrapper
//!
//! Provides the handful of GitHub operations the comment widget needs
//! without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kodegen_comment_widget::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::builder().build()?;
//!
//!     let first_page = gh.load_comments_page("owner", "repo", 42, 1, 25).await?;
//!     println!("{} comments on the first page", first_page.len());
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use std::sync::Arc;

mod issues;
mod repositories;
mod users;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    authenticated: bool,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with a user token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Whether requests carry a user token
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set the user token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        let authenticated = self.token.is_some();
        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::InvalidInput(format!("base uri {uri}: {e}")))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::Api(format!("client setup failed: {e}")))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            authenticated,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
