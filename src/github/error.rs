//! Backend error types
//!
//! Every failed call against the issue tracker or the comment-widget API
//! surfaces as a [`GitHubError`]. The pagination engine treats all of them
//! as fetch failures.

use thiserror::Error;

/// Error types for backend operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// HTTP transport error talking to the widget API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication required or failed
    #[error("Authentication required")]
    AuthRequired,

    /// The comment app is not installed on the target repository
    #[error("Comment app is not installed on {owner}/{repo}")]
    NotInstalled { owner: String, repo: String },

    /// A response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The spawned API task was dropped before it produced a result
    #[error("API task aborted before completion")]
    TaskAborted,
}

/// Convenience result alias for backend operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl From<String> for GitHubError {
    fn from(s: String) -> Self {
        GitHubError::Api(s)
    }
}

impl From<&str> for GitHubError {
    fn from(s: &str) -> Self {
        GitHubError::Api(s.to_string())
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(e: serde_json::Error) -> Self {
        GitHubError::Decode(e.to_string())
    }
}
