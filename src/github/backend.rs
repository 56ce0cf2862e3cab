//! Capabilities the widget core consumes from the issue tracker.
//!
//! The pagination engine only needs [`CommentSource`], the origin gate only
//! needs [`RepoConfigSource`], and the widget orchestrator needs the full
//! [`IssueBackend`]. [`GitHubBackend`](crate::github::GitHubBackend) is the
//! production implementation; tests substitute in-memory ones.

use crate::github::error::GitHubResult;
use crate::github::models::{Issue, IssueComment, NewIssue, RepoConfig, User};

/// Paged access to an issue's comments.
///
/// Pages are 1-indexed: page `i` at size `s` holds comments
/// `[(i-1)*s, i*s)` in creation order. The lazy loader relies on the backend
/// honoring any size for the same index with that same offset rule.
#[allow(async_fn_in_trait)]
pub trait CommentSource {
    async fn fetch_comments_page(
        &self,
        issue_number: u64,
        page_index: u32,
        page_size: u32,
    ) -> GitHubResult<Vec<IssueComment>>;
}

/// Access to a repository's widget configuration.
#[allow(async_fn_in_trait)]
pub trait RepoConfigSource {
    async fn fetch_repo_config(&self, owner: &str, repo: &str) -> GitHubResult<RepoConfig>;
}

/// Issue lookup and writes for the repository the widget is bound to.
#[allow(async_fn_in_trait)]
pub trait IssueBackend: CommentSource + RepoConfigSource {
    async fn load_issue_by_number(&self, number: u64) -> GitHubResult<Option<Issue>>;

    async fn load_issue_by_term(&self, term: &str) -> GitHubResult<Option<Issue>>;

    /// The signed-in user, or `None` when anonymous.
    async fn load_user(&self) -> GitHubResult<Option<User>>;

    async fn create_issue(&self, request: &NewIssue) -> GitHubResult<Issue>;

    async fn post_comment(&self, issue_number: u64, body: &str) -> GitHubResult<IssueComment>;
}
