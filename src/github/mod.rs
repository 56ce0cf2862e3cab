//! Issue tracker backend
//!
//! Capability traits consumed by the widget core, the entities they
//! exchange, and the GitHub implementation built on octocrab and the
//! comment-widget API.

pub mod backend;
pub mod client;
pub mod error;
pub mod github_backend;
pub mod models;
pub mod util;
pub mod widget_api;

// Re-export capability traits
pub use backend::{CommentSource, IssueBackend, RepoConfigSource};

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};
pub use github_backend::GitHubBackend;
pub use widget_api::UtterancesApi;

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export entities
pub use models::{CommentId, Issue, IssueComment, NewIssue, RepoConfig, User};

// GitHub API operations (internal)
pub(crate) mod load_comments_page;
pub(crate) mod load_issue;
pub(crate) mod load_repo_config;
pub(crate) mod load_user;
pub(crate) mod post_comment;
