//! Widget-level error taxonomy

use crate::github::GitHubError;
use thiserror::Error;

/// Malformed page attributes. Fatal to the whole widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("\"issue-term\" or \"issue-number\" must be specified.")]
    MissingThreadIdentity,

    #[error("When issue-term is specified, it cannot be blank.")]
    BlankIssueTerm,

    #[error("Unable to find \"{0}\" metadata.")]
    MissingMetadata(String),

    #[error("issue-number is invalid. \"{0}\"")]
    InvalidIssueNumber(String),

    #[error("\"repo\" is required.")]
    MissingRepo,

    #[error("Invalid repo: \"{0}\"")]
    InvalidRepo(String),

    #[error("\"origin\" is required.")]
    MissingOrigin,
}

/// Errors surfaced by the widget core
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Page attributes failed validation
    #[error("Invalid page attributes: {0}")]
    Config(#[from] ConfigError),

    /// The embedding origin may not write to the repository
    #[error("Origin not permitted: {origin} may not post to {owner}/{repo}")]
    OriginNotPermitted {
        origin: String,
        owner: String,
        repo: String,
    },

    /// A backend call failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] GitHubError),

    /// Writes are refused on locked issues
    #[error("Issue #{0} is locked")]
    IssueLocked(u64),

    /// No loader is awaiting activation (already fetching, or everything is shown)
    #[error("No hidden comments are awaiting activation")]
    LoaderUnavailable,
}

/// Convenience result alias for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;
