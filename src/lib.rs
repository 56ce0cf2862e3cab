//! `kodegen_comment_widget` - issue-backed comment threads for any web page
//!
//! Maps a page to a GitHub issue and renders that issue's comments
//! incrementally: the first and last pages right away, the middle on demand
//! in growing batches behind a single "load more" affordance. Writes go
//! through an origin gate backed by the repository's own configuration.
//!
//! Rendering and transport are capabilities ([`TimelineSink`],
//! [`CommentSource`], [`IssueBackend`]); [`Timeline`] and [`GitHubBackend`]
//! are the bundled implementations.

// Module declarations
pub mod auth;
pub mod config;
pub mod error;
pub mod gate;
pub mod github;
pub mod page;
pub mod pagination;
pub mod runtime;
pub mod timeline;
pub mod widget;

// Re-export runtime types
pub use runtime::ApiTask;

// Re-export configuration and errors
pub use config::{MAX_PAGE_SIZE, WidgetConfig};
pub use error::{ConfigError, WidgetError, WidgetResult};

// Re-export page attribute types
pub use page::{PageAttributes, RepoSlug, ThreadIdentity, deparam};

// Re-export auth types
pub use auth::{TokenSource, TokenStore};

// Re-export GitHub backend types
pub use github::{
    CommentId, CommentSource, GitHubBackend, GitHubClient, GitHubClientBuilder, GitHubError,
    GitHubResult, Issue, IssueBackend, IssueComment, NewIssue, RepoConfig, RepoConfigSource, User,
    UtterancesApi,
};

// Re-export the widget core
pub use gate::OriginGate;
pub use pagination::{
    CommentPaginationEngine, InitialPagePlan, PageRequest, PaginationEvent, PaginationState, Phase,
};
pub use timeline::{LoaderHandle, LoaderId, LoaderState, Notice, Timeline, TimelineEntry, TimelineSink};
pub use widget::CommentWidget;
