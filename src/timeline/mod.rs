//! Timeline rendering capability
//!
//! The widget core never touches a view technology directly. It drives a
//! [`TimelineSink`] that inserts comments, page loaders and notices and can
//! ask the host to re-measure the frame. [`Timeline`] is an in-memory sink
//! with a plain-text rendering.

pub mod loader;
pub mod memory;
pub mod notice;

pub use loader::{LoaderHandle, LoaderState};
pub use memory::{Timeline, TimelineEntry};
pub use notice::Notice;

use crate::github::models::{CommentId, IssueComment};

/// Identifier handed out for an inserted page loader.
pub type LoaderId = u64;

/// View collaborator the widget core renders into.
pub trait TimelineSink {
    /// Insert a comment; `is_new` marks one the user just posted.
    fn insert_comment(&mut self, comment: &IssueComment, is_new: bool);

    /// Insert a "load more" affordance right after comment `after`, or at
    /// the end of the comments when there is no anchor.
    fn insert_page_loader(&mut self, after: Option<CommentId>, hidden_count: u64) -> LoaderId;

    fn set_loader_busy(&mut self, loader: LoaderId, busy: bool);

    fn remove_loader(&mut self, loader: LoaderId);

    fn insert_notice(&mut self, notice: &Notice);

    /// Ask the host page to re-measure the widget's height.
    fn request_remeasure(&mut self);
}
