//! Comment pagination
//!
//! Threads are shown in two stages. On load, the first page and the tail of
//! the thread are fetched together ([`InitialPagePlan`]). The comments in
//! between stay hidden behind a single "load more" affordance and are
//! fetched on demand in batches that grow while they are small
//! ([`PaginationState`]). [`CommentPaginationEngine`] drives both stages
//! against a [`CommentSource`](crate::github::CommentSource) and a
//! [`TimelineSink`](crate::timeline::TimelineSink).

pub mod engine;
pub mod plan;
pub mod state;

pub use engine::CommentPaginationEngine;
pub use plan::InitialPagePlan;
pub use state::{PageRequest, PaginationEvent, PaginationState, Phase};
