//! "Load more" affordance.

use crate::github::models::CommentId;
use crate::timeline::{LoaderId, TimelineSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Waiting for the user to activate it
    Idle,
    /// A fetch is in flight; activation is disabled
    Busy,
}

/// A live page loader in the timeline.
///
/// Removing a loader consumes its handle, so whoever owns an
/// `Option<LoaderHandle>` owns at most one live loader.
#[derive(Debug)]
pub struct LoaderHandle {
    id: LoaderId,
    after: Option<CommentId>,
    hidden_count: u64,
    state: LoaderState,
}

impl LoaderHandle {
    /// Insert a loader after comment `after`, labelled with `hidden_count`.
    pub fn create<T: TimelineSink + ?Sized>(
        sink: &mut T,
        after: Option<CommentId>,
        hidden_count: u64,
    ) -> Self {
        let id = sink.insert_page_loader(after, hidden_count);
        Self {
            id,
            after,
            hidden_count,
            state: LoaderState::Idle,
        }
    }

    pub fn set_busy<T: TimelineSink + ?Sized>(&mut self, sink: &mut T) {
        if self.state != LoaderState::Busy {
            sink.set_loader_busy(self.id, true);
            self.state = LoaderState::Busy;
        }
    }

    /// Re-enable activation after a failed fetch.
    pub fn set_idle<T: TimelineSink + ?Sized>(&mut self, sink: &mut T) {
        if self.state != LoaderState::Idle {
            sink.set_loader_busy(self.id, false);
            self.state = LoaderState::Idle;
        }
    }

    pub fn remove<T: TimelineSink + ?Sized>(self, sink: &mut T) {
        sink.remove_loader(self.id);
    }

    #[must_use]
    pub fn id(&self) -> LoaderId {
        self.id
    }

    #[must_use]
    pub fn after(&self) -> Option<CommentId> {
        self.after
    }

    #[must_use]
    pub fn hidden_count(&self) -> u64 {
        self.hidden_count
    }

    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.state
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state == LoaderState::Busy
    }
}
