//! Lazy-loading state machine.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hidden comments remain and the loader can be activated
    AwaitingActivation,
    /// A hidden page is being fetched
    Fetching,
    /// Every comment is shown
    Done,
}

/// Events that drive [`PaginationState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    /// The user activated the loader
    Activate,
    /// The requested page arrived and was rendered
    FetchSucceeded,
    /// The requested page could not be fetched
    FetchFailed,
}

/// The next hidden page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_index: u32,
    pub page_size: u32,
}

/// Bookkeeping for the hidden middle of a thread.
///
/// Lazy fetches start at backend page 2 with the configured page size. While
/// the batch size is below the growth cap, each successful fetch doubles it
/// and keeps the page index: page 2 at size `2s` starts at offset `2s`, which
/// is exactly where page 2 at size `s` ended. Once the cap is reached the
/// size is frozen and the index advances by one per fetch.
///
/// The hidden count is decremented by the nominal batch size, so it can end
/// below zero; anything at or below zero means done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    hidden_comments_count: i64,
    next_hidden_page_index: u32,
    dynamic_page_size: u32,
    growth_cap: u32,
    phase: Phase,
}

impl PaginationState {
    #[must_use]
    pub fn new(hidden_comments_count: i64, page_size: u32, growth_cap: u32) -> Self {
        Self {
            hidden_comments_count,
            next_hidden_page_index: 2,
            dynamic_page_size: page_size.max(1),
            growth_cap,
            phase: if hidden_comments_count > 0 {
                Phase::AwaitingActivation
            } else {
                Phase::Done
            },
        }
    }

    #[must_use]
    pub fn hidden_comments_count(&self) -> i64 {
        self.hidden_comments_count
    }

    #[must_use]
    pub fn next_hidden_page_index(&self) -> u32 {
        self.next_hidden_page_index
    }

    #[must_use]
    pub fn dynamic_page_size(&self) -> u32 {
        self.dynamic_page_size
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The page the next activation fetches.
    #[must_use]
    pub fn next_request(&self) -> PageRequest {
        PageRequest {
            page_index: self.next_hidden_page_index,
            page_size: self.dynamic_page_size,
        }
    }

    /// Apply an event. Returns `false`, leaving the state untouched, when the
    /// event is not valid in the current phase.
    pub fn update(&mut self, event: PaginationEvent) -> bool {
        match (self.phase, event) {
            (Phase::AwaitingActivation, PaginationEvent::Activate) => {
                self.phase = Phase::Fetching;
                true
            }
            (Phase::Fetching, PaginationEvent::FetchSucceeded) => {
                self.hidden_comments_count -= i64::from(self.dynamic_page_size);
                if self.dynamic_page_size < self.growth_cap {
                    self.dynamic_page_size = self.dynamic_page_size.saturating_mul(2);
                } else {
                    self.next_hidden_page_index = self.next_hidden_page_index.saturating_add(1);
                }
                self.phase = if self.hidden_comments_count > 0 {
                    Phase::AwaitingActivation
                } else {
                    Phase::Done
                };
                debug!(
                    "Hidden comments left: {}, next page {} at size {}",
                    self.hidden_comments_count, self.next_hidden_page_index, self.dynamic_page_size
                );
                true
            }
            (Phase::Fetching, PaginationEvent::FetchFailed) => {
                self.phase = Phase::AwaitingActivation;
                true
            }
            _ => false,
        }
    }
}
