//! Comment pagination engine.

use crate::error::{WidgetError, WidgetResult};
use crate::github::backend::CommentSource;
use crate::github::models::{CommentId, Issue, IssueComment};
use crate::pagination::plan::InitialPagePlan;
use crate::pagination::state::{PaginationEvent, PaginationState, Phase};
use crate::timeline::{LoaderHandle, TimelineSink};
use futures::future::try_join_all;
use log::{debug, warn};

/// Renders an issue's comments and lazily reveals the hidden middle.
///
/// Owns the pagination state and the single live loader for one thread.
/// `load_more` takes `&mut self`, so hidden-page fetches never overlap.
#[derive(Debug)]
pub struct CommentPaginationEngine {
    issue_number: u64,
    plan: InitialPagePlan,
    state: PaginationState,
    loader: Option<LoaderHandle>,
    anchor: Option<CommentId>,
}

impl CommentPaginationEngine {
    /// Fetch and render the eager pages, then place the loader if anything
    /// is still hidden.
    ///
    /// The eager pages are requested concurrently and rendered together in
    /// ascending page order once all of them have arrived.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Fetch`] if any eager page fails; nothing is
    /// rendered in that case.
    pub async fn start<S, T>(
        issue: &Issue,
        page_size: u32,
        growth_cap: u32,
        source: &S,
        sink: &mut T,
    ) -> WidgetResult<Self>
    where
        S: CommentSource,
        T: TimelineSink + ?Sized,
    {
        let plan = InitialPagePlan::new(issue.comments, page_size);
        debug!(
            "Issue #{}: {} comments in {} pages of {}, loading pages {:?}",
            issue.number,
            issue.comments,
            plan.page_count(),
            plan.page_size(),
            plan.pages()
        );

        let pages: Vec<Vec<IssueComment>> = try_join_all(
            plan.pages()
                .iter()
                .map(|&page| source.fetch_comments_page(issue.number, page, plan.page_size())),
        )
        .await?;

        for page in &pages {
            render_page(sink, page);
        }

        // The hidden comments sit right after page 1.
        let anchor = pages
            .first()
            .and_then(|page| page.last())
            .or_else(|| pages.iter().flatten().last())
            .map(|comment| comment.id);

        let state = PaginationState::new(plan.hidden_comments_count(), plan.page_size(), growth_cap);
        let mut engine = Self {
            issue_number: issue.number,
            plan,
            state,
            loader: None,
            anchor,
        };
        engine.place_loader(sink);
        Ok(engine)
    }

    /// Activate the loader: fetch the next hidden batch and render it.
    ///
    /// On success the loader is replaced by the batch and a fresh loader is
    /// placed after it while comments remain hidden. On failure nothing is
    /// rendered, the bookkeeping is unchanged and the loader becomes
    /// activatable again. Dropping the returned future before it completes
    /// counts as a failure.
    ///
    /// # Errors
    ///
    /// [`WidgetError::LoaderUnavailable`] when no loader is awaiting
    /// activation, [`WidgetError::Fetch`] when the page fetch fails.
    pub async fn load_more<S, T>(&mut self, source: &S, sink: &mut T) -> WidgetResult<Phase>
    where
        S: CommentSource,
        T: TimelineSink + ?Sized,
    {
        if !self.state.update(PaginationEvent::Activate) {
            return Err(WidgetError::LoaderUnavailable);
        }
        if let Some(loader) = self.loader.as_mut() {
            loader.set_busy(sink);
        }

        let request = self.state.next_request();
        debug!(
            "Issue #{}: loading hidden page {} at size {}",
            self.issue_number, request.page_index, request.page_size
        );

        let issue_number = self.issue_number;
        let mut pending = PendingFetch {
            engine: self,
            sink,
            armed: true,
        };
        let result = source
            .fetch_comments_page(issue_number, request.page_index, request.page_size)
            .await;

        match result {
            Ok(comments) => {
                pending.armed = false;
                Ok(pending.complete(&comments))
            }
            Err(e) => {
                warn!(
                    "Issue #{issue_number}: hidden page {} failed to load: {e}",
                    request.page_index
                );
                drop(pending);
                Err(WidgetError::Fetch(e))
            }
        }
    }

    #[must_use]
    pub fn issue_number(&self) -> u64 {
        self.issue_number
    }

    #[must_use]
    pub fn plan(&self) -> &InitialPagePlan {
        &self.plan
    }

    #[must_use]
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    #[must_use]
    pub fn loader(&self) -> Option<&LoaderHandle> {
        self.loader.as_ref()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    fn place_loader<T: TimelineSink + ?Sized>(&mut self, sink: &mut T) {
        if self.state.phase() != Phase::AwaitingActivation || self.loader.is_some() {
            return;
        }
        let hidden = u64::try_from(self.state.hidden_comments_count()).unwrap_or(0);
        self.loader = Some(LoaderHandle::create(sink, self.anchor, hidden));
    }
}

/// An in-flight hidden-page fetch. Unless disarmed, dropping it rolls the
/// engine back to `AwaitingActivation` and re-enables the loader.
struct PendingFetch<'a, T: TimelineSink + ?Sized> {
    engine: &'a mut CommentPaginationEngine,
    sink: &'a mut T,
    armed: bool,
}

impl<T: TimelineSink + ?Sized> PendingFetch<'_, T> {
    fn complete(&mut self, comments: &[IssueComment]) -> Phase {
        let engine = &mut *self.engine;
        let sink = &mut *self.sink;
        if let Some(loader) = engine.loader.take() {
            loader.remove(sink);
        }
        render_page(sink, comments);
        if let Some(last) = comments.last() {
            engine.anchor = Some(last.id);
        }
        engine.state.update(PaginationEvent::FetchSucceeded);
        engine.place_loader(sink);
        engine.state.phase()
    }
}

impl<T: TimelineSink + ?Sized> Drop for PendingFetch<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.engine.state.update(PaginationEvent::FetchFailed);
        if let Some(loader) = self.engine.loader.as_mut() {
            loader.set_idle(&mut *self.sink);
        }
    }
}

fn render_page<T: TimelineSink + ?Sized>(sink: &mut T, page: &[IssueComment]) {
    for comment in page {
        sink.insert_comment(comment, false);
    }
}
