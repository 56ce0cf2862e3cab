//! Origin authorization for writes.
//!
//! A repository lists the origins allowed to post through the widget in its
//! configuration file. Every write is preceded by [`OriginGate::assert_origin`];
//! a refused origin gets an inline notice explaining how to fix the
//! configuration, and the write never starts.

use crate::error::{WidgetError, WidgetResult};
use crate::github::backend::RepoConfigSource;
use crate::timeline::{Notice, TimelineSink};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// Checks that the embedding origin may write to `owner/repo`.
///
/// A successful check is remembered; a refusal is not, so the next write
/// checks again.
#[derive(Debug)]
pub struct OriginGate {
    origin: String,
    owner: String,
    repo: String,
    permitted: AtomicBool,
}

impl OriginGate {
    #[must_use]
    pub fn new(origin: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            owner: owner.into(),
            repo: repo.into(),
            permitted: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether a previous check already succeeded.
    #[must_use]
    pub fn is_permitted(&self) -> bool {
        self.permitted.load(Ordering::Relaxed)
    }

    /// Succeed silently when the origin is listed in the repo configuration.
    ///
    /// # Errors
    ///
    /// [`WidgetError::OriginNotPermitted`] after rendering one remediation
    /// notice and requesting a re-measure; [`WidgetError::Fetch`] when the
    /// configuration cannot be read (nothing is rendered then).
    pub async fn assert_origin<S, T>(&self, source: &S, sink: &mut T) -> WidgetResult<()>
    where
        S: RepoConfigSource,
        T: TimelineSink + ?Sized,
    {
        if self.is_permitted() {
            return Ok(());
        }

        let config = source.fetch_repo_config(&self.owner, &self.repo).await?;
        if config.permits(&self.origin) {
            debug!("Origin {} permitted for {}/{}", self.origin, self.owner, self.repo);
            self.permitted.store(true, Ordering::Relaxed);
            return Ok(());
        }

        warn!(
            "Origin {} is not permitted to post to {}/{}",
            self.origin, self.owner, self.repo
        );
        sink.insert_notice(&Notice::OriginNotPermitted {
            origin: self.origin.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        });
        sink.request_remeasure();
        Err(WidgetError::OriginNotPermitted {
            origin: self.origin.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        })
    }
}
