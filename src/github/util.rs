//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::runtime::ApiTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
///
/// Thin wrapper around [`ApiTask::spawn`] so every operation module spawns
/// the same way.
#[inline]
pub fn spawn_task<T, F>(work: F) -> ApiTask<T>
where
    T: Send + 'static,
    F: Future<Output = GitHubResult<T>> + Send + 'static,
{
    ApiTask::spawn(work)
}

/// Whether an octocrab error is a 404 from the API.
#[must_use]
pub fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(error, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}
