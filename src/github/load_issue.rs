//! Backing issue lookup, by number or by title term.

use crate::github::error::GitHubError;
use crate::github::models::Issue;
use crate::github::util::{is_not_found, spawn_task};
use crate::runtime::ApiTask;
use log::warn;
use octocrab::{Octocrab, Page};
use std::sync::Arc;

/// Get an issue by number; `None` when it does not exist.
pub(crate) fn load_issue_by_number(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
) -> ApiTask<Option<Issue>> {
    let owner = owner.into();
    let repo = repo.into();
    spawn_task(async move {
        match inner.issues(&owner, &repo).get(issue_number).await {
            Ok(issue) => Ok(Some(Issue::from(issue))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(GitHubError::from(e)),
        }
    })
}

/// Find the issue whose title contains `term` (case-insensitive).
///
/// Searches the repository's issue titles oldest first and returns the first
/// hit whose title really contains the term, since the search API also
/// matches on stemmed words.
pub(crate) fn load_issue_by_term(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    term: impl Into<String>,
) -> ApiTask<Option<Issue>> {
    let owner = owner.into();
    let repo = repo.into();
    let term = term.into();
    spawn_task(async move {
        let query = format!(
            "\"{}\" type:issue in:title repo:{owner}/{repo}",
            term.replace('"', "")
        );
        let page: Page<octocrab::models::issues::Issue> = inner
            .search()
            .issues_and_pull_requests(&query)
            .sort("created")
            .order("asc")
            .send()
            .await
            .map_err(GitHubError::from)?;

        if page.items.is_empty() {
            return Ok(None);
        }
        if page.items.len() > 1 {
            warn!("Issues search for \"{term}\" returned {} results", page.items.len());
        }

        let needle = term.to_lowercase();
        let found = page
            .items
            .into_iter()
            .find(|issue| issue.title.to_lowercase().contains(&needle))
            .map(Issue::from);
        if found.is_none() {
            warn!("Issues search for \"{term}\" found no title containing the term");
        }
        Ok(found)
    })
}
