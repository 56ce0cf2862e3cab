//! One page of an issue's comments.

use crate::config::MAX_PAGE_SIZE;
use crate::github::error::GitHubError;
use crate::github::models::IssueComment;
use crate::github::util::spawn_task;
use crate::runtime::ApiTask;
use log::{debug, warn};
use octocrab::{Octocrab, Page, models::issues::Comment};
use std::sync::Arc;

/// Fetch page `page_index` (1-based) of an issue's comments at `page_size`.
pub(crate) fn load_comments_page(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
    page_index: u32,
    page_size: u32,
) -> ApiTask<Vec<IssueComment>> {
    let owner = owner.into();
    let repo = repo.into();
    spawn_task(async move {
        if page_index == 0 || page_size == 0 {
            return Err(GitHubError::InvalidInput(format!(
                "comment page {page_index} of size {page_size} does not exist"
            )));
        }
        let per_page = if page_size > MAX_PAGE_SIZE {
            warn!("Comment page size {page_size} exceeds API maximum, clamping to {MAX_PAGE_SIZE}");
            MAX_PAGE_SIZE
        } else {
            page_size
        };
        debug!("Loading comments of #{issue_number}: page {page_index}, size {per_page}");

        let page: Page<Comment> = inner
            .issues(&owner, &repo)
            .list_comments(issue_number)
            .page(page_index)
            .per_page(u8::try_from(per_page).unwrap_or(u8::MAX))
            .send()
            .await
            .map_err(GitHubError::from)?;

        Ok(page.items.into_iter().map(IssueComment::from).collect())
    })
}
