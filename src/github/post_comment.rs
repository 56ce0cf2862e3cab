//! Comment creation.

use crate::github::error::GitHubError;
use crate::github::models::IssueComment;
use crate::github::util::spawn_task;
use crate::runtime::ApiTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Add a comment to an existing issue as the signed-in user.
pub(crate) fn post_comment(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
    body: impl Into<String>,
) -> ApiTask<IssueComment> {
    let owner = owner.into();
    let repo = repo.into();
    let body = body.into();
    spawn_task(async move {
        let comment = inner
            .issues(&owner, &repo)
            .create_comment(issue_number, body)
            .await
            .map_err(GitHubError::from)?;
        Ok(IssueComment::from(comment))
    })
}
