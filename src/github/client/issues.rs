//! Issues API methods

use super::GitHubClient;
use crate::github::models::{Issue, IssueComment};
use crate::runtime::ApiTask;

impl GitHubClient {
    /// Get a single issue, `None` when it does not exist
    pub fn load_issue_by_number(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> ApiTask<Option<Issue>> {
        crate::github::load_issue::load_issue_by_number(
            self.inner.clone(),
            owner,
            repo,
            issue_number,
        )
    }

    /// Find the issue whose title contains `term`
    pub fn load_issue_by_term(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        term: impl Into<String>,
    ) -> ApiTask<Option<Issue>> {
        crate::github::load_issue::load_issue_by_term(self.inner.clone(), owner, repo, term)
    }

    /// Get one page of an issue's comments
    pub fn load_comments_page(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        page_index: u32,
        page_size: u32,
    ) -> ApiTask<Vec<IssueComment>> {
        crate::github::load_comments_page::load_comments_page(
            self.inner.clone(),
            owner,
            repo,
            issue_number,
            page_index,
            page_size,
        )
    }

    /// Add a comment to an issue
    pub fn post_comment(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        body: impl Into<String>,
    ) -> ApiTask<IssueComment> {
        crate::github::post_comment::post_comment(
            self.inner.clone(),
            owner,
            repo,
            issue_number,
            body,
        )
    }
}
