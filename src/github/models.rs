//! Issue tracker entities as seen by the widget.
//!
//! These are deliberately narrow views of the octocrab models: the widget
//! only needs a handful of fields, and test backends can build them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a rendered comment, used to anchor page loaders.
pub type CommentId = u64;

/// The issue backing a page's comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub comments: u64,
    pub locked: bool,
    pub html_url: Option<String>,
}

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            comments: u64::from(issue.comments),
            locked: issue.locked,
            html_url: Some(issue.html_url.to_string()),
        }
    }
}

/// A single comment on the backing issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub html_url: Option<String>,
}

impl From<octocrab::models::issues::Comment> for IssueComment {
    fn from(comment: octocrab::models::issues::Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            author: comment.user.login,
            body: comment.body.unwrap_or_default(),
            created_at: comment.created_at,
            html_url: Some(comment.html_url.to_string()),
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
}

impl From<octocrab::models::Author> for User {
    fn from(author: octocrab::models::Author) -> Self {
        Self {
            login: author.login,
            avatar_url: author.avatar_url.to_string(),
        }
    }
}

/// Per-repository widget configuration (`utterances.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    #[serde(default)]
    pub origins: Vec<String>,
}

impl RepoConfig {
    #[must_use]
    pub fn permits(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }
}

/// Everything needed to open the backing issue on first comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub term: String,
    pub url: Option<String>,
    pub page_title: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
}

impl NewIssue {
    /// Issue body: page title heading, description, then a link back to the page.
    #[must_use]
    pub fn body(&self) -> String {
        let mut body = String::new();
        if let Some(title) = self.page_title.as_deref().filter(|t| !t.is_empty()) {
            body.push_str(&format!("# {title}\n\n"));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            body.push_str(description);
            body.push_str("\n\n");
        }
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            body.push_str(&format!("[{url}]({url})"));
        }
        body.trim_end().to_string()
    }
}
