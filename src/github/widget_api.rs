//! Comment-widget API client.
//!
//! The widget API owns the OAuth app: it exchanges the HTTP-only session
//! cookie for a token, serves the authorize redirect, and opens issues on
//! behalf of signed-in users.

use crate::auth::TokenSource;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::{Issue, NewIssue};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

const USER_AGENT: &str = concat!("kodegen-comment-widget/", env!("CARGO_PKG_VERSION"));

/// Client for the comment-widget API.
#[derive(Debug, Clone)]
pub struct UtterancesApi {
    base_url: String,
    http: Client,
}

/// Issue payload as returned by the issue-creation endpoint.
#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<CreatedIssue> for Issue {
    fn from(created: CreatedIssue) -> Self {
        Self {
            number: created.number,
            title: created.title,
            comments: created.comments,
            locked: created.locked,
            html_url: created.html_url,
        }
    }
}

impl UtterancesApi {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> GitHubResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL that starts the OAuth flow and returns the user to `redirect_uri`.
    #[must_use]
    pub fn login_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/authorize?redirect_uri={}",
            self.base_url,
            urlencoding::encode(redirect_uri)
        )
    }

    /// Open the backing issue for a page in `owner/repo`.
    ///
    /// # Errors
    ///
    /// [`GitHubError::NotInstalled`] when the API cannot act on the repo,
    /// [`GitHubError::AuthRequired`] when the token is rejected, and
    /// [`GitHubError::Api`] for any other non-success status.
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        token: &str,
        request: &NewIssue,
    ) -> GitHubResult<Issue> {
        let url = format!("{}/repos/{owner}/{repo}/issues", self.base_url);
        let mut payload = json!({ "title": request.term, "body": request.body() });
        if let Some(label) = request.label.as_deref().filter(|l| !l.is_empty()) {
            payload["label"] = json!(label);
        }
        debug!("Creating issue \"{}\" in {owner}/{repo}", request.term);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("token {token}"))
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<CreatedIssue>().await?.into()),
            StatusCode::NOT_FOUND => Err(GitHubError::NotInstalled {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GitHubError::AuthRequired),
            status => Err(GitHubError::Api(format!(
                "Error creating comments container: {status}"
            ))),
        }
    }
}

impl TokenSource for UtterancesApi {
    async fn fetch_token(&self) -> GitHubResult<Option<String>> {
        let url = format!("{}/token", self.base_url);
        let response = self.http.post(&url).send().await?;
        if !response.status().is_success() {
            debug!("Token exchange returned {}", response.status());
            return Ok(None);
        }
        let token: Option<String> = response.json().await?;
        Ok(token.filter(|t| !t.is_empty()))
    }
}
