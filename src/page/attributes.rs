//! Page attribute resolution.

use crate::auth::TokenStore;
use crate::config::{MAX_PAGE_SIZE, WidgetConfig};
use crate::error::ConfigError;
use crate::page::params::deparam;
use crate::page::repo::RepoSlug;
use std::collections::HashMap;

/// Theme id that follows the host's light/dark preference.
pub const PREFERRED_THEME_ID: &str = "preferred-color-scheme";

/// `issue-term` values that name another parameter holding the real term.
const TERM_SYNONYMS: [&str; 4] = ["title", "url", "pathname", "og:title"];

/// Which backend issue holds a page's comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadIdentity {
    /// Issue found by searching for a term in issue titles
    Term(String),
    /// Issue addressed directly by number
    Number(u64),
}

/// Validated configuration of the embedding page.
///
/// Resolved once per page load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAttributes {
    pub owner: String,
    pub repo: String,
    pub thread: ThreadIdentity,
    pub origin: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    pub theme: String,
    pub size: u32,
}

impl PageAttributes {
    /// Resolve page attributes from decoded URL parameters.
    ///
    /// A non-empty `token` parameter is installed into `tokens` so hosts
    /// that already hold a token skip the cookie exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid or missing
    /// parameter. Nothing is installed into `tokens` on failure.
    pub fn resolve(
        params: &HashMap<String, String>,
        tokens: &TokenStore,
        config: &WidgetConfig,
    ) -> Result<Self, ConfigError> {
        let thread = resolve_thread(params)?;

        let raw_repo = params.get("repo").ok_or(ConfigError::MissingRepo)?;
        let origin = params.get("origin").ok_or(ConfigError::MissingOrigin)?;
        let slug =
            RepoSlug::parse(raw_repo).ok_or_else(|| ConfigError::InvalidRepo(raw_repo.clone()))?;

        if let Some(token) = non_empty(params, "token") {
            tokens.install(token);
        }

        Ok(Self {
            owner: slug.owner,
            repo: slug.repo,
            thread,
            origin: origin.clone(),
            url: params.get("url").cloned(),
            title: params.get("title").cloned(),
            description: params.get("description").cloned(),
            label: params.get("label").cloned(),
            theme: non_empty(params, "theme").unwrap_or_else(|| config.default_theme.clone()),
            size: parse_page_size(params.get("size").map(String::as_str))
                .unwrap_or(config.default_page_size)
                .min(MAX_PAGE_SIZE),
        })
    }

    /// Decode `query` and resolve it.
    ///
    /// # Errors
    ///
    /// See [`PageAttributes::resolve`].
    pub fn from_query(
        query: &str,
        tokens: &TokenStore,
        config: &WidgetConfig,
    ) -> Result<Self, ConfigError> {
        Self::resolve(&deparam(query), tokens, config)
    }

    #[must_use]
    pub fn issue_term(&self) -> Option<&str> {
        match &self.thread {
            ThreadIdentity::Term(term) => Some(term),
            ThreadIdentity::Number(_) => None,
        }
    }

    #[must_use]
    pub fn issue_number(&self) -> Option<u64> {
        match self.thread {
            ThreadIdentity::Number(number) => Some(number),
            ThreadIdentity::Term(_) => None,
        }
    }

    /// The theme to load, with the preferred-scheme id mapped to a concrete theme.
    #[must_use]
    pub fn effective_theme(&self, prefers_dark: bool) -> &str {
        if self.theme != PREFERRED_THEME_ID {
            return &self.theme;
        }
        if prefers_dark { "dark" } else { "light" }
    }
}

fn resolve_thread(params: &HashMap<String, String>) -> Result<ThreadIdentity, ConfigError> {
    if let Some(term) = params.get("issue-term") {
        if term.is_empty() {
            return Err(ConfigError::BlankIssueTerm);
        }
        if TERM_SYNONYMS.contains(&term.as_str()) {
            return non_empty(params, term)
                .map(ThreadIdentity::Term)
                .ok_or_else(|| ConfigError::MissingMetadata(term.clone()));
        }
        return Ok(ThreadIdentity::Term(term.clone()));
    }

    if let Some(raw) = params.get("issue-number") {
        // Canonical base-10 only: the parsed value must print back identically.
        return match raw.parse::<u64>() {
            Ok(number) if number.to_string() == *raw => Ok(ThreadIdentity::Number(number)),
            _ => Err(ConfigError::InvalidIssueNumber(raw.clone())),
        };
    }

    Err(ConfigError::MissingThreadIdentity)
}

fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}

/// `round(abs(x))`, or `None` when that is zero or not a finite number.
///
/// The caller caps the result at [`MAX_PAGE_SIZE`] so page math and fetches
/// agree on the page unit.
fn parse_page_size(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<f64>().ok()?;
    let rounded = value.abs().round();
    if !rounded.is_finite() || rounded < 1.0 || rounded > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(rounded as u32)
}
