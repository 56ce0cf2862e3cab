//! `owner/repo` slug parsing.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref REPO_RE: Result<Regex, regex::Error> =
        Regex::new(r"^([A-Za-z0-9_-]+)/([A-Za-z0-9_.-]+)$");
}

/// A repository identity parsed from `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse a raw `owner/repo` string.
    ///
    /// Returns `None` when the input does not match the GitHub slug grammar
    /// (ASCII word characters and `-` for the owner, plus `.` for the repo).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let re = REPO_RE.as_ref().ok()?;
        let caps = re.captures(raw)?;
        Some(Self {
            owner: caps.get(1)?.as_str().to_string(),
            repo: caps.get(2)?.as_str().to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
