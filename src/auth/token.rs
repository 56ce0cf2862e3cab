//! Session token storage.

use crate::github::error::GitHubResult;
use log::debug;
use tokio::sync::OnceCell;

/// Something that can hand out a user token, e.g. the widget API's cookie exchange.
#[allow(async_fn_in_trait)]
pub trait TokenSource {
    /// Fetch a token, or `None` when the user has not authorized the app.
    async fn fetch_token(&self) -> GitHubResult<Option<String>>;
}

/// Write-once, read-through token cache for one page session.
///
/// The first token stored wins, whether installed by the host page or
/// fetched from a [`TokenSource`]; later reads never fetch again.
#[derive(Debug, Default)]
pub struct TokenStore {
    cell: OnceCell<String>,
}

impl TokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token supplied by the host page.
    ///
    /// Returns `false` when a token was already stored; the old one is kept.
    pub fn install(&self, token: impl Into<String>) -> bool {
        self.cell.set(token.into()).is_ok()
    }

    /// The cached token, if any.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.cell.get().map(String::as_str)
    }

    /// Return the cached token, fetching it from `source` on first use.
    ///
    /// A fetch that yields no token is not cached, so a later call may try again.
    ///
    /// # Errors
    ///
    /// Propagates the source's error.
    pub async fn load<S: TokenSource>(&self, source: &S) -> GitHubResult<Option<String>> {
        if let Some(token) = self.cell.get() {
            return Ok(Some(token.clone()));
        }
        match source.fetch_token().await? {
            Some(token) => {
                debug!("Token obtained from token source");
                let _ = self.cell.set(token);
                Ok(self.cell.get().cloned())
            }
            None => Ok(None),
        }
    }
}
