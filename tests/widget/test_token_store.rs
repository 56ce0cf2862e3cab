//! Tests for session token storage.

use kodegen_comment_widget::{GitHubError, GitHubResult, TokenSource, TokenStore};
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingSource {
    token: Option<&'static str>,
    fail: bool,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(token: Option<&'static str>) -> Self {
        Self {
            token,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }
}

impl TokenSource for CountingSource {
    async fn fetch_token(&self) -> GitHubResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GitHubError::Api("token exchange down".to_string()));
        }
        Ok(self.token.map(str::to_string))
    }
}

#[tokio::test]
async fn test_fetched_token_is_cached() {
    let store = TokenStore::new();
    let source = CountingSource::new(Some("gho_1"));

    assert_eq!(store.load(&source).await.unwrap().as_deref(), Some("gho_1"));
    assert_eq!(store.load(&source).await.unwrap().as_deref(), Some("gho_1"));
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.get(), Some("gho_1"));
}

#[tokio::test]
async fn test_installed_token_skips_fetch() {
    let store = TokenStore::new();
    assert!(store.install("gho_host"));
    let source = CountingSource::new(Some("gho_1"));

    assert_eq!(
        store.load(&source).await.unwrap().as_deref(),
        Some("gho_host")
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_first_token_wins() {
    let store = TokenStore::new();
    assert!(store.install("first"));
    assert!(!store.install("second"));
    assert_eq!(store.get(), Some("first"));
}

#[tokio::test]
async fn test_missing_token_is_retried() {
    let store = TokenStore::new();
    let source = CountingSource::new(None);

    assert_eq!(store.load(&source).await.unwrap(), None);
    assert_eq!(store.load(&source).await.unwrap(), None);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_source_error_propagates() {
    let store = TokenStore::new();
    let source = CountingSource {
        fail: true,
        ..CountingSource::new(Some("gho_1"))
    };

    assert!(store.load(&source).await.is_err());
    assert_eq!(store.get(), None);
}
