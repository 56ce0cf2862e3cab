//! Tests for widget bootstrap, lazy loading and posting.

use crate::common::MockBackend;
use kodegen_comment_widget::{
    CommentWidget, GitHubError, Notice, PageAttributes, ThreadIdentity, Timeline, TimelineEntry,
    WidgetConfig, WidgetError,
};
use std::sync::atomic::Ordering;

fn page(thread: ThreadIdentity, origin: &str) -> PageAttributes {
    PageAttributes {
        owner: "owner".to_string(),
        repo: "name".to_string(),
        thread,
        origin: origin.to_string(),
        url: Some("https://example.com/hello".to_string()),
        title: Some("Hello".to_string()),
        description: Some("A greeting".to_string()),
        label: Some("comments".to_string()),
        theme: "light".to_string(),
        size: 25,
    }
}

fn term_page() -> PageAttributes {
    page(ThreadIdentity::Term("hello".to_string()), "https://example.com")
}

async fn bootstrap(
    page: PageAttributes,
    backend: MockBackend,
) -> CommentWidget<MockBackend, Timeline> {
    CommentWidget::bootstrap(page, backend, Timeline::new(), WidgetConfig::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_bootstrap_renders_first_and_last_pages() {
    let widget = bootstrap(term_page(), MockBackend::with_comments(200)).await;

    assert_eq!(widget.issue().map(|issue| issue.number), Some(7));
    assert_eq!(widget.user().map(|user| user.login.as_str()), Some("octocat"));
    assert!(widget.has_hidden_comments());
    assert_eq!(widget.timeline().comment_count(), 50);
    assert_eq!(widget.timeline().remeasure_requests(), 1);
}

#[tokio::test]
async fn test_bootstrap_without_issue_renders_nothing() {
    let widget = bootstrap(term_page(), MockBackend::without_issue()).await;

    assert!(widget.issue().is_none());
    assert!(widget.engine().is_none());
    assert!(!widget.has_hidden_comments());
    assert!(widget.timeline().entries().is_empty());
}

#[tokio::test]
async fn test_load_more_reveals_everything() {
    let mut widget = bootstrap(term_page(), MockBackend::with_comments(120)).await;

    while widget.has_hidden_comments() {
        widget.load_more().await.unwrap();
    }

    assert_eq!(
        widget.timeline().comment_ids(),
        (1..=120).collect::<Vec<_>>()
    );
    assert!(widget.timeline().loaders().is_empty());
    assert!(matches!(
        widget.load_more().await,
        Err(WidgetError::LoaderUnavailable)
    ));
}

#[tokio::test]
async fn test_load_more_without_comments_is_unavailable() {
    let mut widget = bootstrap(term_page(), MockBackend::with_comments(0)).await;
    assert!(matches!(
        widget.load_more().await,
        Err(WidgetError::LoaderUnavailable)
    ));
}

#[tokio::test]
async fn test_submit_posts_to_existing_issue() {
    let mut widget = bootstrap(term_page(), MockBackend::with_comments(3)).await;

    let posted = widget.submit("Nice post!").await.unwrap();

    assert_eq!(posted.body, "Nice post!");
    assert_eq!(widget.issue().map(|issue| issue.comments), Some(4));
    assert!(matches!(
        widget.timeline().entries().last(),
        Some(TimelineEntry::Comment { is_new: true, .. })
    ));
    let timeline = widget.into_timeline();
    assert_eq!(timeline.comment_ids(), vec![1, 2, 3, 10_000]);
}

#[tokio::test]
async fn test_submit_creates_missing_issue_first() {
    let mut widget = bootstrap(term_page(), MockBackend::without_issue()).await;

    widget.submit("First!").await.unwrap();

    assert_eq!(widget.issue().map(|issue| issue.number), Some(99));
    let backend_created = widget_backend_created(&widget);
    assert_eq!(backend_created.len(), 1);
    assert_eq!(backend_created[0].term, "hello");
    assert_eq!(backend_created[0].label.as_deref(), Some("comments"));
    assert_eq!(backend_created[0].page_title.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn test_submit_with_missing_numbered_issue_fails() {
    let backend = MockBackend::without_issue();
    let mut widget = bootstrap(
        page(ThreadIdentity::Number(5), "https://example.com"),
        backend,
    )
    .await;

    let result = widget.submit("hello?").await;

    assert!(matches!(
        result,
        Err(WidgetError::Fetch(GitHubError::NotFound(_)))
    ));
    assert!(widget_backend_created(&widget).is_empty());
}

#[tokio::test]
async fn test_submit_refused_origin_writes_nothing() {
    let mut widget = bootstrap(
        page(
            ThreadIdentity::Term("hello".to_string()),
            "https://evil.example",
        ),
        MockBackend::without_issue(),
    )
    .await;

    let result = widget.submit("spam").await;

    assert!(matches!(
        result,
        Err(WidgetError::OriginNotPermitted { .. })
    ));
    assert!(widget_backend_created(&widget).is_empty());
    assert_eq!(
        widget.timeline().notices(),
        vec![&Notice::OriginNotPermitted {
            origin: "https://evil.example".to_string(),
            owner: "owner".to_string(),
            repo: "name".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_submit_on_locked_issue_is_refused() {
    let mut backend = MockBackend::with_comments(2);
    if let Some(issue) = backend.issue.as_mut() {
        issue.locked = true;
    }
    let mut widget = bootstrap(term_page(), backend).await;
    assert!(widget.is_locked());

    let result = widget.submit("let me in").await;

    assert!(matches!(result, Err(WidgetError::IssueLocked(7))));
    assert_eq!(widget.timeline().comment_count(), 2);
    assert_eq!(widget_config_fetches(&widget), 0);
    assert!(widget.backend().posted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_not_installed_is_reported_once() {
    let backend = MockBackend::without_issue();
    *backend.create_error.lock().unwrap() = Some(GitHubError::NotInstalled {
        owner: "owner".to_string(),
        repo: "name".to_string(),
    });
    let mut widget = bootstrap(term_page(), backend).await;

    let result = widget.submit("hi").await;
    assert!(matches!(
        result,
        Err(WidgetError::Fetch(GitHubError::NotInstalled { .. }))
    ));
    widget.report_not_installed();

    assert_eq!(
        widget.timeline().notices(),
        vec![&Notice::NotInstalled {
            owner: "owner".to_string(),
            repo: "name".to_string(),
        }]
    );
}

fn widget_backend_created(
    widget: &CommentWidget<MockBackend, Timeline>,
) -> Vec<kodegen_comment_widget::NewIssue> {
    widget.backend().created.lock().unwrap().clone()
}

fn widget_config_fetches(widget: &CommentWidget<MockBackend, Timeline>) -> usize {
    widget.backend().config_fetches.load(Ordering::SeqCst)
}
