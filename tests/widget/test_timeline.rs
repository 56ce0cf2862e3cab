//! Tests for the in-memory timeline.

use crate::common::comment;
use kodegen_comment_widget::{Notice, Timeline, TimelineEntry, TimelineSink};

#[test]
fn test_comments_are_kept_in_creation_order() {
    let mut timeline = Timeline::new();
    for id in [5, 1, 3, 2, 4] {
        timeline.insert_comment(&comment(id), false);
    }
    assert_eq!(timeline.comment_ids(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_duplicate_comment_is_ignored() {
    let mut timeline = Timeline::new();
    timeline.insert_comment(&comment(1), false);
    timeline.insert_comment(&comment(1), false);
    timeline.insert_comment(&comment(1), true);
    assert_eq!(timeline.comment_count(), 1);
}

#[test]
fn test_loader_sits_after_its_anchor() {
    let mut timeline = Timeline::new();
    timeline.insert_comment(&comment(1), false);
    timeline.insert_comment(&comment(10), false);
    let loader = timeline.insert_page_loader(Some(1), 8);

    assert_eq!(timeline.loader_position(), Some(1));
    assert_eq!(timeline.loaders(), vec![(loader, 8, false)]);

    // hidden comments land between the anchor and the tail
    timeline.insert_comment(&comment(5), false);
    assert_eq!(timeline.comment_ids(), vec![1, 5, 10]);

    timeline.set_loader_busy(loader, true);
    assert_eq!(timeline.loaders(), vec![(loader, 8, true)]);
    timeline.remove_loader(loader);
    assert!(timeline.loaders().is_empty());
}

#[test]
fn test_loader_without_anchor_goes_last() {
    let mut timeline = Timeline::new();
    timeline.insert_comment(&comment(1), false);
    timeline.insert_page_loader(None, 3);
    assert_eq!(timeline.loader_position(), Some(1));
}

#[test]
fn test_new_comments_and_notices_are_appended() {
    let mut timeline = Timeline::new();
    timeline.insert_comment(&comment(50), false);
    timeline.insert_comment(&comment(2), true);
    timeline.insert_notice(&Notice::NotInstalled {
        owner: "octo".to_string(),
        repo: "site".to_string(),
    });

    assert_eq!(timeline.comment_ids(), vec![50, 2]);
    assert!(matches!(
        timeline.entries().last(),
        Some(TimelineEntry::Notice(_))
    ));
    assert_eq!(timeline.notices().len(), 1);
}

#[test]
fn test_render_text() {
    let mut timeline = Timeline::new();
    timeline.insert_comment(&comment(1), false);
    let loader = timeline.insert_page_loader(Some(1), 40);
    timeline.request_remeasure();

    let text = timeline.render_text();
    assert!(text.contains("comment 1"));
    assert!(text.contains("40 hidden items. Load more"));
    assert_eq!(timeline.remeasure_requests(), 1);

    timeline.set_loader_busy(loader, true);
    assert!(timeline.render_text().contains("Loading"));
}
