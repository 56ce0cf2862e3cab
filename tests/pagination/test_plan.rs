//! Tests for eager page selection.

use kodegen_comment_widget::InitialPagePlan;

#[test]
fn test_single_page_fetches_only_first() {
    let plan = InitialPagePlan::new(20, 25);
    assert_eq!(plan.page_count(), 1);
    assert_eq!(plan.pages(), &[1]);
    assert_eq!(plan.hidden_comments_count(), 0);
}

#[test]
fn test_two_pages_fetch_first_and_last() {
    let plan = InitialPagePlan::new(30, 25);
    assert_eq!(plan.page_count(), 2);
    assert_eq!(plan.pages(), &[1, 2]);
    assert_eq!(plan.hidden_comments_count(), 0);
}

#[test]
fn test_small_tail_pulls_penultimate_page() {
    // 60 % 25 = 10, at most half a page
    let plan = InitialPagePlan::new(60, 25);
    assert_eq!(plan.page_count(), 3);
    assert_eq!(plan.pages(), &[1, 2, 3]);
    assert_eq!(plan.hidden_comments_count(), 0);
}

#[test]
fn test_full_tail_skips_penultimate_page() {
    let plan = InitialPagePlan::new(200, 25);
    assert_eq!(plan.page_count(), 8);
    assert_eq!(plan.pages(), &[1, 8]);
    assert_eq!(plan.hidden_comments_count(), 150);
}

#[test]
fn test_large_partial_tail_skips_penultimate_page() {
    // 90 % 25 = 15 > 12.5
    let plan = InitialPagePlan::new(90, 25);
    assert_eq!(plan.pages(), &[1, 4]);
    assert_eq!(plan.hidden_comments_count(), 50);
}

#[test]
fn test_tail_exactly_half_counts_as_small() {
    assert!(InitialPagePlan::tail_is_small(110, 20));
    assert!(!InitialPagePlan::tail_is_small(111, 20));
    assert!(!InitialPagePlan::tail_is_small(100, 20));
    // 12 <= 12.5 for an odd page size
    assert!(InitialPagePlan::tail_is_small(62, 25));
    assert!(!InitialPagePlan::tail_is_small(63, 25));
}

#[test]
fn test_plan_rule_holds_across_inputs() {
    for size in 1..=30u32 {
        for count in 1..=200u64 {
            let plan = InitialPagePlan::new(count, size);
            let page_count = count.div_ceil(u64::from(size)) as u32;
            let remainder = count % u64::from(size);
            let small_tail = remainder != 0 && remainder as f64 <= f64::from(size) / 2.0;

            let mut expected = vec![1];
            if page_count > 2 && small_tail {
                expected.push(page_count - 1);
            }
            if page_count > 1 {
                expected.push(page_count);
            }

            assert_eq!(plan.page_count(), page_count, "N={count} S={size}");
            assert_eq!(plan.pages(), expected.as_slice(), "N={count} S={size}");
            assert_eq!(
                plan.hidden_comments_count(),
                (i64::from(page_count) - expected.len() as i64) * i64::from(size)
            );
        }
    }
}

#[test]
fn test_empty_thread_fetches_nothing() {
    let plan = InitialPagePlan::new(0, 25);
    assert_eq!(plan.page_count(), 0);
    assert!(plan.pages().is_empty());
    assert_eq!(plan.hidden_comments_count(), 0);
}
