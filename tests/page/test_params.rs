//! Tests for query-string decoding.

use kodegen_comment_widget::deparam;

#[test]
fn test_deparam_decodes_pairs() {
    let params = deparam("?repo=owner%2Fname&issue-term=hello+world&origin=https%3A%2F%2Fexample.com");
    assert_eq!(params.get("repo").map(String::as_str), Some("owner/name"));
    assert_eq!(params.get("issue-term").map(String::as_str), Some("hello world"));
    assert_eq!(
        params.get("origin").map(String::as_str),
        Some("https://example.com")
    );
}

#[test]
fn test_deparam_keeps_bare_keys_and_last_duplicate() {
    let params = deparam("flag&a=1&a=2&&empty=");
    assert_eq!(params.get("flag").map(String::as_str), Some(""));
    assert_eq!(params.get("a").map(String::as_str), Some("2"));
    assert_eq!(params.get("empty").map(String::as_str), Some(""));
    assert_eq!(params.len(), 3);
}

#[test]
fn test_deparam_empty_query() {
    assert!(deparam("").is_empty());
    assert!(deparam("?").is_empty());
}
