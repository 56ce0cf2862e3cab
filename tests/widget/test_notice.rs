//! Tests for inline notices and issue bodies.

use kodegen_comment_widget::{NewIssue, Notice, RepoConfig};

fn refused() -> Notice {
    Notice::OriginNotPermitted {
        origin: "https://blog.example".to_string(),
        owner: "octo".to_string(),
        repo: "site".to_string(),
    }
}

fn escaped(raw: &str) -> String {
    v_htmlescape::escape(raw).to_string()
}

#[test]
fn test_origin_notice_html_names_origin_and_repo() {
    let html = refused().to_html();
    assert!(html.contains(&format!(
        "<code>{}</code> is not permitted to post to <code>{}</code>",
        escaped("https://blog.example"),
        escaped("octo/site")
    )));
    assert!(html.contains(&escaped(
        "https://github.com/octo/site/edit/master/utterances.json"
    )));
    assert!(html.contains(&escaped(&Notice::suggested_config("https://blog.example"))));
    assert!(html.contains("&quot;origins&quot;"));
}

#[test]
fn test_notice_html_is_deterministic() {
    assert_eq!(refused().to_html(), refused().to_html());
}

#[test]
fn test_notice_html_escapes_markup() {
    let notice = Notice::OriginNotPermitted {
        origin: "https://x.example/<script>".to_string(),
        owner: "octo".to_string(),
        repo: "site".to_string(),
    };
    let html = notice.to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_notice_html_escapes_quotes() {
    let notice = Notice::OriginNotPermitted {
        origin: "https://x.example\" onmouseover=\"alert('hi')".to_string(),
        owner: "octo".to_string(),
        repo: "site".to_string(),
    };
    let html = notice.to_html();
    assert!(!html.contains("\" onmouseover"));
    assert!(!html.contains("'hi'"));
    assert!(html.contains("&quot; onmouseover=&quot;"));
}

#[test]
fn test_suggested_config_parses_back() {
    let json = Notice::suggested_config("https://blog.example");
    let config: RepoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config.origins, vec!["https://blog.example".to_string()]);
    assert!(config.permits("https://blog.example"));
}

#[test]
fn test_repo_config_defaults_to_no_origins() {
    let config: RepoConfig = serde_json::from_str("{}").unwrap();
    assert!(config.origins.is_empty());
    assert!(!config.permits("https://blog.example"));
}

#[test]
fn test_not_installed_notice_links_app() {
    let notice = Notice::NotInstalled {
        owner: "octo".to_string(),
        repo: "site".to_string(),
    };
    assert!(notice.to_html().contains("https://github.com/apps/utterances"));
    assert!(notice.to_text().contains("octo/site"));
}

#[test]
fn test_new_issue_body() {
    let request = NewIssue {
        term: "/posts/1".to_string(),
        url: Some("https://blog.example/posts/1".to_string()),
        page_title: Some("First post".to_string()),
        description: Some("An introduction".to_string()),
        label: None,
    };
    assert_eq!(
        request.body(),
        "# First post\n\nAn introduction\n\n[https://blog.example/posts/1](https://blog.example/posts/1)"
    );

    let bare = NewIssue {
        term: "/posts/1".to_string(),
        url: None,
        page_title: Some("First post".to_string()),
        description: None,
        label: None,
    };
    assert_eq!(bare.body(), "# First post");
}
