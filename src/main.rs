// Terminal host for the comment widget.
//
// Takes the same query string a host page would pass to the widget frame,
// boots the widget against GitHub and prints the rendered timeline.
//
//   kodegen-comments 'repo=owner/name&issue-number=1&origin=https://example.com' [--all]
//
// `--all` keeps activating the loader until every comment is shown.
// GITHUB_TOKEN, when set, is used instead of the widget API's cookie exchange
// unless the query string carries its own `token`.

use anyhow::{Context, Result, bail};
use kodegen_comment_widget::{
    CommentWidget, GitHubBackend, PageAttributes, Timeline, TokenStore, WidgetConfig,
};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut query = None;
    let mut load_all = false;
    for arg in std::env::args().skip(1) {
        if arg == "--all" {
            load_all = true;
        } else if query.is_none() {
            query = Some(arg);
        } else {
            bail!("unexpected argument: {arg}");
        }
    }
    let Some(query) = query else {
        bail!("usage: kodegen-comments <query-string> [--all]");
    };

    let config = WidgetConfig::from_env();
    let tokens = TokenStore::new();
    let page = PageAttributes::from_query(&query, &tokens, &config)
        .context("Invalid widget parameters")?;
    // a `token` query parameter, installed by from_query, takes precedence
    if let Ok(token) = std::env::var("GITHUB_TOKEN")
        && !token.is_empty()
        && !tokens.install(token)
    {
        info!("Using the token from the query string, GITHUB_TOKEN ignored");
    }
    let backend = GitHubBackend::connect(&page.owner, &page.repo, &tokens, &config)
        .await
        .context("Failed to connect to GitHub")?;

    let mut widget = CommentWidget::bootstrap(page, backend, Timeline::new(), config)
        .await
        .context("Failed to load comments")?;

    if load_all {
        while widget.has_hidden_comments() {
            let phase = widget.load_more().await.context("Failed to load hidden comments")?;
            info!("Loaded hidden comments, now {phase:?}");
        }
    }

    println!("{}", widget.timeline().render_text());
    Ok(())
}
