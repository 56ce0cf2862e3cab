//! Inline error notices with remediation steps.

use crate::github::models::RepoConfig;

/// Where repository owners install the comment app.
pub const APP_INSTALL_URL: &str = "https://github.com/apps/utterances";

/// An error block rendered into the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The embedding origin is missing from the repo's allowed origins
    OriginNotPermitted {
        origin: String,
        owner: String,
        repo: String,
    },
    /// The comment app is not installed on the repository
    NotInstalled { owner: String, repo: String },
}

impl Notice {
    /// The configuration that would permit `origin`, as pretty-printed JSON.
    #[must_use]
    pub fn suggested_config(origin: &str) -> String {
        let config = RepoConfig {
            origins: vec![origin.to_string()],
        };
        serde_json::to_string_pretty(&config)
            .unwrap_or_else(|_| format!("{{\n  \"origins\": [\n    \"{origin}\"\n  ]\n}}"))
    }

    /// Link to edit the repository's configuration file on GitHub.
    #[must_use]
    pub fn config_edit_url(owner: &str, repo: &str) -> String {
        format!("https://github.com/{owner}/{repo}/edit/master/utterances.json")
    }

    /// HTML block for the timeline. Output depends only on the notice fields.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::OriginNotPermitted {
                origin,
                owner,
                repo,
            } => {
                let origin_html = escape_html(origin);
                let slug = escape_html(&format!("{owner}/{repo}"));
                format!(
                    "<div class=\"flash flash-error flash-not-installed\">\n  \
                     Error: <code>{origin_html}</code> is not permitted to post to <code>{slug}</code>.\n  \
                     Confirm this is the correct repo for this site's comments. If you own this repo,\n  \
                     <a href=\"{edit}\" target=\"_top\">\n    <strong>update the utterances.json</strong>\n  </a>\n  \
                     to include <code>{origin_html}</code> in the list of origins.<br/><br/>\n  \
                     Suggested configuration:<br/>\n  \
                     <pre><code>{config}</code></pre>\n</div>",
                    edit = escape_html(&Self::config_edit_url(owner, repo)),
                    config = escape_html(&Self::suggested_config(origin)),
                )
            }
            Self::NotInstalled { owner, repo } => {
                let slug = escape_html(&format!("{owner}/{repo}"));
                format!(
                    "<div class=\"flash flash-error\">\n  \
                     Error: utterances is not installed on <code>{slug}</code>.\n  \
                     If you own this repo,\n  \
                     <a href=\"{APP_INSTALL_URL}\" target=\"_top\"><strong>install the app</strong></a>.\n</div>"
                )
            }
        }
    }

    /// Plain-text rendering for terminal hosts.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::OriginNotPermitted {
                origin,
                owner,
                repo,
            } => format!(
                "Error: {origin} is not permitted to post to {owner}/{repo}.\n\
                 Confirm this is the correct repo for this site's comments. If you own this repo, \
                 update {edit} to include {origin} in the list of origins.\n\
                 Suggested configuration:\n{config}",
                edit = Self::config_edit_url(owner, repo),
                config = Self::suggested_config(origin),
            ),
            Self::NotInstalled { owner, repo } => format!(
                "Error: utterances is not installed on {owner}/{repo}. \
                 If you own this repo, install the app: {APP_INSTALL_URL}"
            ),
        }
    }
}

fn escape_html(raw: &str) -> String {
    v_htmlescape::escape(raw).to_string()
}
