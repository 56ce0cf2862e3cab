//! Widget configuration

/// Default comment-widget API (token exchange, authorize, issue creation).
pub const DEFAULT_API_BASE_URL: &str = "https://api.utteranc.es";

/// Largest comment page the GitHub API serves (`per_page`).
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration for the widget core and its GitHub backend
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_base_url: String,
    pub github_base_uri: Option<String>,
    pub default_page_size: u32,
    pub max_growth_page_size: u32,
    pub default_theme: String,
    pub repo_config_path: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            github_base_uri: None, // api.github.com
            default_page_size: 25,
            max_growth_page_size: 16, // lazy batches stop doubling here
            default_theme: "light".to_string(),
            repo_config_path: "utterances.json".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Defaults overridden by `UTTERANCES_API` and `GITHUB_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api) = std::env::var("UTTERANCES_API")
            && !api.trim().is_empty()
        {
            config.api_base_url = api.trim().trim_end_matches('/').to_string();
        }
        if let Ok(uri) = std::env::var("GITHUB_API_URL")
            && !uri.trim().is_empty()
        {
            config.github_base_uri = Some(uri.trim().to_string());
        }
        config
    }
}
