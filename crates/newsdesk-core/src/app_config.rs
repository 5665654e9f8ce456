/// Search string sent to the news API when none is configured.
pub const DEFAULT_NEWS_QUERY: &str = "markets OR stock OR economy OR finance OR rates";

/// Upper bound on articles fetched per run.
pub const MAX_ARTICLES_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub newsapi_key: Option<String>,
    /// Number of articles to fetch, in `1..=MAX_ARTICLES_LIMIT`.
    pub max_articles: usize,
    /// Serve the built-in demo articles instead of calling the news API
    /// when no key is configured.
    pub use_demo: bool,
    pub news_query: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "newsapi_key",
                &self.newsapi_key.as_ref().map(|_| "[redacted]"),
            )
            .field("max_articles", &self.max_articles)
            .field("use_demo", &self.use_demo)
            .field("news_query", &self.news_query)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
