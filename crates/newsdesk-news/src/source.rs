//! Article acquisition policy: live NewsAPI fetch with demo-data fallback.

use newsdesk_core::{AppConfig, DEFAULT_NEWS_QUERY, MAX_ARTICLES_LIMIT};
use newsdesk_sentiment::RawArticle;

use crate::client::NewsApiClient;
use crate::demo::demo_articles;
use crate::error::NewsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrigin {
    Live,
    Demo,
}

impl std::fmt::Display for ArticleOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleOrigin::Live => write!(f, "live"),
            ArticleOrigin::Demo => write!(f, "demo"),
        }
    }
}

/// Articles for one analysis run, tagged with where they came from.
#[derive(Debug, Clone)]
pub struct Acquisition {
    pub articles: Vec<RawArticle>,
    pub origin: ArticleOrigin,
}

#[derive(Debug, Clone)]
pub struct AcquireOptions {
    pub api_key: Option<String>,
    /// Only consulted when `api_key` is `None`: serve demo data without
    /// attempting a fetch.
    pub use_demo: bool,
    pub query: String,
    pub max_articles: usize,
    pub timeout_secs: u64,
    /// Override for the NewsAPI base URL; `None` uses the public endpoint.
    pub base_url: Option<String>,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            use_demo: true,
            query: DEFAULT_NEWS_QUERY.to_string(),
            max_articles: 6,
            timeout_secs: 10,
            base_url: None,
        }
    }
}

impl AcquireOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.newsapi_key.clone(),
            use_demo: config.use_demo,
            query: config.news_query.clone(),
            max_articles: config.max_articles,
            timeout_secs: config.request_timeout_secs,
            base_url: None,
        }
    }
}

/// Collect the raw articles for one run.
///
/// Without an API key and with `use_demo` set, returns the demo set directly.
/// Otherwise fetches live; a missing key, a failed fetch, or an empty result
/// all fall back to the demo set with a warning. Never fails.
pub async fn acquire_articles(options: &AcquireOptions) -> Acquisition {
    let max_articles = options.max_articles.clamp(1, MAX_ARTICLES_LIMIT);

    let demo = || Acquisition {
        articles: demo_articles().into_iter().take(max_articles).collect(),
        origin: ArticleOrigin::Demo,
    };

    let Some(api_key) = options.api_key.as_deref() else {
        if !options.use_demo {
            tracing::warn!("no NewsAPI key configured; using demo data");
        }
        return demo();
    };

    match fetch_live(api_key, options, max_articles).await {
        Ok(articles) if !articles.is_empty() => {
            tracing::info!(count = articles.len(), origin = %ArticleOrigin::Live, "acquired articles");
            Acquisition {
                articles,
                origin: ArticleOrigin::Live,
            }
        }
        Ok(_) => {
            tracing::warn!(query = %options.query, "no articles found; using demo data");
            demo()
        }
        Err(e) => {
            tracing::warn!(error = %e, "NewsAPI fetch failed; using demo data");
            demo()
        }
    }
}

async fn fetch_live(
    api_key: &str,
    options: &AcquireOptions,
    max_articles: usize,
) -> Result<Vec<RawArticle>, NewsError> {
    let client = match options.base_url.as_deref() {
        Some(base) => NewsApiClient::with_base_url(api_key, options.timeout_secs, base)?,
        None => NewsApiClient::new(api_key, options.timeout_secs)?,
    };
    let mut articles = client.fetch_everything(&options.query, max_articles).await?;
    articles.truncate(max_articles);
    Ok(articles)
}
