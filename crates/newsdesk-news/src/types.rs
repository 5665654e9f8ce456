//! NewsAPI response types.
//!
//! Only the fields newsdesk reads are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use newsdesk_sentiment::RawArticle;

/// Envelope returned by `/v2/everything`.
///
/// On failure the API sets `status` to `"error"` and fills `code`/`message`
/// instead of `articles`.
#[derive(Debug, Deserialize)]
pub struct EverythingResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    #[serde(default)]
    pub source: Option<NewsApiSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<NewsApiArticle> for RawArticle {
    /// Lift `source.name` to the source label and use the description when
    /// the API truncated `content` away. Missing text becomes an empty string
    /// so the analyzer falls back to the title.
    fn from(a: NewsApiArticle) -> Self {
        let content = [a.content, a.description]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default();

        RawArticle {
            title: a.title,
            source: a.source.and_then(|s| s.name),
            published_at: a.published_at,
            url: a.url,
            content: Some(content),
        }
    }
}
