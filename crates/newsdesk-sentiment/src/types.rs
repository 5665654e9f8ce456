use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseLabelError;

/// A news article as delivered by the acquisition layer.
///
/// Every field may be missing. Field names on the wire match what the
/// reporting surface expects (`publishedAt` is camel-cased).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in dashboard display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseLabelError;

    /// Labels are matched exactly (`"Positive"`, not `"positive"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "sentiment",
                label: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Hold,
    Sell,
}

impl Action {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Buy => "Buy",
            Action::Hold => "Hold",
            Action::Sell => "Sell",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`RawArticle`] enriched with the derived analysis fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(flatten)]
    pub article: RawArticle,
    /// At most two sentences extracted from the content snapshot.
    pub summary: String,
    pub sentiment: Sentiment,
    /// Heuristic score in `[0.0, 1.0]`, not a calibrated probability.
    pub confidence: f32,
    /// Sector label, or empty when no sector keyword matched.
    pub impact: String,
    pub action: Action,
}

/// Count of articles per sentiment label for one batch.
///
/// Always holds an entry for each of the three labels, so the counts sum to
/// the batch size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub counts: BTreeMap<Sentiment, usize>,
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self {
            counts: Sentiment::ALL.into_iter().map(|s| (s, 0)).collect(),
        }
    }
}

impl BatchSummary {
    /// Recompute the distribution from analyzed articles.
    #[must_use]
    pub fn from_articles(articles: &[AnalyzedArticle]) -> Self {
        let mut summary = Self::default();
        for article in articles {
            *summary.counts.entry(article.sentiment).or_insert(0) += 1;
        }
        summary
    }

    #[must_use]
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.counts.get(&sentiment).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(label, count)` pairs in display order: Positive, Neutral, Negative.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.into_iter().map(|s| (s, self.count(s)))
    }
}
