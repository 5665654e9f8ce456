//! Keyword-based sentiment classifier for financial headlines.

use crate::rules::{last_match, KeywordRule};
use crate::types::Sentiment;

/// Confidence assigned when no sentiment keyword matched.
pub const DEFAULT_CONFIDENCE: f32 = 0.6;

/// Confidence assigned when a sentiment keyword matched.
pub const MATCH_CONFIDENCE: f32 = 0.8;

/// Sentiment rules in priority order: later rows override earlier rows.
///
/// Negative is listed last, so text that contains both a positive and a
/// negative term ("profit surged but oil dropped") classifies as Negative.
pub(crate) const SENTIMENT_RULES: &[KeywordRule<(Sentiment, f32)>] = &[
    KeywordRule {
        keywords: &["rise", "surge", "beat", "gain", "profit", "positive"],
        outcome: (Sentiment::Positive, MATCH_CONFIDENCE),
    },
    KeywordRule {
        keywords: &["cut", "lower", "decline", "drop", "loss", "weak", "negative"],
        outcome: (Sentiment::Negative, MATCH_CONFIDENCE),
    },
];

/// Assigns a sentiment label and confidence to article text.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, content: &str) -> (Sentiment, f32);
}

/// The rule-table classifier used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl SentimentClassifier for KeywordClassifier {
    fn classify(&self, content: &str) -> (Sentiment, f32) {
        classify(content)
    }
}

/// Classify text with [`SENTIMENT_RULES`].
///
/// Matching is case-insensitive substring containment. Returns
/// `(Neutral, 0.6)` when nothing matches, including for empty text.
#[must_use]
pub fn classify(content: &str) -> (Sentiment, f32) {
    last_match(SENTIMENT_RULES, content).unwrap_or((Sentiment::Neutral, DEFAULT_CONFIDENCE))
}
