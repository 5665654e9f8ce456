//! Per-article analysis and batch aggregation.

use crate::action::decide_action;
use crate::classifier::{KeywordClassifier, SentimentClassifier};
use crate::impact::{ImpactTagger, KeywordImpactTagger};
use crate::summarizer::summarize;
use crate::types::{AnalyzedArticle, BatchSummary, RawArticle, Sentiment};

/// Number of characters of article text considered by the analysis steps.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Build the text snapshot an article is analyzed from.
///
/// Falls back `content` → `title` → empty string, treating an empty
/// `content` the same as a missing one, then keeps the first
/// [`MAX_CONTENT_CHARS`] characters.
#[must_use]
pub fn content_snapshot(article: &RawArticle) -> String {
    let text = [article.content.as_deref(), article.title.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or("");
    text.chars().take(MAX_CONTENT_CHARS).collect()
}

/// Runs summarizer, classifier, impact tagger and the action table over
/// articles.
///
/// The classifier and tagger are pluggable; [`Analyzer::default`] uses the
/// keyword rule tables.
pub struct Analyzer {
    classifier: Box<dyn SentimentClassifier>,
    tagger: Box<dyn ImpactTagger>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Box::new(KeywordClassifier), Box::new(KeywordImpactTagger))
    }
}

impl Analyzer {
    #[must_use]
    pub fn new(classifier: Box<dyn SentimentClassifier>, tagger: Box<dyn ImpactTagger>) -> Self {
        Self { classifier, tagger }
    }

    /// Analyze one article.
    ///
    /// Summary, sentiment and impact all read the same content snapshot; the
    /// action is derived only from the sentiment and confidence just computed.
    #[must_use]
    pub fn analyze(&self, article: &RawArticle) -> AnalyzedArticle {
        let content = content_snapshot(article);
        let summary = summarize(&content);
        let (sentiment, confidence) = self.classifier.classify(&content);
        let impact = self.tagger.tag_impact(&content);
        let action = decide_action(sentiment, confidence);

        AnalyzedArticle {
            article: article.clone(),
            summary,
            sentiment,
            confidence,
            impact,
            action,
        }
    }

    /// Analyze every article in input order and count the sentiment labels.
    #[must_use]
    pub fn analyze_batch(&self, articles: &[RawArticle]) -> (Vec<AnalyzedArticle>, BatchSummary) {
        let analyzed: Vec<AnalyzedArticle> = articles.iter().map(|a| self.analyze(a)).collect();
        let summary = BatchSummary::from_articles(&analyzed);

        tracing::debug!(
            articles = analyzed.len(),
            positive = summary.count(Sentiment::Positive),
            neutral = summary.count(Sentiment::Neutral),
            negative = summary.count(Sentiment::Negative),
            "analyzed batch"
        );

        (analyzed, summary)
    }
}

/// Analyze one article with the keyword classifier and tagger.
#[must_use]
pub fn analyze(article: &RawArticle) -> AnalyzedArticle {
    Analyzer::default().analyze(article)
}

/// Analyze a batch with the keyword classifier and tagger.
#[must_use]
pub fn analyze_batch(articles: &[RawArticle]) -> (Vec<AnalyzedArticle>, BatchSummary) {
    Analyzer::default().analyze_batch(articles)
}
