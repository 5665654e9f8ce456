//! Article analysis core for newsdesk.
//!
//! Takes raw news articles, truncates and summarizes their text, classifies
//! sentiment with a keyword rule table, tags a coarse sector impact, and maps
//! sentiment + confidence to a recommended trading action. Batches are
//! aggregated into a per-label sentiment distribution.
//!
//! Every operation here is total: absent fields degrade to defaults, nothing
//! returns an error.

pub mod action;
pub mod classifier;
pub mod error;
pub mod impact;
pub mod pipeline;
pub mod summarizer;
pub mod types;

mod rules;

pub use action::{decide_action, decide_action_label, ACTION_CONFIDENCE_THRESHOLD};
pub use classifier::{classify, KeywordClassifier, SentimentClassifier};
pub use error::ParseLabelError;
pub use impact::{tag_impact, ImpactTagger, KeywordImpactTagger};
pub use pipeline::{analyze, analyze_batch, content_snapshot, Analyzer, MAX_CONTENT_CHARS};
pub use summarizer::summarize;
pub use types::{Action, AnalyzedArticle, BatchSummary, RawArticle, Sentiment};
