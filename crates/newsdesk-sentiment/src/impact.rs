//! Sector impact tagging.

use crate::rules::{last_match, KeywordRule};

pub const BANKING_IMPACT: &str = "Banking & Financials";
pub const ENERGY_IMPACT: &str = "Energy";

/// Impact rules in priority order: later rows override earlier rows.
pub(crate) const IMPACT_RULES: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["bank", "rbi"],
        outcome: BANKING_IMPACT,
    },
    KeywordRule {
        keywords: &["oil", "opec"],
        outcome: ENERGY_IMPACT,
    },
];

/// Assigns a coarse sector label to article text.
pub trait ImpactTagger: Send + Sync {
    fn tag_impact(&self, content: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordImpactTagger;

impl ImpactTagger for KeywordImpactTagger {
    fn tag_impact(&self, content: &str) -> String {
        tag_impact(content)
    }
}

/// Tag text with [`IMPACT_RULES`]; empty string when no sector matched.
#[must_use]
pub fn tag_impact(content: &str) -> String {
    last_match(IMPACT_RULES, content)
        .unwrap_or_default()
        .to_string()
}
