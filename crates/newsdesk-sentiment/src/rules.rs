//! Ordered keyword rule tables shared by the classifier and the impact tagger.

/// One row of a keyword rule table.
///
/// A rule fires when the lower-cased text contains any of its keywords as a
/// substring ("lowering" fires on "lower").
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Evaluate every rule in table order and return the outcome of the last one
/// that fired. Later rows take priority over earlier rows.
pub(crate) fn last_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .rev()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.outcome)
}
