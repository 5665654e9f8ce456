//! Sentiment → trading action decision table.

use crate::types::{Action, Sentiment};

/// Confidence at or above which a directional sentiment becomes a trade.
pub const ACTION_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Map a sentiment and its confidence to a recommended action.
///
/// | sentiment | confidence ≥ 0.7 | confidence < 0.7 |
/// |-----------|------------------|------------------|
/// | Positive  | Buy              | Hold             |
/// | Neutral   | Hold             | Hold             |
/// | Negative  | Sell             | Hold             |
#[must_use]
pub fn decide_action(sentiment: Sentiment, confidence: f32) -> Action {
    let confident = confidence >= ACTION_CONFIDENCE_THRESHOLD;
    match sentiment {
        Sentiment::Positive if confident => Action::Buy,
        Sentiment::Negative if confident => Action::Sell,
        Sentiment::Positive | Sentiment::Neutral | Sentiment::Negative => Action::Hold,
    }
}

/// Same table keyed by a textual label; any unrecognized label yields `Hold`.
#[must_use]
pub fn decide_action_label(label: &str, confidence: f32) -> Action {
    label
        .parse::<Sentiment>()
        .map_or(Action::Hold, |sentiment| decide_action(sentiment, confidence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_decision_table() {
        let cases = [
            (Sentiment::Positive, 0.8, Action::Buy),
            (Sentiment::Positive, 0.6, Action::Hold),
            (Sentiment::Neutral, 0.8, Action::Hold),
            (Sentiment::Neutral, 0.6, Action::Hold),
            (Sentiment::Negative, 0.8, Action::Sell),
            (Sentiment::Negative, 0.6, Action::Hold),
        ];
        for (sentiment, confidence, expected) in cases {
            assert_eq!(
                decide_action(sentiment, confidence),
                expected,
                "{sentiment} @ {confidence}"
            );
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(decide_action(Sentiment::Positive, 0.7), Action::Buy);
        assert_eq!(decide_action(Sentiment::Negative, 0.7), Action::Sell);
        assert_eq!(decide_action(Sentiment::Negative, 0.699), Action::Hold);
    }

    #[test]
    fn extreme_confidences() {
        assert_eq!(decide_action(Sentiment::Positive, 1.0), Action::Buy);
        assert_eq!(decide_action(Sentiment::Negative, 0.0), Action::Hold);
    }

    #[test]
    fn label_entry_point_matches_table() {
        assert_eq!(decide_action_label("Positive", 0.8), Action::Buy);
        assert_eq!(decide_action_label("Negative", 0.8), Action::Sell);
        assert_eq!(decide_action_label("Neutral", 0.9), Action::Hold);
    }

    #[test]
    fn unrecognized_label_holds() {
        assert_eq!(decide_action_label("Bullish", 0.99), Action::Hold);
        assert_eq!(decide_action_label("", 0.99), Action::Hold);
        assert_eq!(decide_action_label("positive", 0.99), Action::Hold);
    }
}
