//! Naive extractive summarizer.

/// Maximum number of sentences kept in a summary.
pub const SUMMARY_SENTENCES: usize = 2;

/// Reduce text to its first two sentences.
///
/// Every `.` is a sentence boundary, including ones inside abbreviations and
/// decimals. Segments are trimmed, empty ones dropped, and the survivors are
/// rejoined with `". "` plus a closing `.`. Returns an empty string when no
/// segment survives.
#[must_use]
pub fn summarize(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect();

    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}
