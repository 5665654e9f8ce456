//! Text renderers for analyzed batches. All functions return the rendered
//! text; printing is left to the caller.

use std::fmt::{self, Write as _};

use chrono::{DateTime, Utc};
use serde::Serialize;

use newsdesk_sentiment::{AnalyzedArticle, BatchSummary};

/// Width in characters of the longest bar in the sentiment chart.
const BAR_WIDTH: usize = 30;

/// Format an article timestamp for display.
///
/// RFC 3339 timestamps are normalised to UTC minutes; anything else is shown
/// as-is, and a missing value shows as `unknown`.
pub(crate) fn format_published(raw: Option<&str>) -> String {
    match raw {
        None => "unknown".to_string(),
        Some(s) => DateTime::parse_from_rfc3339(s).map_or_else(
            |_| s.to_string(),
            |dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

/// One block per article, separated by horizontal rules.
pub(crate) fn render_list(articles: &[AnalyzedArticle]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for a in articles {
        let raw = &a.article;
        writeln!(out, "---")?;
        writeln!(out, "## {}", or_dash(raw.title.as_deref()))?;
        writeln!(
            out,
            "Source: {}  •  Published: {}",
            or_dash(raw.source.as_deref()),
            format_published(raw.published_at.as_deref())
        )?;
        writeln!(out, "Summary: {}", a.summary)?;
        writeln!(
            out,
            "Sentiment: {}  •  Confidence: {:.1}",
            a.sentiment, a.confidence
        )?;
        writeln!(out, "Impact: {}", a.impact)?;
        writeln!(out, "Action: {}", a.action)?;
        if let Some(url) = raw.url.as_deref() {
            writeln!(out, "Read original: {url}")?;
        }
    }
    Ok(out)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Markdown table with one row per article.
pub(crate) fn render_table(articles: &[AnalyzedArticle]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "| Title | Source | Published | Sentiment | Confidence | Impact | Action |"
    )?;
    writeln!(
        out,
        "|-------|--------|-----------|-----------|------------|--------|--------|"
    )?;
    for a in articles {
        let raw = &a.article;
        writeln!(
            out,
            "| {} | {} | {} | {} | {:.1} | {} | {} |",
            escape_cell(or_dash(raw.title.as_deref())),
            escape_cell(or_dash(raw.source.as_deref())),
            format_published(raw.published_at.as_deref()),
            a.sentiment,
            a.confidence,
            escape_cell(or_dash(Some(a.impact.as_str()))),
            a.action
        )?;
    }
    Ok(out)
}

/// Sentiment count table followed by a horizontal bar chart.
pub(crate) fn render_summary(summary: &BatchSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Sentiment Dashboard")?;
    writeln!(out)?;
    writeln!(out, "| Sentiment | Count |")?;
    writeln!(out, "|-----------|-------|")?;
    for (sentiment, count) in summary.iter() {
        writeln!(out, "| {sentiment} | {count} |")?;
    }
    writeln!(out)?;

    let max = summary.iter().map(|(_, n)| n).max().unwrap_or(0).max(1);
    for (sentiment, count) in summary.iter() {
        let bar = "█".repeat(count * BAR_WIDTH / max);
        writeln!(out, "{:<9} {bar} {count}", sentiment.as_str())?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    articles: &'a [AnalyzedArticle],
    summary: &'a BatchSummary,
}

/// Pretty-printed `{ "articles": [...], "summary": {...} }`.
pub(crate) fn render_json(
    articles: &[AnalyzedArticle],
    summary: &BatchSummary,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { articles, summary })
}
