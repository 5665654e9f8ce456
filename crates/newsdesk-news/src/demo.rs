//! Fixed demo dataset used when no live news source is available.

use newsdesk_sentiment::RawArticle;

fn article(title: &str, source: &str, published_at: &str, url: &str, content: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        source: Some(source.to_string()),
        published_at: Some(published_at.to_string()),
        url: Some(url.to_string()),
        content: Some(content.to_string()),
    }
}

/// Three representative Indian-market headlines: banking, IT and energy.
#[must_use]
pub fn demo_articles() -> Vec<RawArticle> {
    vec![
        article(
            "RBI keeps repo rate unchanged, signals careful stance",
            "Economic Times",
            "2025-10-05T10:00:00Z",
            "https://example.com/rbi-repo",
            "RBI maintained repo rate...",
        ),
        article(
            "Infosys reports 8% YoY revenue growth but lowers FY guidance",
            "Business Standard",
            "2025-10-04T09:00:00Z",
            "https://example.com/infosys-q2",
            "Infosys announced its quarterly results...",
        ),
        article(
            "Oil prices surge after OPEC announces cuts",
            "Reuters",
            "2025-10-03T08:00:00Z",
            "https://example.com/oil-opec",
            "Crude oil futures jumped...",
        ),
    ]
}
