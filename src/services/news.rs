//! News article normalisation and merging

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use crate::models::quotes::RawArticle;
use crate::models::report::NewsArticle;

pub const SUMMARY_MAX_CHARS: usize = 200;

pub const DEFAULT_NEWS_IMAGE: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800";

const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("Technology", "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800"),
    ("AI", "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800"),
    ("Cryptocurrency", "https://images.unsplash.com/photo-1518546305927-5a555bb7020d?w=800"),
    ("World Markets", "https://images.unsplash.com/photo-1611974765270-ca1258634369?w=800"),
    ("Business", "https://images.unsplash.com/photo-1507679799987-c73779587ccf?w=800"),
    ("India Markets", "https://images.unsplash.com/photo-1532375810709-75b1da00537c?w=800"),
    ("Science", "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=800"),
    ("Entertainment", "https://images.unsplash.com/photo-1574267432553-4b4628081c31?w=800"),
];

/// Stock image shown for a category when the feed carries none
pub fn fallback_image(category: &str) -> &'static str {
    CATEGORY_IMAGES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, image)| *image)
        .unwrap_or(DEFAULT_NEWS_IMAGE)
}

/// First `SUMMARY_MAX_CHARS` characters, never splitting a code point
pub fn truncate_summary(summary: &str) -> String {
    summary.trim().chars().take(SUMMARY_MAX_CHARS).collect()
}

/// Parse a feed timestamp (RFC 3339 or RFC 2822) into UTC
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Keep only absolute http(s) image URLs
pub fn valid_image(raw: Option<&str>) -> Option<String> {
    let parsed = Url::parse(raw?.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}

/// Normalise one raw headline. Unparsable timestamps become `fetched_at`.
pub fn normalize_article(category: &str, raw: RawArticle, fetched_at: DateTime<Utc>) -> NewsArticle {
    let published = raw
        .published
        .as_deref()
        .and_then(parse_published)
        .unwrap_or(fetched_at);

    let image = valid_image(raw.image.as_deref()).unwrap_or_else(|| fallback_image(category).to_string());

    let title = raw.title.trim();
    let link = raw.link.trim();
    let source = raw.source.trim();

    NewsArticle {
        title: if title.is_empty() { "No Title".to_string() } else { title.to_string() },
        link: if link.is_empty() { "#".to_string() } else { link.to_string() },
        source: if source.is_empty() { "Unknown".to_string() } else { source.to_string() },
        published: published.to_rfc3339_opts(SecondsFormat::Secs, true),
        summary: truncate_summary(&raw.summary),
        category: category.to_string(),
        image: Some(image),
    }
}

/// Normalise, sort newest first, drop repeated titles, cap at `limit`.
///
/// Titles compare case-insensitively; the newest copy of a story wins.
pub fn merge_articles(
    raw: Vec<(String, RawArticle)>,
    fetched_at: DateTime<Utc>,
    limit: usize,
) -> Vec<NewsArticle> {
    let mut articles: Vec<(DateTime<Utc>, NewsArticle)> = raw
        .into_iter()
        .map(|(category, article)| {
            let normalized = normalize_article(&category, article, fetched_at);
            let published = parse_published(&normalized.published).unwrap_or(fetched_at);
            (published, normalized)
        })
        .collect();

    articles.sort_by(|a, b| b.0.cmp(&a.0));

    let mut seen = HashSet::new();
    articles
        .into_iter()
        .map(|(_, article)| article)
        .filter(|article| seen.insert(article.title.to_lowercase()))
        .take(limit)
        .collect()
}
