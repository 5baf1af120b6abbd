use crate::domain::model::{as_text, Article, ImageField, Slice};
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

const EXCERPT_LENGTH: usize = 300;

/// View of one article as the article list shows it.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub href: Option<String>,
    pub date: Option<String>,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

impl ArticleSummary {
    pub fn from_article(article: &Article) -> Self {
        let image = featured_image(article);
        Self {
            id: article.id.clone(),
            title: as_text(&article.data.title),
            href: article.uid.as_ref().map(|uid| format!("/articles/{}", uid)),
            date: publication_date(article).map(format_date),
            excerpt: excerpt(&article.data.slices),
            image_url: image.and_then(|img| img.url.clone()),
            image_alt: image.and_then(|img| img.alt.clone()),
        }
    }
}

/// Image of the first image slice, if that image is filled.
pub fn find_first_image(slices: &[Slice]) -> Option<&ImageField> {
    slices
        .iter()
        .find_map(|slice| match slice {
            Slice::Image { primary } => Some(&primary.image),
            _ => None,
        })
        .filter(|image| image.is_filled())
}

pub fn featured_image(article: &Article) -> Option<&ImageField> {
    if article.data.featured_image.is_filled() {
        Some(&article.data.featured_image)
    } else {
        find_first_image(&article.data.slices)
    }
}

/// `publishDate` when set, else the first publication timestamp.
pub fn publication_date(article: &Article) -> Option<NaiveDate> {
    if let Some(date) = article.data.publish_date.as_deref() {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Some(parsed);
        }
        tracing::warn!("Article {} has unparseable publishDate '{}'", article.id, date);
    }

    let timestamp = article.first_publication_date.as_deref()?;
    DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(timestamp))
        .map(|dt| dt.date_naive())
        .ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn excerpt(slices: &[Slice]) -> String {
    let text = slices
        .iter()
        .filter_map(|slice| match slice {
            Slice::Text { primary } => Some(as_text(&primary.text)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    if text.chars().count() <= EXCERPT_LENGTH {
        return text;
    }

    let head: String = text.chars().take(EXCERPT_LENGTH).collect();
    match head.rfind(' ') {
        Some(cut) => format!("{}…", &head[..cut]),
        None => "…".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ArticleData, Document};
    use serde_json::json;

    fn article(data: serde_json::Value, first_publication_date: Option<&str>) -> Article {
        Document {
            id: "art1".to_string(),
            uid: Some("hello-world".to_string()),
            document_type: "article".to_string(),
            first_publication_date: first_publication_date.map(str::to_string),
            last_publication_date: None,
            lang: None,
            data: serde_json::from_value::<ArticleData>(data).unwrap(),
        }
    }

    fn text_slice(text: &str) -> serde_json::Value {
        json!({"slice_type": "text", "primary": {"text": [{"type": "paragraph", "text": text, "spans": []}]}})
    }

    fn image_slice(url: Option<&str>) -> serde_json::Value {
        match url {
            Some(url) => {
                json!({"slice_type": "image", "primary": {"image": {"url": url, "alt": "pic"}}})
            }
            None => json!({"slice_type": "image", "primary": {"image": {}}}),
        }
    }

    #[test]
    fn test_short_excerpt_is_untouched() {
        let a = article(json!({"slices": [text_slice("Hello"), text_slice("there")]}), None);
        assert_eq!(excerpt(&a.data.slices), "Hello there");
    }

    #[test]
    fn test_long_excerpt_cuts_at_last_space() {
        let long = "word ".repeat(80);
        let a = article(json!({"slices": [text_slice(&long)]}), None);

        let result = excerpt(&a.data.slices);

        assert!(result.ends_with('…'));
        let body = result.trim_end_matches('…');
        assert!(body.chars().count() < 300);
        assert!(body.ends_with("word"));
    }

    #[test]
    fn test_long_excerpt_without_spaces() {
        let long = "x".repeat(301);
        let a = article(json!({"slices": [text_slice(&long)]}), None);
        assert_eq!(excerpt(&a.data.slices), "…");
    }

    #[test]
    fn test_excerpt_ignores_non_text_slices() {
        let a = article(
            json!({"slices": [image_slice(Some("https://images.example/a.png")), text_slice("Only text")]}),
            None,
        );
        assert_eq!(excerpt(&a.data.slices), "Only text");
    }

    #[test]
    fn test_featured_image_prefers_field() {
        let a = article(
            json!({
                "featuredImage": {"url": "https://images.example/featured.png"},
                "slices": [image_slice(Some("https://images.example/slice.png"))]
            }),
            None,
        );
        assert_eq!(
            featured_image(&a).and_then(|i| i.url.as_deref()),
            Some("https://images.example/featured.png")
        );
    }

    #[test]
    fn test_featured_image_falls_back_to_first_image_slice() {
        let a = article(
            json!({"slices": [image_slice(Some("https://images.example/slice.png"))]}),
            None,
        );
        assert_eq!(
            featured_image(&a).and_then(|i| i.url.as_deref()),
            Some("https://images.example/slice.png")
        );
    }

    #[test]
    fn test_only_first_image_slice_is_considered() {
        let a = article(
            json!({"slices": [image_slice(None), image_slice(Some("https://images.example/second.png"))]}),
            None,
        );
        assert!(featured_image(&a).is_none());
    }

    #[test]
    fn test_publication_date_prefers_publish_date() {
        let a = article(
            json!({"publishDate": "2024-01-05"}),
            Some("2023-06-01T08:00:00+0000"),
        );
        assert_eq!(publication_date(&a).map(format_date).as_deref(), Some("Jan 5, 2024"));
    }

    #[test]
    fn test_publication_date_falls_back_to_first_publication() {
        let a = article(json!({}), Some("2023-06-01T08:00:00+0000"));
        assert_eq!(publication_date(&a).map(format_date).as_deref(), Some("Jun 1, 2023"));
    }

    #[test]
    fn test_summary() {
        let a = article(
            json!({
                "title": [{"type": "heading1", "text": "Hello world", "spans": []}],
                "publishDate": "2024-03-10",
                "slices": [text_slice("Intro")]
            }),
            None,
        );

        let summary = ArticleSummary::from_article(&a);

        assert_eq!(summary.title, "Hello world");
        assert_eq!(summary.href.as_deref(), Some("/articles/hello-world"));
        assert_eq!(summary.date.as_deref(), Some("Mar 10, 2024"));
        assert_eq!(summary.excerpt, "Intro");
        assert!(summary.image_url.is_none());
    }
}
