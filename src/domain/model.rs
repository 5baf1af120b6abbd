use serde::{Deserialize, Serialize};

/// Envelope shared by every document the content API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type")]
    pub document_type: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    pub data: T,
}

pub type RawDocument = Document<serde_json::Value>;

impl RawDocument {
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> serde_json::Result<Document<T>> {
        Ok(Document {
            data: serde_json::from_value(self.data)?,
            id: self.id,
            uid: self.uid,
            document_type: self.document_type,
            first_publication_date: self.first_publication_date,
            last_publication_date: self.last_publication_date,
            lang: self.lang,
        })
    }
}

/// Link field. An empty link is `{"link_type": "Any"}` and carries no id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkField {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default, rename = "type")]
    pub document_type: Option<String>,
    #[serde(default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "isBroken")]
    pub is_broken: bool,
}

impl LinkField {
    pub fn document_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn resolve_url(&self) -> Option<String> {
        if self.is_broken {
            return None;
        }
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        let uid = self.uid.as_deref()?;
        match self.document_type.as_deref() {
            Some("article") => Some(format!("/articles/{}", uid)),
            _ => Some(format!("/{}", uid)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<serde_json::Value>,
}

pub type RichText = Vec<RichTextBlock>;

pub fn as_text(field: &[RichTextBlock]) -> String {
    field
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageField {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub dimensions: Option<ImageDimensions>,
}

impl ImageField {
    pub fn is_filled(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssortimentData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: LinkField,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub assortiment: LinkField,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextPrimary {
    #[serde(default)]
    pub text: RichText,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagePrimary {
    #[serde(default)]
    pub image: ImageField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "slice_type", rename_all = "snake_case")]
pub enum Slice {
    Text {
        #[serde(default)]
        primary: TextPrimary,
    },
    Image {
        #[serde(default)]
        primary: ImagePrimary,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleData {
    #[serde(default)]
    pub title: RichText,
    #[serde(default, rename = "publishDate")]
    pub publish_date: Option<String>,
    #[serde(default, rename = "featuredImage")]
    pub featured_image: ImageField,
    #[serde(default)]
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationLink {
    #[serde(default)]
    pub label: RichText,
    #[serde(default)]
    pub link: LinkField,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationData {
    #[serde(default)]
    pub links: Vec<NavigationLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default)]
    pub name: RichText,
    #[serde(default)]
    pub description: RichText,
}

pub type Category = Document<CategoryData>;
pub type Assortiment = Document<AssortimentData>;
pub type Product = Document<ProductData>;
pub type Article = Document<ArticleData>;
pub type Navigation = Document<NavigationData>;
pub type Settings = Document<SettingsData>;

impl Category {
    pub fn name(&self) -> &str {
        self.data.name.as_deref().unwrap_or_default()
    }
}

impl Assortiment {
    pub fn name(&self) -> &str {
        self.data.name.as_deref().unwrap_or_default()
    }

    pub fn category_id(&self) -> Option<&str> {
        self.data.category.document_id()
    }
}

impl Product {
    pub fn name(&self) -> &str {
        self.data.name.as_deref().unwrap_or_default()
    }

    pub fn assortiment_id(&self) -> Option<&str> {
        self.data.assortiment.document_id()
    }
}

/// Everything fetched for one render of the page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub assortiments: Vec<Assortiment>,
    pub products: Vec<Product>,
    pub navigation: Navigation,
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssortimentOverviewItem<'a> {
    pub title: &'a str,
    pub products: Vec<&'a Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOverview<'a> {
    pub category: &'a Category,
    pub items: Vec<AssortimentOverviewItem<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogAssortiment {
    pub title: String,
    pub products: Vec<CatalogProduct>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    pub assortiments: Vec<CatalogAssortiment>,
}

/// Result of the transform phase, ready to be written out.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub html: String,
    pub catalog: Vec<CatalogCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_assortiment_document() {
        let raw: RawDocument = serde_json::from_value(json!({
            "id": "a1",
            "uid": null,
            "type": "assortiment",
            "first_publication_date": "2022-03-01T10:00:00+0000",
            "last_publication_date": "2022-03-02T10:00:00+0000",
            "lang": "nl-nl",
            "data": {
                "name": "Beer",
                "category": {"id": "c1", "type": "category", "link_type": "Document", "isBroken": false}
            }
        }))
        .unwrap();

        let assortiment: Assortiment = raw.decode().unwrap();
        assert_eq!(assortiment.name(), "Beer");
        assert_eq!(assortiment.category_id(), Some("c1"));
    }

    #[test]
    fn test_empty_link_has_no_id() {
        let data: ProductData = serde_json::from_value(json!({
            "name": "Loose item",
            "assortiment": {"link_type": "Document"}
        }))
        .unwrap();
        assert!(data.assortiment.document_id().is_none());
    }

    #[test]
    fn test_unknown_slices_are_kept_as_other() {
        let data: ArticleData = serde_json::from_value(json!({
            "title": [{"type": "heading1", "text": "Hello", "spans": []}],
            "slices": [
                {"slice_type": "quote", "primary": {"quote": []}, "items": []},
                {"slice_type": "text", "primary": {"text": [{"type": "paragraph", "text": "Body", "spans": []}]}}
            ]
        }))
        .unwrap();
        assert!(matches!(data.slices[0], Slice::Other));
        assert!(matches!(data.slices[1], Slice::Text { .. }));
        assert!(!data.featured_image.is_filled());
    }

    #[test]
    fn test_link_resolution() {
        let article = LinkField {
            uid: Some("hello".to_string()),
            document_type: Some("article".to_string()),
            link_type: Some("Document".to_string()),
            ..Default::default()
        };
        assert_eq!(article.resolve_url().as_deref(), Some("/articles/hello"));

        let page = LinkField {
            uid: Some("about".to_string()),
            document_type: Some("page".to_string()),
            ..Default::default()
        };
        assert_eq!(page.resolve_url().as_deref(), Some("/about"));

        let web = LinkField {
            url: Some("https://example.com".to_string()),
            link_type: Some("Web".to_string()),
            ..Default::default()
        };
        assert_eq!(web.resolve_url().as_deref(), Some("https://example.com"));

        assert!(LinkField::default().resolve_url().is_none());
    }

    #[test]
    fn test_as_text_joins_blocks_with_space() {
        let field: RichText = serde_json::from_value(json!([
            {"type": "paragraph", "text": "First", "spans": []},
            {"type": "paragraph", "text": "Second", "spans": []}
        ]))
        .unwrap();
        assert_eq!(as_text(&field), "First Second");
    }
}
