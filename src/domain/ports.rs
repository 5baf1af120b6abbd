use crate::domain::model::{PageContent, RawDocument, RenderOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn access_token(&self) -> Option<&str>;
    fn ref_override(&self) -> Option<&str>;
    fn page_size(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
    fn output_path(&self) -> &str;
    fn exports(&self) -> &[String];
    fn include_articles(&self) -> bool;
    fn template_path(&self) -> Option<&str>;
}

/// Descending sort on a document field, as sent in `orderings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub field: String,
}

impl Ordering {
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} desc", self.field)
    }
}

/// Read side of the headless CMS.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every document of `document_type`, in the given order.
    async fn get_all_by_type(
        &self,
        document_type: &str,
        orderings: &[Ordering],
    ) -> Result<Vec<RawDocument>>;

    /// The singleton document of `document_type`.
    async fn get_single(&self, document_type: &str) -> Result<RawDocument>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PageContent>;
    async fn transform(&self, content: PageContent) -> Result<RenderOutput>;
    async fn load(&self, output: RenderOutput) -> Result<String>;
}
