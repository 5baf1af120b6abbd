use crate::core::article::ArticleSummary;
use crate::core::grouping::{build_overview, to_catalog};
use crate::core::render::{PageRenderer, PageView};
use crate::core::{ConfigProvider, ContentSource, Pipeline, Storage};
use crate::domain::model::{CatalogCategory, Document, PageContent, RawDocument, RenderOutput};
use crate::domain::ports::Ordering;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;

pub const INDEX_FILE: &str = "index.html";
pub const CATALOG_JSON_FILE: &str = "catalog.json";
pub const CATALOG_CSV_FILE: &str = "catalog.csv";

/// Orderings the page requests for each list.
pub fn article_orderings() -> Vec<Ordering> {
    vec![
        Ordering::desc("my.article.publishDate"),
        Ordering::desc("document.first_publication_date"),
    ]
}

pub fn default_orderings() -> Vec<Ordering> {
    vec![Ordering::desc("document.first_publication_date")]
}

fn decode_all<T: DeserializeOwned>(raw: Vec<RawDocument>) -> Result<Vec<Document<T>>> {
    raw.into_iter()
        .map(|doc| doc.decode().map_err(Into::into))
        .collect()
}

pub struct CatalogPipeline<S: Storage, C: ContentSource, P: ConfigProvider> {
    storage: S,
    source: C,
    config: P,
    renderer: PageRenderer,
}

impl<S: Storage, C: ContentSource, P: ConfigProvider> CatalogPipeline<S, C, P> {
    pub fn new(storage: S, source: C, config: P) -> Result<Self> {
        let renderer = match config.template_path() {
            Some(path) => PageRenderer::from_file(path)?,
            None => PageRenderer::new()?,
        };

        Ok(Self {
            storage,
            source,
            config,
            renderer,
        })
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        document_type: &str,
        orderings: &[Ordering],
    ) -> Result<Vec<Document<T>>> {
        let raw = self.source.get_all_by_type(document_type, orderings).await?;
        decode_all(raw)
    }

    async fn fetch_single<T: DeserializeOwned>(&self, document_type: &str) -> Result<Document<T>> {
        Ok(self.source.get_single(document_type).await?.decode()?)
    }
}

fn catalog_csv(catalog: &[CatalogCategory]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "assortiment", "product_id", "product"])?;

    for category in catalog {
        for assortiment in &category.assortiments {
            for product in &assortiment.products {
                writer.write_record([
                    category.name.as_str(),
                    assortiment.title.as_str(),
                    product.id.as_str(),
                    product.name.as_str(),
                ])?;
            }
        }
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

#[async_trait::async_trait]
impl<S: Storage, C: ContentSource, P: ConfigProvider> Pipeline for CatalogPipeline<S, C, P> {
    async fn extract(&self) -> Result<PageContent> {
        let articles = self.fetch_all("article", &article_orderings()).await?;
        let categories = self.fetch_all("category", &default_orderings()).await?;
        let assortiments = self.fetch_all("assortiment", &default_orderings()).await?;
        let products = self.fetch_all("product", &default_orderings()).await?;
        let navigation = self.fetch_single("navigation").await?;
        let settings = self.fetch_single("settings").await?;

        Ok(PageContent {
            articles,
            categories,
            assortiments,
            products,
            navigation,
            settings,
        })
    }

    async fn transform(&self, content: PageContent) -> Result<RenderOutput> {
        let overview = build_overview(
            &content.categories,
            &content.assortiments,
            &content.products,
        );

        for section in &overview {
            tracing::debug!(
                "Category '{}': {} assortiments, {} products",
                section.category.name(),
                section.items.len(),
                section.items.iter().map(|i| i.products.len()).sum::<usize>()
            );
        }

        let articles = if self.config.include_articles() {
            content.articles.iter().map(ArticleSummary::from_article).collect()
        } else {
            Vec::new()
        };

        let view = PageView::new(&content.settings, &content.navigation, &overview, articles);
        let html = self.renderer.render(&view)?;

        Ok(RenderOutput {
            html,
            catalog: to_catalog(&overview),
        })
    }

    async fn load(&self, output: RenderOutput) -> Result<String> {
        self.storage.write_file(INDEX_FILE, output.html.as_bytes()).await?;

        for export in self.config.exports() {
            match export.as_str() {
                "json" => {
                    let json = serde_json::to_vec_pretty(&output.catalog)?;
                    self.storage.write_file(CATALOG_JSON_FILE, &json).await?;
                }
                "csv" => {
                    let csv = catalog_csv(&output.catalog)?;
                    self.storage.write_file(CATALOG_CSV_FILE, &csv).await?;
                }
                other => tracing::warn!("Skipping unknown export '{}'", other),
            }
        }

        Ok(format!("{}/{}", self.config.output_path(), INDEX_FILE))
    }
}
