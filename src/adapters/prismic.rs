use crate::domain::model::RawDocument;
use crate::domain::ports::{ConfigProvider, ContentSource, Ordering};
use crate::utils::error::{PageError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default, rename = "isMasterRef")]
    is_master_ref: bool,
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    #[serde(default)]
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results_size: u64,
    #[serde(default)]
    results: Vec<RawDocument>,
}

/// `[[at(document.type, "<type>")]]`
pub fn type_predicate(document_type: &str) -> String {
    format!("[[at(document.type, \"{}\")]]", document_type)
}

/// `[field desc,other]`
pub fn orderings_param(orderings: &[Ordering]) -> String {
    let joined = orderings
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}]", joined)
}

/// Client for the Prismic REST API v2.
pub struct PrismicClient {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
    ref_override: Option<String>,
    page_size: usize,
    master_ref: OnceCell<String>,
}

impl PrismicClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(concat!("catalog-page/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().trim_end_matches('/').to_string(),
            access_token: config.access_token().map(str::to_string),
            ref_override: config.ref_override().map(str::to_string),
            page_size: config.page_size(),
            master_ref: OnceCell::new(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/documents/search", self.endpoint)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.client.get(url).query(params);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(PageError::ApiStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Ref to query against: the configured override, else the master ref.
    pub async fn content_ref(&self) -> Result<&str> {
        if let Some(reference) = &self.ref_override {
            return Ok(reference.as_str());
        }

        let reference = self
            .master_ref
            .get_or_try_init(|| async {
                let info: ApiInfo = self.get_json(&self.endpoint, &[]).await?;
                let master = info
                    .refs
                    .into_iter()
                    .find(|r| r.is_master_ref)
                    .ok_or_else(|| PageError::ProcessingError {
                        message: format!("Repository at {} exposes no master ref", self.endpoint),
                    })?;
                tracing::debug!(
                    "Using ref {} ({})",
                    master.reference,
                    master.label.as_deref().unwrap_or("Master")
                );
                Ok::<_, PageError>(master.reference)
            })
            .await?;

        Ok(reference.as_str())
    }

    async fn search_page(
        &self,
        reference: &str,
        document_type: &str,
        orderings: &[Ordering],
        page: u32,
        page_size: usize,
    ) -> Result<SearchResponse> {
        let mut params = vec![
            ("ref", reference.to_string()),
            ("q", type_predicate(document_type)),
            ("pageSize", page_size.to_string()),
            ("page", page.to_string()),
        ];
        if !orderings.is_empty() {
            params.push(("orderings", orderings_param(orderings)));
        }

        self.get_json(&self.search_url(), &params).await
    }
}

#[async_trait]
impl ContentSource for PrismicClient {
    async fn get_all_by_type(
        &self,
        document_type: &str,
        orderings: &[Ordering],
    ) -> Result<Vec<RawDocument>> {
        let reference = self.content_ref().await?;
        let mut documents = Vec::new();
        let mut page = 1;

        loop {
            let response = self
                .search_page(reference, document_type, orderings, page, self.page_size)
                .await?;
            tracing::debug!(
                "Fetched page {}/{} of '{}' ({} total)",
                page,
                response.total_pages,
                document_type,
                response.total_results_size
            );
            documents.extend(response.results);

            if page >= response.total_pages {
                break;
            }
            page += 1;
        }

        tracing::info!("Fetched {} '{}' documents", documents.len(), document_type);
        Ok(documents)
    }

    async fn get_single(&self, document_type: &str) -> Result<RawDocument> {
        let reference = self.content_ref().await?;
        let response = self
            .search_page(reference, document_type, &[], 1, 1)
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| PageError::DocumentNotFound {
                document_type: document_type.to_string(),
            })
    }
}
