use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs a pipeline's extract, transform and load phases once.
pub struct RenderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting page render");

        let phase = Instant::now();
        let content = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} categories, {} assortiments, {} products, {} articles in {:?}",
            content.categories.len(),
            content.assortiments.len(),
            content.products.len(),
            content.articles.len(),
            phase.elapsed()
        );

        let phase = Instant::now();
        let output = self.pipeline.transform(content).await?;
        tracing::info!(
            "Rendered {} bytes of HTML for {} categories in {:?}",
            output.html.len(),
            output.catalog.len(),
            phase.elapsed()
        );

        let phase = Instant::now();
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Wrote {} in {:?}", output_path, phase.elapsed());

        tracing::info!("Page render finished in {:?}", started.elapsed());
        Ok(output_path)
    }
}
