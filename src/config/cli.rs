use crate::config::SiteConfig;
use crate::utils::error::{PageError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-page")]
#[command(about = "Render the catalog page from a Prismic repository")]
pub struct CliConfig {
    /// Path to a TOML site configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Repository API root, e.g. https://my-repo.cdn.prismic.io/api/v2
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Access token for private repositories
    #[arg(long, env = "PRISMIC_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Preview or release ref to render instead of the master ref
    #[arg(long = "ref")]
    pub reference: Option<String>,

    /// Directory the page is written to
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Also render the article list
    #[arg(long)]
    pub include_articles: bool,

    /// Extra exports of the grouped catalog (json, csv)
    #[arg(long, value_delimiter = ',')]
    pub export: Vec<String>,

    /// Custom handlebars template for the index page
    #[arg(long)]
    pub template: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies the flags on top.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut site = match (&self.config, &self.endpoint) {
            (Some(path), _) => SiteConfig::from_file(path)?,
            (None, Some(endpoint)) => SiteConfig::new(endpoint.clone()),
            (None, None) => {
                return Err(PageError::MissingConfigError {
                    field: "--endpoint or --config".to_string(),
                })
            }
        };

        if let Some(endpoint) = &self.endpoint {
            site.source.endpoint = endpoint.clone();
        }
        if let Some(token) = &self.access_token {
            site.source.access_token = Some(token.clone());
        }
        if let Some(reference) = &self.reference {
            site.source.reference = Some(reference.clone());
        }
        if let Some(path) = &self.output_path {
            site.output.path = path.clone();
        }
        if self.include_articles {
            site.page.include_articles = true;
        }
        if !self.export.is_empty() {
            site.output.exports = self.export.clone();
        }
        if let Some(template) = &self.template {
            site.page.template_path = Some(template.clone());
        }

        Ok(site)
    }
}
