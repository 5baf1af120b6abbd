use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const SUPPORTED_EXPORTS: &[&str] = &["json", "csv"];

/// Site configuration, usually read from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Repository API root, e.g. `https://my-repo.cdn.prismic.io/api/v2`.
    pub endpoint: String,
    pub access_token: Option<String>,
    /// Preview or release ref; the master ref is used when unset.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub include_articles: bool,
    pub template_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default)]
    pub exports: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            exports: Vec::new(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

pub fn default_output_path() -> String {
    "./public".to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl SiteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            source: SourceConfig {
                endpoint: endpoint.into(),
                access_token: None,
                reference: None,
                page_size: DEFAULT_PAGE_SIZE,
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            },
            page: PageConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_range("source.page_size", self.source.page_size, 1, 100)?;
        validation::validate_positive_number(
            "source.timeout_seconds",
            self.source.timeout_seconds,
            1,
        )?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_choices("output.exports", &self.output.exports, SUPPORTED_EXPORTS)?;

        if let Some(template) = &self.page.template_path {
            validation::validate_path("page.template_path", template)?;
        }

        if let Some(token) = &self.source.access_token {
            if token.starts_with("${") {
                return Err(PageError::ConfigValidationError {
                    field: "source.access_token".to_string(),
                    message: format!("environment variable {} is not set", token),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn access_token(&self) -> Option<&str> {
        self.source.access_token.as_deref().filter(|t| !t.is_empty())
    }

    fn ref_override(&self) -> Option<&str> {
        self.source.reference.as_deref().filter(|r| !r.is_empty())
    }

    fn page_size(&self) -> usize {
        self.source.page_size
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn exports(&self) -> &[String] {
        &self.output.exports
    }

    fn include_articles(&self) -> bool {
        self.page.include_articles
    }

    fn template_path(&self) -> Option<&str> {
        self.page.template_path.as_deref()
    }
}
