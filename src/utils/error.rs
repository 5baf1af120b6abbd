use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    ApiStatusError { status: u16, url: String },

    #[error("No '{document_type}' document found in repository")]
    DocumentNotFound { document_type: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Rendering,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::ApiError(_) | PageError::ApiStatusError { .. } => ErrorCategory::Network,
            PageError::DocumentNotFound { .. }
            | PageError::SerializationError(_)
            | PageError::CsvError(_)
            | PageError::ProcessingError { .. } => ErrorCategory::Data,
            PageError::TemplateError(_) | PageError::RenderError(_) => ErrorCategory::Rendering,
            PageError::IoError(_) => ErrorCategory::Io,
            PageError::MissingConfigError { .. }
            | PageError::InvalidConfigValueError { .. }
            | PageError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PageError::ApiError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            PageError::ApiStatusError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            PageError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageError::ApiError(_) => "Check network connectivity and the repository endpoint",
            PageError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check the access token (PRISMIC_ACCESS_TOKEN) for this repository"
            }
            PageError::ApiStatusError { status, .. } if *status == 404 => {
                "Check that the endpoint points at the repository API root, e.g. https://<repo>.cdn.prismic.io/api/v2"
            }
            PageError::ApiStatusError { .. } => "The content API is unavailable, retry later",
            PageError::DocumentNotFound { .. } => {
                "Create and publish the missing singleton document"
            }
            PageError::SerializationError(_) => {
                "Check that the custom types match the expected fields"
            }
            PageError::CsvError(_) | PageError::IoError(_) => {
                "Check that the output path is writable"
            }
            PageError::TemplateError(_) | PageError::RenderError(_) => {
                "Check the page template syntax"
            }
            PageError::MissingConfigError { .. }
            | PageError::InvalidConfigValueError { .. }
            | PageError::ConfigValidationError { .. } => {
                "Check the command line flags and the site configuration file"
            }
            PageError::ProcessingError { .. } => "Inspect the fetched documents with --verbose",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch content: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Unexpected content: {}", self),
            ErrorCategory::Rendering => format!("Could not render page: {}", self),
            ErrorCategory::Io => format!("Could not write output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
