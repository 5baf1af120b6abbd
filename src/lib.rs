pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use crate::adapters::{prismic::PrismicClient, storage::LocalStorage};
pub use crate::core::{engine::RenderEngine, pipeline::CatalogPipeline};
pub use utils::error::{PageError, Result};
