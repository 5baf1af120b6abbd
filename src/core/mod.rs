pub mod article;
pub mod engine;
pub mod grouping;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{PageContent, RenderOutput};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Pipeline, Storage};
pub use crate::utils::error::Result;
