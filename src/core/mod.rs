pub mod distribution;
pub mod embedding;
pub mod engine;
pub mod numeric;
pub mod zeta;

pub use crate::domain::model::{AnalysisReport, EmbeddedSample, NumberEmbedding};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
