pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::app::pipelines::analysis_pipeline::AnalysisPipeline;
pub use crate::app::render::render_report;
pub use crate::core::embedding::{embed_number, is_intrinsic_prime};
pub use crate::core::engine::{AnalysisEngine, EngineOutput};
pub use crate::core::numeric::{digit_expansion, is_prime, zeta_euler_product, zeta_sum};
pub use crate::utils::error::{AnalysisError, Result};
