pub mod cli;
pub mod toml_config;

pub const DEFAULT_ARCHIVE_NAME: &str = "prime_axioms_report.zip";

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prime-axioms")]
#[command(about = "Embed numbers in multiple bases and compare prime counts with PNT and zeta")]
pub struct CliConfig {
    /// Largest base used for digit expansions
    #[arg(long, default_value = "10")]
    pub max_base: u32,

    /// Numbers whose embeddings are shown in detail
    #[arg(long, value_delimiter = ',', default_values = ["7", "12", "23"], allow_hyphen_values = true)]
    pub numbers: Vec<i64>,

    /// Two operands for the multiplication demo, e.g. `3,5`; pass `--product` alone to skip it
    #[arg(long, value_delimiter = ',', num_args = 0.., default_values = ["3", "5"])]
    pub product: Vec<i64>,

    /// Upper bound of the prime distribution analysis
    #[arg(long, default_value = "200")]
    pub max_n: u64,

    /// Distance between PNT sample points
    #[arg(long, default_value = "10")]
    pub step: u64,

    /// Bounds at which π(x) is reported
    #[arg(long, value_delimiter = ',', default_values = ["100", "200"])]
    pub checkpoints: Vec<u64>,

    /// Zeta argument, must be greater than 1
    #[arg(long, default_value = "2.0")]
    pub zeta_s: f64,

    /// Number of terms in the truncated zeta sum
    #[arg(long, default_value = "1000")]
    pub zeta_terms: u64,

    /// Largest prime in the truncated Euler product
    #[arg(long, default_value = "100")]
    pub prime_bound: u64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_values = ["csv", "json"])]
    pub formats: Vec<String>,

    /// Write plain files instead of a single ZIP archive
    #[arg(long)]
    pub no_archive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase CPU and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn max_base(&self) -> u32 {
        self.max_base
    }

    fn showcase_numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn product_operands(&self) -> Option<(i64, i64)> {
        match self.product.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    fn distribution_max(&self) -> u64 {
        self.max_n
    }

    fn distribution_step(&self) -> u64 {
        self.step
    }

    fn checkpoints(&self) -> Vec<u64> {
        self.checkpoints.clone()
    }

    fn zeta_s(&self) -> f64 {
        self.zeta_s
    }

    fn zeta_terms(&self) -> u64 {
        self.zeta_terms
    }

    fn zeta_prime_bound(&self) -> u64 {
        self.prime_bound
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn archive_enabled(&self) -> bool {
        !self.no_archive
    }

    fn archive_filename(&self) -> &str {
        DEFAULT_ARCHIVE_NAME
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 空清單代表停用乘法示範
        if !matches!(self.product.len(), 0 | 2) {
            return Err(crate::utils::error::AnalysisError::InvalidConfigValueError {
                field: "product".to_string(),
                value: format!("{:?}", self.product),
                reason: "Expected two operands, or none to disable the demo".to_string(),
            });
        }
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: crate::core::ConfigProvider + ?Sized>(
    config: &C,
) -> crate::utils::error::Result<()> {
    use crate::core::numeric::MAX_SUPPORTED_BASE;
    use crate::utils::validation::*;

    validate_range("max_base", config.max_base(), 2, MAX_SUPPORTED_BASE)?;
    validate_natural_numbers("numbers", config.showcase_numbers())?;
    if let Some((a, b)) = config.product_operands() {
        validate_natural_numbers("product", &[a, b])?;
    }
    validate_positive_number("max_n", config.distribution_max(), 2)?;
    validate_positive_number("step", config.distribution_step(), 1)?;
    if config.distribution_step() > config.distribution_max() {
        return Err(crate::utils::error::AnalysisError::InvalidConfigValueError {
            field: "step".to_string(),
            value: config.distribution_step().to_string(),
            reason: format!(
                "must not exceed max_n ({}), otherwise no sample point is produced",
                config.distribution_max()
            ),
        });
    }
    validate_greater_than("zeta_s", config.zeta_s(), 1.0)?;
    validate_positive_number("zeta_terms", config.zeta_terms(), 1)?;
    validate_positive_number("prime_bound", config.zeta_prime_bound(), 2)?;
    validate_path("output_path", config.output_path())?;
    validate_output_formats("formats", config.output_formats())?;
    if config.archive_enabled() {
        validate_path("archive_filename", config.archive_filename())?;
    }
    Ok(())
}
