use crate::config::{validate_provider, DEFAULT_ARCHIVE_NAME};
use crate::core::embedding::DEFAULT_MAX_BASE;
use crate::core::ConfigProvider;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub analysis: AnalysisMetadata,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub zeta: ZetaConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmbeddingConfig {
    pub max_base: Option<u32>,
    pub showcase: Option<Vec<i64>>,
    pub product: Option<[i64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DistributionConfig {
    pub max_n: Option<u64>,
    pub step: Option<u64>,
    pub checkpoints: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ZetaConfig {
    pub s: Option<f64>,
    pub terms: Option<u64>,
    pub prime_bound: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

const DEFAULT_SHOWCASE: [i64; 3] = [7, 12, 23];

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AnalysisError::ConfigValidationError {
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

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn set_archive_enabled(&mut self, enabled: bool) {
        match self.output.archive.as_mut() {
            Some(archive) => archive.enabled = enabled,
            None => {
                self.output.archive = Some(ArchiveConfig {
                    enabled,
                    filename: None,
                })
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn max_base(&self) -> u32 {
        self.embedding.max_base.unwrap_or(DEFAULT_MAX_BASE)
    }

    fn showcase_numbers(&self) -> &[i64] {
        self.embedding.showcase.as_deref().unwrap_or(&DEFAULT_SHOWCASE[..])
    }

    fn product_operands(&self) -> Option<(i64, i64)> {
        self.embedding.product.map(|[a, b]| (a, b))
    }

    fn distribution_max(&self) -> u64 {
        self.distribution.max_n.unwrap_or(200)
    }

    fn distribution_step(&self) -> u64 {
        self.distribution.step.unwrap_or(10)
    }

    fn checkpoints(&self) -> Vec<u64> {
        self.distribution
            .checkpoints
            .clone()
            .unwrap_or_else(|| vec![100, self.distribution_max()])
    }

    fn zeta_s(&self) -> f64 {
        self.zeta.s.unwrap_or(2.0)
    }

    fn zeta_terms(&self) -> u64 {
        self.zeta.terms.unwrap_or(1000)
    }

    fn zeta_prime_bound(&self) -> u64 {
        self.zeta.prime_bound.unwrap_or(100)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn archive_enabled(&self) -> bool {
        self.output.archive.as_ref().map(|a| a.enabled).unwrap_or(true)
    }

    fn archive_filename(&self) -> &str {
        self.output
            .archive
            .as_ref()
            .and_then(|a| a.filename.as_deref())
            .unwrap_or(DEFAULT_ARCHIVE_NAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("analysis.name", &self.analysis.name)?;
        if let Some(level) = self.log_level() {
            crate::utils::validation::validate_log_level("monitoring.log_level", level)?;
        }
        validate_provider(self)
    }
}
