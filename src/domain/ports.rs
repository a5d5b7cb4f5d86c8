use crate::domain::model::{AnalysisReport, EmbeddedSample};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of `path` for logs and summaries.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn max_base(&self) -> u32;
    fn showcase_numbers(&self) -> &[i64];
    fn product_operands(&self) -> Option<(i64, i64)>;
    fn distribution_max(&self) -> u64;
    fn distribution_step(&self) -> u64;
    fn checkpoints(&self) -> Vec<u64>;
    fn zeta_s(&self) -> f64;
    fn zeta_terms(&self) -> u64;
    fn zeta_prime_bound(&self) -> u64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn archive_enabled(&self) -> bool;
    fn archive_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<EmbeddedSample>;
    async fn transform(&self, sample: EmbeddedSample) -> Result<AnalysisReport>;
    async fn load(&self, report: &AnalysisReport) -> Result<String>;
}
