use crate::core::distribution::analyze_prime_distribution;
use crate::core::embedding::embed_number;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    AnalysisReport, EmbeddedSample, NumberEmbedding, ProductDemo, ZetaComparison,
};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const DISTRIBUTION_CSV: &str = "distribution.csv";
pub const EMBEDDINGS_CSV: &str = "embeddings.csv";
pub const REPORT_JSON: &str = "report.json";

/// Embeds, classifies and compares, then writes the plot data and report.
pub struct AnalysisPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> AnalysisPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_files(&self, report: &AnalysisReport) -> Result<Vec<(&'static str, Vec<u8>)>> {
        let formats = self.config.output_formats();
        let mut files = Vec::new();

        if formats.iter().any(|f| f == "csv") {
            files.push((DISTRIBUTION_CSV, distribution_csv(report)?));
            files.push((EMBEDDINGS_CSV, embeddings_csv(report)?));
        }
        if formats.iter().any(|f| f == "json") {
            files.push((REPORT_JSON, serde_json::to_vec_pretty(report)?));
        }
        Ok(files)
    }
}

#[derive(Serialize)]
struct EmbeddingRow<'a> {
    value: u64,
    base: u32,
    digits: &'a str,
    is_intrinsic_prime: bool,
}

fn distribution_csv(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for sample in &report.distribution.samples {
        writer.serialize(sample)?;
    }
    writer
        .into_inner()
        .map_err(|e| crate::utils::error::AnalysisError::IoError(e.into_error()))
}

fn embeddings_csv(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let product = report.product.as_ref().map(|p| &p.product);
    for summary in report.showcase.iter().chain(product) {
        for (base, digits) in &summary.expansions {
            let digits = digits
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writer.serialize(EmbeddingRow {
                value: summary.value,
                base: *base,
                digits: &digits,
                is_intrinsic_prime: summary.is_intrinsic_prime,
            })?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| crate::utils::error::AnalysisError::IoError(e.into_error()))
}

fn zip_files(files: &[(&str, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file(*name, SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }
    Ok(zip.finish()?.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AnalysisPipeline<S, C> {
    async fn extract(&self) -> Result<EmbeddedSample> {
        let max_base = self.config.max_base();
        tracing::info!("🔢 Embedding numbers in bases 2..={}", max_base);

        let showcase = self
            .config
            .showcase_numbers()
            .iter()
            .map(|&n| embed_number(n, max_base))
            .collect::<Result<Vec<NumberEmbedding>>>()?;

        let product_operands = match self.config.product_operands() {
            Some((a, b)) => Some((embed_number(a, max_base)?, embed_number(b, max_base)?)),
            None => None,
        };

        tracing::debug!(
            "extracted {} showcase embeddings, product demo: {}",
            showcase.len(),
            product_operands.is_some()
        );
        Ok(EmbeddedSample {
            showcase,
            product_operands,
        })
    }

    async fn transform(&self, sample: EmbeddedSample) -> Result<AnalysisReport> {
        let max_base = self.config.max_base();

        let showcase = sample.showcase.iter().map(NumberEmbedding::summary).collect();

        let product = match &sample.product_operands {
            Some((left, right)) => {
                let embedded = left.product(right, max_base)?;
                tracing::info!("✖️ {} * {} = {}", left, right, embedded);
                Some(ProductDemo {
                    left: left.value,
                    right: right.value,
                    product: embedded.summary(),
                })
            }
            None => None,
        };

        let distribution = analyze_prime_distribution(
            self.config.distribution_max(),
            self.config.distribution_step(),
        )?;
        let checkpoints = distribution.checkpoints(&self.config.checkpoints());
        for checkpoint in &checkpoints {
            tracing::info!(
                "📈 π({}) = {}",
                checkpoint.bound,
                checkpoint.prime_count
            );
        }

        let zeta = ZetaComparison::compute(
            self.config.zeta_s(),
            self.config.zeta_terms(),
            self.config.zeta_prime_bound(),
        )?;
        tracing::info!(
            "ζ({}) sum={:.8} product={:.8} diff={:.8}",
            zeta.s,
            zeta.sum_form,
            zeta.product_form,
            zeta.difference
        );

        Ok(AnalysisReport {
            generated_at: chrono::Utc::now(),
            max_base,
            showcase,
            product,
            distribution,
            checkpoints,
            zeta,
        })
    }

    async fn load(&self, report: &AnalysisReport) -> Result<String> {
        let files = self.render_files(report)?;

        if self.config.archive_enabled() {
            let archive_name = self.config.archive_filename();
            tracing::info!("💾 Bundling {} files into {}", files.len(), archive_name);
            let zip_data = zip_files(&files)?;
            self.storage.write_file(archive_name, &zip_data).await?;
            return Ok(self.storage.location(archive_name));
        }

        for (name, data) in &files {
            // 逐一寫出檔案
            self.storage.write_file(name, data).await?;
        }
        tracing::info!("💾 Wrote {} report files", files.len());
        Ok(self.config.output_path().to_string())
    }
}
