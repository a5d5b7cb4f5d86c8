use crate::core::Pipeline;
use crate::domain::model::AnalysisReport;
use crate::utils::error::Result;
use crate::utils::monitor::PhaseMonitor;

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub report: AnalysisReport,
    pub output_path: String,
}

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: PhaseMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: PhaseMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<EngineOutput> {
        tracing::info!("Starting prime analysis");

        tracing::info!("Embedding showcase numbers...");
        let sample = self.pipeline.extract().await?;
        tracing::info!("Embedded {} showcase numbers", sample.showcase.len());
        self.monitor.log_phase("extract");

        tracing::info!("Classifying range and comparing zeta forms...");
        let report = self.pipeline.transform(sample).await?;
        tracing::info!(
            "Found {} primes up to {}",
            report.distribution.primes.len(),
            report.distribution.max_n
        );
        self.monitor.log_phase("transform");

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_phase("load");
        self.monitor.log_final_stats();

        Ok(EngineOutput {
            report,
            output_path,
        })
    }
}
