pub mod analysis_pipeline;
