use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A natural number together with its digit expansion in every base
/// `2..=max_base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberEmbedding {
    pub value: u64,
    pub max_base: u32,
    pub expansions: BTreeMap<u32, Vec<u32>>,
}

/// One showcased number as presented in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSummary {
    pub value: u64,
    pub expansions: BTreeMap<u32, Vec<u32>>,
    pub divisor_count: u64,
    pub nontrivial_divisor_count: u64,
    pub coherence_norm: f64,
    pub is_intrinsic_prime: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDemo {
    pub left: u64,
    pub right: u64,
    pub product: EmbeddingSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSample {
    pub x: u64,
    pub prime_count: usize,
    pub pnt_estimate: f64,
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    pub max_n: u64,
    pub step: u64,
    pub primes: Vec<u64>,
    pub samples: Vec<DistributionSample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub bound: u64,
    pub prime_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZetaComparison {
    pub s: f64,
    pub terms: u64,
    pub prime_bound: u64,
    pub sum_form: f64,
    pub product_form: f64,
    pub difference: f64,
    pub exact: Option<f64>,
    pub sum_error: Option<f64>,
    pub product_error: Option<f64>,
}

/// Everything extracted before the report is assembled.
#[derive(Debug, Clone)]
pub struct EmbeddedSample {
    pub showcase: Vec<NumberEmbedding>,
    pub product_operands: Option<(NumberEmbedding, NumberEmbedding)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub max_base: u32,
    pub showcase: Vec<EmbeddingSummary>,
    pub product: Option<ProductDemo>,
    pub distribution: DistributionAnalysis,
    pub checkpoints: Vec<Checkpoint>,
    pub zeta: ZetaComparison,
}
