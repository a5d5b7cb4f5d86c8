use crate::core::embedding::{is_intrinsic_prime, DEFAULT_MAX_BASE};
use crate::core::numeric::pnt_estimate;
use crate::domain::model::{Checkpoint, DistributionAnalysis, DistributionSample};
use crate::utils::error::{AnalysisError, Result};

/// Classifies every `n` in `2..=max_n` and samples π(x) against x/ln(x)
/// at each multiple of `step`.
///
/// Sample points below 2 are skipped because ln(1) = 0.
pub fn analyze_prime_distribution(max_n: u64, step: u64) -> Result<DistributionAnalysis> {
    if max_n < 2 {
        return Err(AnalysisError::validation(format!(
            "distribution bound must be at least 2, got {}",
            max_n
        )));
    }
    if step == 0 {
        return Err(AnalysisError::validation("distribution step must be positive"));
    }
    if step > max_n {
        return Err(AnalysisError::InvalidConfigValueError {
            field: "step".to_string(),
            value: step.to_string(),
            reason: format!("must not exceed the distribution bound {}", max_n),
        });
    }
    let bound = i64::try_from(max_n).map_err(|_| {
        AnalysisError::validation(format!("distribution bound {} is too large", max_n))
    })?;

    let mut primes = Vec::new();
    for n in 2..=bound {
        if is_intrinsic_prime(n, DEFAULT_MAX_BASE)? {
            primes.push(n as u64);
        }
    }
    tracing::debug!(max_n, found = primes.len(), "classified range");

    let mut samples = Vec::new();
    let mut counted = 0usize;
    let mut x = step;
    while x <= max_n {
        while counted < primes.len() && primes[counted] <= x {
            counted += 1;
        }
        if x >= 2 {
            let estimate = pnt_estimate(x as f64);
            samples.push(DistributionSample {
                x,
                prime_count: counted,
                pnt_estimate: estimate,
                ratio: counted as f64 / estimate,
            });
        }
        x = match x.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(DistributionAnalysis {
        max_n,
        step,
        primes,
        samples,
    })
}

impl DistributionAnalysis {
    /// π(x) restricted to the analysed range.
    pub fn count_up_to(&self, x: u64) -> usize {
        self.primes.partition_point(|&p| p <= x)
    }

    pub fn first_primes(&self, n: usize) -> &[u64] {
        &self.primes[..n.min(self.primes.len())]
    }

    pub fn checkpoints(&self, bounds: &[u64]) -> Vec<Checkpoint> {
        bounds
            .iter()
            .filter(|&&bound| bound <= self.max_n)
            .map(|&bound| Checkpoint {
                bound,
                prime_count: self.count_up_to(bound),
            })
            .collect()
    }

    /// Sample whose ratio is furthest from 1, if any.
    pub fn worst_ratio(&self) -> Option<&DistributionSample> {
        self.samples
            .iter()
            .max_by(|a, b| (a.ratio - 1.0).abs().total_cmp(&(b.ratio - 1.0).abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_known_values() {
        let analysis = analyze_prime_distribution(200, 10).unwrap();
        assert_eq!(analysis.count_up_to(100), 25);
        assert_eq!(analysis.count_up_to(200), 46);
        assert_eq!(analysis.primes.len(), 46);
        assert_eq!(analysis.first_primes(10), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_samples_follow_step() {
        let analysis = analyze_prime_distribution(200, 10).unwrap();
        assert_eq!(analysis.samples.len(), 20);
        assert_eq!(analysis.samples[0].x, 10);
        assert_eq!(analysis.samples[0].prime_count, 4);
        let last = analysis.samples.last().unwrap();
        assert_eq!(last.x, 200);
        assert_eq!(last.prime_count, 46);
        assert!((last.ratio - 46.0 / (200.0 / 200f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_step_of_one_skips_x_one() {
        let analysis = analyze_prime_distribution(5, 1).unwrap();
        let xs: Vec<u64> = analysis.samples.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![2, 3, 4, 5]);
        assert!(analysis.samples.iter().all(|s| s.ratio.is_finite()));
    }

    #[test]
    fn test_checkpoints_ignore_out_of_range_bounds() {
        let analysis = analyze_prime_distribution(150, 10).unwrap();
        let checkpoints = analysis.checkpoints(&[100, 200]);
        assert_eq!(
            checkpoints,
            vec![Checkpoint {
                bound: 100,
                prime_count: 25
            }]
        );
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        assert!(analyze_prime_distribution(1, 10).is_err());
        assert!(analyze_prime_distribution(100, 0).is_err());
    }

    #[test]
    fn test_rejects_step_beyond_bound() {
        let err = analyze_prime_distribution(5, 10).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidConfigValueError { ref field, .. } if field == "step"
        ));

        // step == max_n still yields the single sample at max_n
        let analysis = analyze_prime_distribution(10, 10).unwrap();
        assert_eq!(analysis.samples.len(), 1);
        assert_eq!(analysis.samples[0].x, 10);
        assert_eq!(analysis.samples[0].prime_count, 4);
    }

    #[test]
    fn test_ratio_at_thousand() {
        let analysis = analyze_prime_distribution(1000, 10).unwrap();
        let last = analysis.samples.last().unwrap();
        assert_eq!(last.prime_count, 168);
        assert!(last.ratio > 1.1 && last.ratio < 1.2);

        let worst = analysis.worst_ratio().unwrap();
        assert!((worst.ratio - 1.0).abs() >= (last.ratio - 1.0).abs());
    }
}
