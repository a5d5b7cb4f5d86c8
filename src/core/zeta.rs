use crate::core::numeric::{zeta_euler_product, zeta_sum};
use crate::domain::model::ZetaComparison;
use crate::utils::error::{AnalysisError, Result};
use std::f64::consts::PI;

/// Closed form of ζ(s) for the even arguments the report knows about.
pub fn exact_zeta(s: f64) -> Option<f64> {
    if s == 2.0 {
        Some(PI.powi(2) / 6.0)
    } else if s == 4.0 {
        Some(PI.powi(4) / 90.0)
    } else if s == 6.0 {
        Some(PI.powi(6) / 945.0)
    } else {
        None
    }
}

impl ZetaComparison {
    pub fn compute(s: f64, terms: u64, prime_bound: u64) -> Result<Self> {
        if !s.is_finite() || s <= 1.0 {
            return Err(AnalysisError::validation(format!(
                "zeta comparison needs s > 1 for convergence, got {}",
                s
            )));
        }
        if terms == 0 {
            return Err(AnalysisError::validation("zeta sum needs at least one term"));
        }
        if prime_bound < 2 {
            return Err(AnalysisError::validation(format!(
                "Euler product needs a prime bound of at least 2, got {}",
                prime_bound
            )));
        }

        let sum_form = zeta_sum(s, terms);
        let product_form = zeta_euler_product(s, prime_bound);
        let exact = exact_zeta(s);
        tracing::debug!(s, sum_form, product_form, "computed zeta forms");

        Ok(Self {
            s,
            terms,
            prime_bound,
            sum_form,
            product_form,
            difference: (sum_form - product_form).abs(),
            exact,
            sum_error: exact.map(|e| (sum_form - e).abs()),
            product_error: exact.map(|e| (product_form - e).abs()),
        })
    }
}
