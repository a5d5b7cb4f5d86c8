use crate::core::numeric::{self, MAX_SUPPORTED_BASE};
use crate::domain::model::{EmbeddingSummary, NumberEmbedding};
use crate::utils::error::{AnalysisError, Result};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_BASE: u32 = 10;

/// Embeds `n` by expanding it in every base `2..=max_base`.
///
/// Only natural numbers `>= 1` can be embedded.
pub fn embed_number(n: i64, max_base: u32) -> Result<NumberEmbedding> {
    if n < 1 {
        return Err(AnalysisError::validation(format!(
            "only natural numbers >= 1 can be embedded, got {}",
            n
        )));
    }
    if !(2..=MAX_SUPPORTED_BASE).contains(&max_base) {
        return Err(AnalysisError::validation(format!(
            "max_base must be between 2 and {}, got {}",
            MAX_SUPPORTED_BASE, max_base
        )));
    }

    let value = n as u64;
    let mut expansions = BTreeMap::new();
    for base in 2..=max_base {
        expansions.insert(base, numeric::digit_expansion(value, base)?);
    }

    tracing::trace!(value, max_base, "embedded number");
    Ok(NumberEmbedding {
        value,
        max_base,
        expansions,
    })
}

/// `n > 1` whose embedding admits no nontrivial factorization.
///
/// Numbers `<= 1` are never prime; an invalid `max_base` is reported
/// rather than read as "not prime".
pub fn is_intrinsic_prime(n: i64, max_base: u32) -> Result<bool> {
    if n <= 1 {
        return Ok(false);
    }
    Ok(embed_number(n, max_base)?.is_intrinsic_prime())
}

impl NumberEmbedding {
    pub fn digits(&self, base: u32) -> Option<&[u32]> {
        self.expansions.get(&base).map(Vec::as_slice)
    }

    /// Value recovered from the stored digits of `base`.
    pub fn reconstruct(&self, base: u32) -> Option<u64> {
        numeric::from_digits(self.digits(base)?, base)
    }

    pub fn divisor_count(&self) -> u64 {
        numeric::divisor_count(self.value)
    }

    pub fn nontrivial_divisor_count(&self) -> u64 {
        numeric::nontrivial_divisor_count(self.value)
    }

    pub fn coherence_norm(&self) -> f64 {
        numeric::coherence_norm(self.value)
    }

    /// 1 is neither prime nor factorizable.
    pub fn is_factorizable(&self) -> bool {
        numeric::has_proper_factor(self.value)
    }

    pub fn is_intrinsic_prime(&self) -> bool {
        self.value > 1 && !self.is_factorizable()
    }

    /// Multiplies the embedded values and embeds the product.
    pub fn product(&self, other: &NumberEmbedding, max_base: u32) -> Result<NumberEmbedding> {
        let value = self
            .value
            .checked_mul(other.value)
            .and_then(|v| i64::try_from(v).ok())
            .ok_or_else(|| {
                AnalysisError::processing(format!(
                    "product {} * {} does not fit in a signed 64-bit integer",
                    self.value, other.value
                ))
            })?;
        embed_number(value, max_base)
    }

    pub fn summary(&self) -> EmbeddingSummary {
        EmbeddingSummary {
            value: self.value,
            expansions: self.expansions.clone(),
            divisor_count: self.divisor_count(),
            nontrivial_divisor_count: self.nontrivial_divisor_count(),
            coherence_norm: self.coherence_norm(),
            is_intrinsic_prime: self.is_intrinsic_prime(),
        }
    }
}

impl std::fmt::Display for NumberEmbedding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Canonical Representation of {}", self.value)
    }
}
