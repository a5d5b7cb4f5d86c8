//! Elementary arithmetic behind the demonstration: digit expansion,
//! trial-division divisor counting and the two truncated forms of ζ(s).
//!
//! Everything here works on primitive numeric types and has no side
//! effects, so the driver and the presentation layer can call it freely.

use crate::utils::error::{AnalysisError, Result};

/// Largest base whose digits still map onto `0-9a-z` when printed.
pub const MAX_SUPPORTED_BASE: u32 = 36;

/// Digits of `n` in `base`, most significant first. Zero expands to `[0]`.
pub fn digit_expansion(n: u64, base: u32) -> Result<Vec<u32>> {
    if !(2..=MAX_SUPPORTED_BASE).contains(&base) {
        return Err(AnalysisError::validation(format!(
            "base must be between 2 and {}, got {}",
            MAX_SUPPORTED_BASE, base
        )));
    }

    if n == 0 {
        return Ok(vec![0]);
    }

    let base = u64::from(base);
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push((rest % base) as u32);
        rest /= base;
    }
    digits.reverse();
    Ok(digits)
}

/// Reinterprets `digits` (most significant first) as Σ dᵢ·bⁱ.
///
/// Returns `None` if a digit is out of range for `base` or the value
/// overflows `u64`.
pub fn from_digits(digits: &[u32], base: u32) -> Option<u64> {
    if base < 2 {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, &d| {
        if d >= base {
            return None;
        }
        acc.checked_mul(u64::from(base))?.checked_add(u64::from(d))
    })
}

/// Floor of √n without going through floating point.
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    // f64 rounding can land one off in either direction for large n
    while root.checked_mul(root).is_none_or(|sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Total number of divisors of `n`, by trial division up to √n.
pub fn divisor_count(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    (1..=integer_sqrt(n))
        .filter(|i| n % i == 0)
        .map(|i| if i * i == n { 1 } else { 2 })
        .sum()
}

/// Divisors `d` of `n` with `1 <= d <= √n`.
pub fn small_divisor_count(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    (1..=integer_sqrt(n)).filter(|i| n % i == 0).count() as u64
}

/// Divisors other than 1 and `n` itself.
pub fn nontrivial_divisor_count(n: u64) -> u64 {
    match n {
        0 | 1 => 0,
        _ => divisor_count(n) - 2,
    }
}

/// True when some `d` in `2..=√n` divides `n`.
pub fn has_proper_factor(n: u64) -> bool {
    n > 1 && (2..=integer_sqrt(n)).any(|i| n % i == 0)
}

/// Trial-division primality.
pub fn is_prime(n: u64) -> bool {
    n >= 2 && !has_proper_factor(n)
}

/// Ad-hoc coherence score: `n` when the small divisor count is exactly 2,
/// otherwise `n` scaled by `1 + 0.1 * (count - 2)`.
pub fn coherence_norm(n: u64) -> f64 {
    let factors = small_divisor_count(n) as f64;
    let value = n as f64;
    if factors == 2.0 {
        value
    } else {
        value * (1.0 + 0.1 * (factors - 2.0))
    }
}

pub fn primes_up_to(bound: u64) -> Vec<u64> {
    (2..=bound).filter(|&n| is_prime(n)).collect()
}

/// π(x), the number of primes `<= x`.
pub fn prime_count(x: u64) -> usize {
    (2..=x).filter(|&n| is_prime(n)).count()
}

/// Prime Number Theorem estimate `x / ln(x)`.
pub fn pnt_estimate(x: f64) -> f64 {
    x / x.ln()
}

/// Truncated Dirichlet series Σₙ₌₁ᵗᵉʳᵐˢ n⁻ˢ.
pub fn zeta_sum(s: f64, terms: u64) -> f64 {
    (1..=terms).map(|n| (n as f64).powf(-s)).sum()
}

/// Truncated Euler product ∏ 1/(1 − p⁻ˢ) over primes `p <= prime_bound`.
pub fn zeta_euler_product(s: f64, prime_bound: u64) -> f64 {
    primes_up_to(prime_bound)
        .into_iter()
        .map(|p| 1.0 / (1.0 - (p as f64).powf(-s)))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_digit_expansion_examples() {
        assert_eq!(digit_expansion(23, 2).unwrap(), vec![1, 0, 1, 1, 1]);
        assert_eq!(digit_expansion(23, 10).unwrap(), vec![2, 3]);
        assert_eq!(digit_expansion(23, 3).unwrap(), vec![2, 1, 2]);
        assert_eq!(digit_expansion(0, 7).unwrap(), vec![0]);
    }

    #[test]
    fn test_digit_expansion_rejects_bad_base() {
        assert!(digit_expansion(10, 1).is_err());
        assert!(digit_expansion(10, 0).is_err());
        assert!(digit_expansion(10, 37).is_err());
    }

    #[test]
    fn test_expansion_reconstructs_value() {
        for n in 1..=500u64 {
            for base in 2..=10 {
                let digits = digit_expansion(n, base).unwrap();
                assert_eq!(from_digits(&digits, base), Some(n), "n={} base={}", n, base);
            }
        }
    }

    #[test]
    fn test_from_digits_rejects_out_of_range_digit() {
        assert_eq!(from_digits(&[1, 2], 2), None);
        assert_eq!(from_digits(&[], 10), Some(0));
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(15), 3);
        assert_eq!(integer_sqrt(16), 4);
        assert_eq!(integer_sqrt(u64::MAX), 4_294_967_295);
    }

    #[test]
    fn test_divisor_counts() {
        assert_eq!(divisor_count(1), 1);
        assert_eq!(divisor_count(12), 6);
        assert_eq!(divisor_count(36), 9);
        assert_eq!(small_divisor_count(12), 3);
        assert_eq!(small_divisor_count(7), 1);
        assert_eq!(nontrivial_divisor_count(1), 0);
        assert_eq!(nontrivial_divisor_count(12), 4);
        assert_eq!(nontrivial_divisor_count(23), 0);
    }

    #[test]
    fn test_primality_matches_divisor_count() {
        for n in 2..=1000u64 {
            assert_eq!(is_prime(n), divisor_count(n) == 2, "n={}", n);
        }
        assert!(is_prime(7));
        assert!(!is_prime(12));
        assert!(is_prime(23));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
    }

    #[test]
    fn test_prime_counts() {
        assert_eq!(prime_count(100), 25);
        assert_eq!(prime_count(200), 46);
        assert_eq!(primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_coherence_norm() {
        // Only 1 is a divisor below √7, so primes land under their value.
        assert!((coherence_norm(7) - 6.3).abs() < 1e-9);
        assert!((coherence_norm(12) - 13.2).abs() < 1e-9);
        // 4 has divisors 1 and 2 below its root.
        assert!((coherence_norm(4) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zeta_two_forms_agree() {
        let exact = PI * PI / 6.0;
        let sum = zeta_sum(2.0, 1000);
        let product = zeta_euler_product(2.0, 100);
        assert!((sum - exact).abs() < 1e-2);
        assert!((product - exact).abs() < 1e-2);
        assert!((sum - product).abs() < 1e-2);
        assert!(sum < exact);
        assert!(product < exact);
    }

    #[test]
    fn test_pnt_estimate() {
        let e = std::f64::consts::E;
        assert!((pnt_estimate(e) - e).abs() < 1e-12);
        assert!((pnt_estimate(100.0) - 21.714724).abs() < 1e-5);
    }
}
