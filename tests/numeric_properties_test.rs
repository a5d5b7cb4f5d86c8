use prime_axioms::core::numeric::{divisor_count, from_digits, prime_count};
use prime_axioms::{
    digit_expansion, embed_number, is_intrinsic_prime, is_prime, zeta_euler_product, zeta_sum,
    AnalysisError,
};
use std::f64::consts::PI;

#[test]
fn test_prime_iff_exactly_two_divisors() {
    for n in 2..=2000u64 {
        assert_eq!(
            is_prime(n),
            divisor_count(n) == 2,
            "classification disagrees with divisor count for {}",
            n
        );
    }
    assert!(is_prime(7));
    assert!(!is_prime(12));
    assert!(is_prime(23));
}

#[test]
fn test_intrinsic_primality_matches_trial_division() {
    for n in -5..=500i64 {
        assert_eq!(
            is_intrinsic_prime(n, 10).unwrap(),
            n >= 2 && is_prime(n as u64),
            "n={}",
            n
        );
    }
    assert!(is_intrinsic_prime(7, 37).is_err());
}

#[test]
fn test_digit_expansion_reproduces_value() {
    for n in [1u64, 2, 7, 12, 23, 99, 100, 255, 1024, 65_537, u64::MAX] {
        for base in 2..=10 {
            let digits = digit_expansion(n, base).unwrap();
            assert_eq!(from_digits(&digits, base), Some(n), "n={} base={}", n, base);
        }
    }
    assert_eq!(digit_expansion(23, 2).unwrap(), vec![1, 0, 1, 1, 1]);
    assert_eq!(digit_expansion(23, 10).unwrap(), vec![2, 3]);
}

#[test]
fn test_known_prime_counts() {
    assert_eq!(prime_count(100), 25);
    assert_eq!(prime_count(200), 46);
}

#[test]
fn test_zeta_forms_approximate_pi_squared_over_six() {
    let exact = PI * PI / 6.0;
    let sum = zeta_sum(2.0, 1000);
    let product = zeta_euler_product(2.0, 100);

    assert!((sum - exact).abs() < 1e-2, "sum {} too far from {}", sum, exact);
    assert!((product - exact).abs() < 1e-2, "product {} too far from {}", product, exact);
    assert!((sum - product).abs() < 1e-2);
}

#[test]
fn test_embedding_rejects_non_natural_numbers() {
    assert!(matches!(
        embed_number(0, 10),
        Err(AnalysisError::ValidationError { .. })
    ));
    assert!(matches!(
        embed_number(-1, 10),
        Err(AnalysisError::ValidationError { .. })
    ));

    let one = embed_number(1, 10).unwrap();
    assert_eq!(one.nontrivial_divisor_count(), 0);
    assert!(!one.is_intrinsic_prime());
}
