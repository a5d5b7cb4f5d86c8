use crate::domain::model::{AnalysisReport, EmbeddingSummary};
use std::fmt::Write;

fn bracketed<T: std::fmt::Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

fn write_embedding(out: &mut String, summary: &EmbeddingSummary) {
    let _ = writeln!(out, "\nNumber {} embedded:", summary.value);
    for (base, digits) in &summary.expansions {
        let _ = writeln!(out, "  Base {}: {}", base, bracketed(digits.as_slice()));
    }
    let _ = writeln!(out, "  Coherence norm: {:.2}", summary.coherence_norm);
    let _ = writeln!(out, "  Is intrinsic prime: {}", summary.is_intrinsic_prime);
}

/// Human-readable walk through the report, section by section.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("=== Number Embedding Examples ===\n");
    for summary in &report.showcase {
        write_embedding(&mut out, summary);
    }

    if let Some(product) = &report.product {
        out.push_str("\n=== Multiplication in the Framework ===\n");
        let _ = writeln!(
            out,
            "Canonical Representation of {} * Canonical Representation of {} = Canonical Representation of {}",
            product.left, product.right, product.product.value
        );
    }

    let distribution = &report.distribution;
    out.push_str("\n=== Prime Distribution Analysis ===\n");
    let _ = writeln!(
        out,
        "First 10 primes in our framework: {}",
        bracketed(distribution.first_primes(10))
    );
    for checkpoint in &report.checkpoints {
        let _ = writeln!(
            out,
            "Number of primes up to {}: {}",
            checkpoint.bound, checkpoint.prime_count
        );
    }
    if let Some(last) = distribution.samples.last() {
        let _ = writeln!(
            out,
            "PNT estimate at {}: {:.2} (ratio {:.4})",
            last.x, last.pnt_estimate, last.ratio
        );
    }
    if let Some(worst) = distribution.worst_ratio() {
        let _ = writeln!(
            out,
            "Largest deviation from PNT at {}: π(x) = {}, ratio {:.4}",
            worst.x, worst.prime_count, worst.ratio
        );
    }

    let zeta = &report.zeta;
    out.push_str("\n=== Zeta Function Analysis ===\n");
    let _ = writeln!(out, "ζ({}) via sum: {:.8}", zeta.s, zeta.sum_form);
    let _ = writeln!(out, "ζ({}) via Euler product: {:.8}", zeta.s, zeta.product_form);
    let _ = writeln!(out, "Absolute difference: {:.8}", zeta.difference);
    if let (Some(exact), Some(sum_error), Some(product_error)) =
        (zeta.exact, zeta.sum_error, zeta.product_error)
    {
        let _ = writeln!(out, "Exact value ζ({}): {:.8}", zeta.s, exact);
        let _ = writeln!(out, "Error in sum approximation: {:.8}", sum_error);
        let _ = writeln!(out, "Error in product approximation: {:.8}", product_error);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distribution::analyze_prime_distribution;
    use crate::core::embedding::embed_number;
    use crate::domain::model::{ProductDemo, ZetaComparison};

    fn sample_report() -> AnalysisReport {
        let distribution = analyze_prime_distribution(200, 10).unwrap();
        let checkpoints = distribution.checkpoints(&[100, 200]);
        let three = embed_number(3, 10).unwrap();
        let five = embed_number(5, 10).unwrap();
        AnalysisReport {
            generated_at: chrono::Utc::now(),
            max_base: 10,
            showcase: [7, 12, 23]
                .iter()
                .map(|&n| embed_number(n, 10).unwrap().summary())
                .collect(),
            product: Some(ProductDemo {
                left: 3,
                right: 5,
                product: three.product(&five, 10).unwrap().summary(),
            }),
            distribution,
            checkpoints,
            zeta: ZetaComparison::compute(2.0, 1000, 100).unwrap(),
        }
    }

    #[test]
    fn test_render_sections() {
        let text = render_report(&sample_report());

        assert!(text.contains("Number 23 embedded:"));
        assert!(text.contains("  Base 2: [1, 0, 1, 1, 1]"));
        assert!(text.contains("  Base 10: [2, 3]"));
        assert!(text.contains("  Coherence norm: 13.20"));
        assert!(text.contains("= Canonical Representation of 15"));
        assert!(text.contains("First 10 primes in our framework: [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]"));
        assert!(text.contains("Number of primes up to 100: 25"));
        assert!(text.contains("Number of primes up to 200: 46"));
        assert!(text.contains("PNT estimate at 200: 37.75 (ratio 1.2186)"));
        assert!(text.contains("Exact value ζ(2): 1.64493407"));
    }

    #[test]
    fn test_render_reports_largest_deviation() {
        let report = sample_report();
        let worst = report.distribution.worst_ratio().unwrap();
        let text = render_report(&report);

        assert!(report
            .distribution
            .samples
            .iter()
            .all(|s| (s.ratio - 1.0).abs() <= (worst.ratio - 1.0).abs()));
        assert!(text.contains(&format!(
            "Largest deviation from PNT at {}: π(x) = {}, ratio {:.4}",
            worst.x, worst.prime_count, worst.ratio
        )));
    }
}
