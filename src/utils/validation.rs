use crate::utils::error::{AnalysisError, Result};

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Strict lower bound, used for the zeta exponent where `s = 1` diverges.
pub fn validate_greater_than(field_name: &str, value: f64, bound: f64) -> Result<()> {
    if !value.is_finite() || value <= bound {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be a finite number greater than {}", bound),
        });
    }
    Ok(())
}

pub fn validate_natural_numbers(field_name: &str, values: &[i64]) -> Result<()> {
    if let Some(bad) = values.iter().find(|v| **v < 1) {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bad.to_string(),
            reason: "Only natural numbers >= 1 can be embedded".to_string(),
        });
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(AnalysisError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(AnalysisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("distribution.max_n", 200, 2).is_ok());
        assert!(validate_positive_number("distribution.max_n", 1, 2).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("embedding.max_base", 10, 2, 36).is_ok());
        assert!(validate_range("embedding.max_base", 1, 2, 36).is_err());
        assert!(validate_range("embedding.max_base", 37, 2, 36).is_err());
    }

    #[test]
    fn test_validate_greater_than() {
        assert!(validate_greater_than("zeta.s", 2.0, 1.0).is_ok());
        assert!(validate_greater_than("zeta.s", 1.0, 1.0).is_err());
        assert!(validate_greater_than("zeta.s", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_validate_natural_numbers() {
        assert!(validate_natural_numbers("embedding.showcase", &[7, 12, 23]).is_ok());
        assert!(validate_natural_numbers("embedding.showcase", &[7, 0]).is_err());
        assert!(validate_natural_numbers("embedding.showcase", &[]).is_ok());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_output_formats("output.formats", &formats).is_ok());

        let invalid = vec!["png".to_string()];
        assert!(validate_output_formats("output.formats", &invalid).is_err());
        assert!(validate_output_formats("output.formats", &[]).is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("monitoring.log_level", "warn").is_ok());
        assert!(validate_log_level("monitoring.log_level", "verbose").is_err());
        assert!(validate_log_level("monitoring.log_level", "INFO").is_err());
    }
}
