use crate::utils::error::{DemoError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, values: &[f64]) -> Result<()> {
    for value in values {
        if !value.is_finite() {
            return Err(DemoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value must be a finite number".to_string(),
            });
        }
    }
    Ok(())
}

/// Rejects values that still carry a `${VAR}` left behind by env substitution.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"\$\{[^}]+\}").map_err(|e| DemoError::ConfigError {
        message: format!("invalid placeholder pattern: {}", e),
    })?;
    if let Some(placeholder) = re.find(value) {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Environment variable in {} is not set", placeholder.as_str()),
        });
    }
    Ok(())
}
