use crate::domain::model::Money;
use crate::utils::error::{DrillError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, amount: Money) -> Result<()> {
    if amount < Money::ZERO {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: amount.to_string(),
            reason: "Amount cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_known_names(field_name: &str, names: &[String], known: &[&str]) -> Result<()> {
    for name in names {
        if !known.contains(&name.as_str()) {
            return Err(DrillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!("Unknown name. Known names: {}", known.join(", ")),
            });
        }
    }
    Ok(())
}
