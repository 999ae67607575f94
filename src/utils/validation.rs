use crate::utils::error::{PrinterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects negative arguments with the error the host surfaces verbatim.
pub fn validate_non_negative(value: i64) -> Result<()> {
    if value < 0 {
        return Err(PrinterError::InvalidArgument { value });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(PrinterError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrinterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
