//! Field checks shared by the catalog services.

use crate::CoreError;

pub(crate) fn require_text(field: &str, value: &str, min_len: usize) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if trimmed.chars().count() < min_len {
        return Err(CoreError::Validation(format!(
            "{field} must have at least {min_len} characters"
        )));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rules() {
        assert!(require_text("name", "  ", 1).is_err());
        assert!(require_text("name", "A", 2).is_err());
        assert!(require_text("name", "Ab", 2).is_ok());
    }

    #[test]
    fn amount_rules() {
        assert!(require_non_negative("price", 0.0).is_ok());
        assert!(require_non_negative("price", -0.01).is_err());
        assert!(require_non_negative("price", f64::INFINITY).is_err());
        assert!(require_positive("price", 0.0).is_err());
        assert!(require_positive("price", 0.5).is_ok());
    }
}
