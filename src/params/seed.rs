use crate::error::{AssistantError, Result};

/// Parse a free-form seed field.
///
/// Blank input means "no seed". Whole numbers (including forms such as `"1e3"`
/// or `"12.0"`) are accepted; anything else is a validation error on `seed`.
pub fn parse_seed(input: &str) -> Result<Option<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(seed) = trimmed.parse::<i64>() {
        return Ok(Some(seed));
    }
    match trimmed.parse::<f64>() {
        Ok(v)
            if v.is_finite()
                && v.fract() == 0.0
                && (i64::MIN as f64..=i64::MAX as f64).contains(&v) =>
        {
            Ok(Some(v as i64))
        }
        _ => Err(AssistantError::validation(
            "seed",
            "must be a whole number (integer)",
        )),
    }
}
