// Treats a missing or blank string as "not supplied"
pub fn non_empty(value: Option<String>) -> Option<String>{
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks a required text field and returns it trimmed.
/// Length is counted in characters, bounds are inclusive.
pub fn required_text(
    field: &str,
    value: Option<String>,
    min: usize,
    max: usize
) -> Result<String, String>{
    match non_empty(value) {
        Some(v) => bounded_text(field, v, min, max),
        None => Err(format!("{} is required", field))
    }
}

pub fn bounded_text(field: &str, value: String, min: usize, max: usize) -> Result<String, String>{
    let len = value.trim().chars().count();

    if len < min || len > max {
        return Err(format!("{} must be between {} and {} characters", field, min, max));
    }

    Ok(value.trim().to_string())
}

pub fn positive_price(field: &str, value: f64) -> Result<f64, String>{
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{} must be a positive number", field))
    }
}
