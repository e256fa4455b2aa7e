/// Computes the arithmetic mean of a slice of values. Returns `None` for empty
/// input so an absent average never reads as zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Formats an average as `NN.NN%`, or an empty string when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => String::new(),
    }
}
