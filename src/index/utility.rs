/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Weighted arithmetic mean of `(value, weight)` pairs, dividing by the sum of
/// the weights given. Returns `None` when that sum is zero.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> Option<f64> {
    let mut weighted_total = 0.0;
    let mut weight_sum = 0.0;

    for (value, weight) in pairs {
        weighted_total += value * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        None
    } else {
        Some(weighted_total / weight_sum)
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
