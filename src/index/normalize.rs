//! Min-max scaling of one indicator's values onto [0, 1].

use crate::catalog::Transform;

/// Finite (min, max) of a series, or `None` when fewer than two finite values
/// exist or they are all equal.
fn finite_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    let finite: Vec<f64> = values.iter().flatten().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < 2 {
        return None;
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min != max).then_some((min, max))
}

/// True when the series has no usable spread and normalizes to all zeros.
pub fn is_degenerate(values: &[Option<f64>]) -> bool {
    finite_range(values).is_none()
}

/// Scales `values` to [0, 1] with `(x - min) / (max - min)`, flipped when
/// lower is better.
///
/// Infinities are treated as missing. Missing inputs stay missing, except in
/// the degenerate case (under two finite values, or no variance) where every
/// position, missing ones included, becomes `0.0`.
pub fn normalize_series(values: &[Option<f64>], higher_is_better: bool) -> Vec<Option<f64>> {
    let Some((min, max)) = finite_range(values) else {
        return vec![Some(0.0); values.len()];
    };

    values
        .iter()
        .map(|v| {
            v.filter(|x| x.is_finite()).map(|x| {
                let scaled = (x - min) / (max - min);
                if higher_is_better { scaled } else { 1.0 - scaled }
            })
        })
        .collect()
}

/// Closeness-to-target score: `1 - |v - target|`, maximal at the target.
pub fn goodness(value: f64, target: f64) -> f64 {
    1.0 - (value - target).abs()
}

/// The series min-max scaling actually runs on: target indicators are
/// replaced by their closeness to the target, the others pass through.
pub fn scored_values(values: &[Option<f64>], transform: Transform) -> Vec<Option<f64>> {
    match transform {
        Transform::Target { value: target } => values
            .iter()
            .map(|v| v.map(|x| goodness(x, target)))
            .collect(),
        Transform::HigherIsBetter | Transform::LowerIsBetter => values.to_vec(),
    }
}

/// Applies the indicator's transform, then min-max scales.
pub fn normalize_indicator(values: &[Option<f64>], transform: Transform) -> Vec<Option<f64>> {
    let higher_is_better = !matches!(transform, Transform::LowerIsBetter);
    normalize_series(&scored_values(values, transform), higher_is_better)
}
