use crate::{check_alpha, flatten_finite, DiversityError};
use log::debug;
use num_traits::AsPrimitive;

/// Default smoothing added to every value when the array contains a zero.
pub const DEFAULT_GINI_ALPHA: f64 = 1e-7;

/// Compute the Gini coefficient of a list of counts or frequencies.
///
/// 0 means every clonotype is equally abundant, values approaching 1 mean a
/// single clonotype holds all the mass. For n values the attainable maximum
/// is (n - 1) / n.
///
/// # Inputs
/// - `array`: counts/frequencies. If the minimum is negative, the minimum is
///   subtracted from every value so the smallest becomes zero. Only this
///   zero-floor shift is applied; the Gini coefficient is not shift invariant.
/// - `alpha`: added to every value when any value is zero after the shift.
///   `0.0` disables smoothing.
///
/// # Errors
/// - `EmptyInput` for an empty array.
/// - `NonFiniteValue` if any value is NaN or infinite.
/// - `InvalidAlpha` if `alpha` is negative or not finite.
/// - `ZeroTotal` / `NonFiniteResult` if the denominator vanishes or overflows.
///
/// # Example
/// ```rust
/// use clonality::{gini_index, DEFAULT_GINI_ALPHA};
/// let g = gini_index(&[5, 5, 5, 5], DEFAULT_GINI_ALPHA).unwrap();
/// assert!(g.abs() < 1e-12);
/// ```
pub fn gini_index<T: AsPrimitive<f64>>(array: &[T], alpha: f64) -> Result<f64, DiversityError> {
    check_alpha(alpha, true)?;
    let mut values = flatten_finite(array)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if min < 0.0 {
        for v in &mut values {
            *v -= min;
        }
    }
    if values.iter().any(|&v| v == 0.0) {
        debug!("gini_index: smoothing zero values with alpha = {alpha}");
        for v in &mut values {
            *v += alpha;
        }
    }
    values.sort_unstable_by(f64::total_cmp);

    let n = values.len() as f64;
    let total: f64 = values.iter().sum();
    if !total.is_finite() {
        return Err(DiversityError::NonFiniteResult);
    }
    if total == 0.0 {
        return Err(DiversityError::ZeroTotal);
    }

    // Ranks are 1-based: coefficient (2i - n - 1). Values are scaled by the
    // total first so neither the weighted sum nor the denominator overflows.
    let weighted: f64 = values
        .iter()
        .enumerate()
        .map(|(i, v)| (2.0 * (i + 1) as f64 - n - 1.0) * (v / total))
        .sum();
    let gini = weighted / n;
    if !gini.is_finite() {
        return Err(DiversityError::NonFiniteResult);
    }
    Ok(gini)
}
