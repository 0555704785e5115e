//! Shannon entropy based evenness of a clonotype frequency distribution.
//!
//! Pielou's index is the Shannon entropy of the distribution divided by the
//! largest entropy reachable with the same number of clonotypes, log2(n):
//!
//! ```text
//!          - sum_i p_i log2(p_i)
//!     J = -----------------------
//!               log2(n)
//! ```
//!
//! It is sensitive to the number of clonotypes. Its complement, `1 - J`, is
//! reported as the clonality of a repertoire.
//!
//! See Chiffelle et al. (2020), "T-cell repertoire analysis and metrics of
//! diversity and clonality", Current Opinion in Biotechnology 65, 284-295.

use crate::{check_alpha, check_non_negative, flatten_finite, DiversityError};
use log::{debug, warn};
use num_traits::AsPrimitive;

/// Default fraction of the smallest nonzero frequency added to every value
/// when the array contains a zero.
pub const DEFAULT_PIELOU_ALPHA: f64 = 0.5;

/// Results within this distance of 0 or 1 are treated as rounding error and
/// snapped onto the bound. Anything further out is an error.
pub const RANGE_TOLERANCE: f64 = 1e-12;

/// Compute Pielou's evenness index.
///
/// 0 means the repertoire is dominated by a single clonotype, 1 means all
/// clonotypes are equally frequent.
///
/// A single-element array is trivially even: 1 is returned and a warning is
/// logged.
///
/// If any frequency is zero, `alpha` times the smallest nonzero frequency is
/// added to every value before normalizing. With the default of 0.5 that is
/// half the smallest observed frequency.
///
/// # Errors
/// - `EmptyInput`, `NonFiniteValue`, `NegativeValue` for arrays that are not
///   a frequency distribution, and `ZeroTotal` if every value is zero.
/// - `InvalidAlpha` if `alpha` is not a positive finite number.
/// - `OutOfRange` if the computed index falls outside [0, 1].
///
/// # Example
/// ```rust
/// use clonality::{pielou_evenness, DEFAULT_PIELOU_ALPHA};
/// let j = pielou_evenness(&[10, 1], DEFAULT_PIELOU_ALPHA).unwrap();
/// assert!((j - 0.4394969869215134).abs() < 1e-12);
/// ```
pub fn pielou_evenness<T: AsPrimitive<f64>>(
    array: &[T],
    alpha: f64,
) -> Result<f64, DiversityError> {
    if array.len() == 1 {
        warn!("pielou_evenness() received input array of length 1, returning 1 by default");
        return Ok(1.0);
    }
    let probs = distribution(array, alpha)?;
    let evenness = entropy_bits(&probs) / (probs.len() as f64).log2();
    check_unit_interval(evenness)
}

/// Shannon entropy, in bits, of the distribution obtained by normalizing
/// `array`. Zero handling and validation match [`pielou_evenness`]. A single
/// value has zero entropy.
pub fn shannon_entropy<T: AsPrimitive<f64>>(
    array: &[T],
    alpha: f64,
) -> Result<f64, DiversityError> {
    let probs = distribution(array, alpha)?;
    let entropy = entropy_bits(&probs);
    if !entropy.is_finite() {
        return Err(DiversityError::NonFiniteResult);
    }
    Ok(entropy)
}

/// Clonality of a repertoire, `1 - pielou_evenness`.
pub fn clonality<T: AsPrimitive<f64>>(array: &[T], alpha: f64) -> Result<f64, DiversityError> {
    Ok(1.0 - pielou_evenness(array, alpha)?)
}

/// Validate, smooth zeros and normalize to probabilities summing to one.
fn distribution<T: AsPrimitive<f64>>(array: &[T], alpha: f64) -> Result<Vec<f64>, DiversityError> {
    check_alpha(alpha, false)?;
    let mut values = flatten_finite(array)?;
    check_non_negative(&values)?;

    if values.iter().any(|&v| v == 0.0) {
        let min_nonzero = values
            .iter()
            .copied()
            .filter(|&v| v > 0.0)
            .fold(f64::INFINITY, f64::min);
        if min_nonzero == f64::INFINITY {
            return Err(DiversityError::ZeroTotal);
        }
        let pseudocount = alpha * min_nonzero;
        debug!("smoothing zero frequencies with pseudocount {pseudocount}");
        for v in &mut values {
            *v += pseudocount;
        }
    }

    let total: f64 = values.iter().sum();
    if !total.is_finite() {
        return Err(DiversityError::NonFiniteResult);
    }
    for v in &mut values {
        *v /= total;
    }
    Ok(values)
}

/// 0 * log2(0) is taken as 0, which covers probabilities that underflow.
fn entropy_bits(probs: &[f64]) -> f64 {
    -probs
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

fn check_unit_interval(value: f64) -> Result<f64, DiversityError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else if (-RANGE_TOLERANCE..0.0).contains(&value) {
        Ok(0.0)
    } else if value > 1.0 && value <= 1.0 + RANGE_TOLERANCE {
        Ok(1.0)
    } else {
        Err(DiversityError::OutOfRange { value })
    }
}
