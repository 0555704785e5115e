//! clonality
//!
//! Diversity and inequality metrics over clonotype (or species) abundance
//! vectors: the Gini index, Pielou's evenness and the derived clonality score,
//! Shannon entropy and the effective diversity (inverse Simpson index).
//!
//! Every metric validates its input and returns a [`DiversityError`] instead
//! of a plausible-looking wrong number.
#![deny(missing_docs)]
#![deny(future_incompatible, nonstandard_style, rust_2018_idioms)]

mod errors;
mod gini;
pub mod parameters;
mod pielou;
pub mod report;

pub use errors::DiversityError;
pub use gini::{gini_index, DEFAULT_GINI_ALPHA};
pub use parameters::DiversityParameters;
pub use pielou::{
    clonality, pielou_evenness, shannon_entropy, DEFAULT_PIELOU_ALPHA, RANGE_TOLERANCE,
};
pub use report::ClonalityMetrics;

use num_traits::AsPrimitive;

/// Compute the effective diversity (inverse Simpson index) of a distribution of counts.
///
/// This is the number of equally abundant clonotypes that would give the same
/// concentration as the observed counts: n identical counts give n.
pub fn effective_diversity<T: AsPrimitive<f64>>(array: &[T]) -> Result<f64, DiversityError> {
    let values = flatten_finite(array)?;
    check_non_negative(&values)?;
    // inverse Simpson index
    let mut s = 0_f64;
    let mut s2 = 0_f64;
    for count in values {
        s += count;
        s2 += count.powi(2);
    }
    if s == 0_f64 {
        return Err(DiversityError::ZeroTotal);
    }
    let diversity = s.powi(2) / s2;
    if !diversity.is_finite() {
        return Err(DiversityError::NonFiniteResult);
    }
    Ok(diversity)
}

/// Copy the values into a fresh `f64` buffer, rejecting empty input and
/// NaN or infinite entries.
pub(crate) fn flatten_finite<T: AsPrimitive<f64>>(
    array: &[T],
) -> Result<Vec<f64>, DiversityError> {
    if array.is_empty() {
        return Err(DiversityError::EmptyInput);
    }
    array
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            let value: f64 = v.as_();
            if value.is_finite() {
                Ok(value)
            } else {
                Err(DiversityError::NonFiniteValue { index, value })
            }
        })
        .collect()
}

pub(crate) fn check_non_negative(values: &[f64]) -> Result<(), DiversityError> {
    match values.iter().position(|&v| v < 0.0) {
        Some(index) => Err(DiversityError::NegativeValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// `alpha` must be finite and positive; zero is accepted only when
/// `allow_zero` is set.
pub(crate) fn check_alpha(alpha: f64, allow_zero: bool) -> Result<(), DiversityError> {
    let valid = alpha.is_finite() && (alpha > 0.0 || (allow_zero && alpha == 0.0));
    if valid {
        Ok(())
    } else {
        Err(DiversityError::InvalidAlpha { alpha })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_effective_diversity() {
        assert_approx_eq!(effective_diversity(&[5, 5, 5, 5]).unwrap(), 4.0);
        assert_approx_eq!(effective_diversity(&[1, 0, 0]).unwrap(), 1.0);
        // (3 + 1)^2 / (9 + 1)
        assert_approx_eq!(effective_diversity(&[3u64, 1]).unwrap(), 1.6);
    }

    #[test]
    fn test_effective_diversity_errors() {
        assert_eq!(effective_diversity(&[0, 0]), Err(DiversityError::ZeroTotal));
        assert_eq!(
            effective_diversity(&[2.0, -1.0]),
            Err(DiversityError::NegativeValue {
                index: 1,
                value: -1.0
            })
        );
        let empty: [u32; 0] = [];
        assert_eq!(effective_diversity(&empty), Err(DiversityError::EmptyInput));
    }

    #[test]
    fn test_check_alpha() {
        assert!(check_alpha(1e-7, false).is_ok());
        assert!(check_alpha(0.0, true).is_ok());
        assert!(check_alpha(0.0, false).is_err());
        assert!(check_alpha(f64::NAN, true).is_err());
        assert!(check_alpha(f64::INFINITY, true).is_err());
        assert!(check_alpha(-0.5, true).is_err());
    }

    #[test]
    fn test_flatten_finite() {
        assert_eq!(flatten_finite(&[1u8, 2, 3]).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            flatten_finite(&[1.0, f64::NEG_INFINITY]),
            Err(DiversityError::NonFiniteValue {
                index: 1,
                value: f64::NEG_INFINITY
            })
        );
    }

    proptest! {
        #[test]
        fn prop_effective_diversity_bounded(counts in vec(1u32..10_000, 1..200)) {
            let d = effective_diversity(&counts).unwrap();
            prop_assert!(d >= 1.0 - 1e-9 && d <= counts.len() as f64 + 1e-9, "d = {}", d);
        }
    }
}
