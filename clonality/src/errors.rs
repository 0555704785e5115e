/// Failures while computing a diversity metric.
///
/// Every variant except [`DiversityError::OutOfRange`] means the input (or the
/// smoothing parameter) could not describe a frequency distribution.
/// `OutOfRange` is a failed postcondition and points at corrupted upstream data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiversityError {
    /// The input array has no elements.
    #[error("cannot compute a diversity metric of an empty array")]
    EmptyInput,

    /// A frequency is below zero.
    #[error("found negative frequency {value} at index {index}; frequencies must be >= 0")]
    NegativeValue {
        /// Position in the input array.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An input value is NaN or infinite.
    #[error("found non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Position in the input array.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Every value is zero, so no distribution can be formed.
    #[error("the values sum to zero, so no distribution can be formed")]
    ZeroTotal,

    /// The smoothing parameter is outside its accepted range.
    #[error("invalid smoothing parameter alpha = {alpha}")]
    InvalidAlpha {
        /// The rejected smoothing value.
        alpha: f64,
    },

    /// A sum or ratio overflowed or became NaN.
    #[error("intermediate computation produced a non-finite value; check input magnitudes")]
    NonFiniteResult,

    /// The computed index lies outside [0, 1].
    #[error("computed index {value} lies outside [0, 1], check input values")]
    OutOfRange {
        /// The computed index.
        value: f64,
    },
}

impl DiversityError {
    /// True for every variant that rejects the input itself, as opposed to a
    /// failed range check on the result.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, DiversityError::OutOfRange { .. })
    }
}
