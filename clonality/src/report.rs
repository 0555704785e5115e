//! Per-repertoire summary of the diversity metrics.

use crate::{
    effective_diversity, gini_index, pielou_evenness, shannon_entropy, DiversityError,
    DiversityParameters,
};
use anyhow::Result;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Diversity summary of one repertoire, computed from per-clonotype counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClonalityMetrics {
    /// Number of entries in the count vector.
    pub num_clonotypes: usize,
    /// Sum of the raw counts.
    pub total_count: f64,
    /// Gini coefficient of the counts.
    pub gini_index: f64,
    /// Pielou's evenness of the counts.
    pub pielou_evenness: f64,
    /// `1 - pielou_evenness`
    pub clonality: f64,
    /// Shannon entropy in bits.
    pub shannon_entropy: f64,
    /// Inverse Simpson index.
    pub effective_diversity: f64,
}

impl ClonalityMetrics {
    /// Compute every metric over `counts` with the smoothing in `params`.
    pub fn compute<T: AsPrimitive<f64>>(
        counts: &[T],
        params: &DiversityParameters,
    ) -> Result<Self, DiversityError> {
        let pielou_evenness = pielou_evenness(counts, params.pielou_alpha)?;
        Ok(ClonalityMetrics {
            num_clonotypes: counts.len(),
            total_count: counts.iter().map(|&c| c.as_()).sum(),
            gini_index: gini_index(counts, params.gini_alpha)?,
            pielou_evenness,
            clonality: 1.0 - pielou_evenness,
            shannon_entropy: shannon_entropy(counts, params.pielou_alpha)?,
            effective_diversity: effective_diversity(counts)?,
        })
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compute() {
        let metrics =
            ClonalityMetrics::compute(&[10u32, 1], &DiversityParameters::default()).unwrap();
        assert_eq!(metrics.num_clonotypes, 2);
        assert_eq!(metrics.total_count, 11.0);
        assert_approx_eq!(metrics.pielou_evenness, 0.4394969869215134);
        assert_approx_eq!(metrics.clonality, 1.0 - 0.4394969869215134);
        // log2(2) = 1, so entropy equals evenness
        assert_approx_eq!(metrics.shannon_entropy, metrics.pielou_evenness);
        assert_approx_eq!(metrics.gini_index, 9.0 / 22.0);
        assert_approx_eq!(metrics.effective_diversity, 121.0 / 101.0);
    }

    #[test]
    fn test_compute_rejects_negative() {
        let err = ClonalityMetrics::compute(&[3.0, -2.0, 1.0], &DiversityParameters::default())
            .unwrap_err();
        assert_eq!(
            err,
            DiversityError::NegativeValue {
                index: 1,
                value: -2.0
            }
        );
    }

    #[test]
    fn test_json() -> Result<()> {
        let metrics = ClonalityMetrics::compute(&[5, 3, 0, 1], &DiversityParameters::default())?;
        let json = metrics.to_json()?;
        assert!(json.contains("\"pielou_evenness\""));
        let parsed: ClonalityMetrics = serde_json::from_str(&json)?;
        assert_eq!(parsed.num_clonotypes, 4);
        assert_approx_eq!(parsed.gini_index, metrics.gini_index, 1e-12);
        assert_approx_eq!(parsed.pielou_evenness, metrics.pielou_evenness, 1e-12);
        assert_approx_eq!(parsed.effective_diversity, metrics.effective_diversity, 1e-12);
        Ok(())
    }
}
