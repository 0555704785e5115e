//! Smoothing parameters for the diversity metrics, optionally read from a
//! TOML file such as
//!
//! ```toml
//! gini_alpha = 1e-7
//! pielou_alpha = 0.5
//! ```
//!
//! Missing keys keep their defaults.

use crate::{check_alpha, DEFAULT_GINI_ALPHA, DEFAULT_PIELOU_ALPHA};
use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smoothing parameters of the Gini and Pielou computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiversityParameters {
    /// Added to every value by `gini_index` when the array contains a zero.
    pub gini_alpha: f64,
    /// Fraction of the smallest nonzero frequency added to every value by
    /// `pielou_evenness` when the array contains a zero.
    pub pielou_alpha: f64,
}

/// Smoothing used when no parameters file overrides it.
pub const DEFAULT_PARAMETERS: DiversityParameters = DiversityParameters {
    gini_alpha: DEFAULT_GINI_ALPHA,
    pielou_alpha: DEFAULT_PIELOU_ALPHA,
};

impl Default for DiversityParameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

impl DiversityParameters {
    /// Parse and validate parameters from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let params: DiversityParameters = toml::from_str(s)?;
        params.validate()?;
        params.warn_non_default();
        Ok(params)
    }

    /// Read parameters from `path`, falling back to the defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "could not find {}, falling back to default diversity parameters",
                path.display()
            );
            return Ok(DEFAULT_PARAMETERS);
        }
        let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        Self::from_toml_str(&s).with_context(|| path.display().to_string())
    }

    /// Check that both smoothing values are accepted by the metrics.
    pub fn validate(&self) -> Result<()> {
        check_alpha(self.gini_alpha, true).context("gini_alpha must be finite and >= 0")?;
        check_alpha(self.pielou_alpha, false).context("pielou_alpha must be finite and > 0")?;
        Ok(())
    }

    fn warn_non_default(&self) {
        if self.gini_alpha != DEFAULT_PARAMETERS.gini_alpha {
            warn!("using non-default gini_alpha = {:?}", self.gini_alpha);
        }
        if self.pielou_alpha != DEFAULT_PARAMETERS.pielou_alpha {
            warn!("using non-default pielou_alpha = {:?}", self.pielou_alpha);
        }
    }
}
