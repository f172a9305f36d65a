//! Distribution family tag.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FitError;

/// Supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionFamily {
    /// Normal (Gaussian).
    Normal,
    /// Two-parameter Log-Normal with location fixed at zero.
    LogNormal,
    /// Gumbel, maxima form (right-skewed).
    Gumbel,
}

impl DistributionFamily {
    /// Every supported family, in reporting order.
    pub const ALL: [DistributionFamily; 3] = [
        DistributionFamily::Normal,
        DistributionFamily::LogNormal,
        DistributionFamily::Gumbel,
    ];

    /// Canonical lowercase tag.
    pub fn name(self) -> &'static str {
        match self {
            DistributionFamily::Normal => "normal",
            DistributionFamily::LogNormal => "log-normal",
            DistributionFamily::Gumbel => "gumbel",
        }
    }

    /// Whether samples for this family must be strictly positive.
    pub fn requires_positive(self) -> bool {
        matches!(self, DistributionFamily::LogNormal)
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionFamily {
    type Err = FitError;

    /// Parses a family tag, ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect();
        match key.as_str() {
            "normal" | "norm" | "gaussian" => Ok(DistributionFamily::Normal),
            "lognormal" | "lognorm" => Ok(DistributionFamily::LogNormal),
            "gumbel" | "gumbelr" | "ev1" => Ok(DistributionFamily::Gumbel),
            _ => Err(FitError::UnknownDistributionFamily {
                name: s.to_string(),
            }),
        }
    }
}
