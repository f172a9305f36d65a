//! Per-unit failure markers.

use std::fmt;

use hydrofreq_distribution::FitError;
use hydrofreq_return_period::ReturnPeriodError;
use hydrofreq_spi::SpiError;
use serde::Serialize;

/// Why a unit or lookup could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    InsufficientData,
    DegenerateSample,
    UnknownDistributionFamily,
    InvalidParameters,
    InvalidReturnPeriod,
    SaturatedProbability,
    InvalidInput,
}

impl FailureKind {
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::InsufficientData => "insufficient-data",
            FailureKind::DegenerateSample => "degenerate-sample",
            FailureKind::UnknownDistributionFamily => "unknown-distribution-family",
            FailureKind::InvalidParameters => "invalid-parameters",
            FailureKind::InvalidReturnPeriod => "invalid-return-period",
            FailureKind::SaturatedProbability => "saturated-probability",
            FailureKind::InvalidInput => "invalid-input",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure kind plus the error's message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&FitError> for UnitFailure {
    fn from(e: &FitError) -> Self {
        let kind = match e {
            FitError::InsufficientData { .. } => FailureKind::InsufficientData,
            FitError::DegenerateSample { .. } => FailureKind::DegenerateSample,
            FitError::UnknownDistributionFamily { .. } => FailureKind::UnknownDistributionFamily,
            FitError::InvalidParameters { .. } => FailureKind::InvalidParameters,
            FitError::NonFiniteSample { .. } | FitError::InvalidConfig { .. } => {
                FailureKind::InvalidInput
            }
        };
        Self {
            kind,
            message: e.to_string(),
        }
    }
}

impl From<&ReturnPeriodError> for UnitFailure {
    fn from(e: &ReturnPeriodError) -> Self {
        let kind = match e {
            ReturnPeriodError::InvalidReturnPeriod { .. } => FailureKind::InvalidReturnPeriod,
            ReturnPeriodError::SaturatedProbability { .. } => FailureKind::SaturatedProbability,
            ReturnPeriodError::NonFiniteValue { .. } | ReturnPeriodError::InvalidTolerance { .. } => {
                FailureKind::InvalidInput
            }
        };
        Self {
            kind,
            message: e.to_string(),
        }
    }
}

impl From<&SpiError> for UnitFailure {
    fn from(e: &SpiError) -> Self {
        match e {
            SpiError::Fit(fit) => Self::from(fit),
            SpiError::InvalidConfig { .. } => Self {
                kind: FailureKind::InvalidInput,
                message: e.to_string(),
            },
        }
    }
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
