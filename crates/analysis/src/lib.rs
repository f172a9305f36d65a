//! # hydrofreq-analysis
//!
//! Runs frequency analysis and SPI over every (window, family) unit of a
//! precipitation record and collects the results into an
//! [`AnalysisReport`].
//!
//! Each unit succeeds or fails on its own: a unit whose fit fails is kept in
//! the report as [`Outcome::NotComputable`] with a [`UnitFailure`], and the
//! remaining units are unaffected. Units are evaluated in parallel and
//! returned in (window, family) order.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `config` | [`AnalysisConfig`] |
//! | `failure` | [`FailureKind`], [`UnitFailure`] |
//! | `run` | [`run_analysis`] |
//! | `report` | [`AnalysisReport`] and per-unit result types |
//! | `rows` | flat export rows |
//! | `summary` | record and annual summaries |

mod config;
mod error;
mod failure;
mod report;
mod rows;
mod run;
mod summary;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use failure::{FailureKind, UnitFailure};
pub use report::{
    AnalysisReport, FrequencyFit, FrequencyUnit, InverseLookup, Outcome, SettingsSummary,
    SpiResult, SpiUnit,
};
pub use rows::{
    CategoryRow, CurveRow, FrequencyRow, HistogramRow, InverseRow, STATUS_NOT_COMPUTABLE,
    STATUS_OK, SpiRow,
};
pub use run::run_analysis;
pub use summary::{AnnualSummary, RecordSummary, annual_summary};
