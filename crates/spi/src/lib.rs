//! Standardized precipitation index (SPI) and drought categories.
//!
//! [`standardize`] fits a distribution to an aggregated series and maps each
//! total through the fitted CDF and the inverse standard normal CDF:
//!
//! ```text
//! p = clamp(F(x), ε, 1 − ε)
//! SPI = Φ⁻¹(p)
//! ```
//!
//! Each score is then classified into a [`DroughtCategory`]:
//!
//! | Category | Score |
//! |----------|-------|
//! | Very wet | ≥ 2.0 |
//! | Wet | ≥ 1.5 |
//! | Moderately wet | ≥ 0.5 |
//! | Moderately dry | ≥ −0.5 |
//! | Severely dry | ≥ −1.5 |
//! | Extremely dry | < −1.5 |

mod category;
mod config;
mod error;
mod standardize;

pub use category::{CategoryCounts, DroughtCategory};
pub use config::SpiConfig;
pub use error::SpiError;
pub use standardize::{SpiValue, standardize};
