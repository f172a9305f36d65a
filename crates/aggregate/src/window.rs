//! Aggregation windows and the preset window groups.

use std::fmt;
use std::str::FromStr;

use hydrofreq_calendar::{Month, crosses_year_boundary, water_year};
use serde::{Serialize, Serializer};

use crate::blocks::blocks;
use crate::error::AggregateError;

/// A named set of months summed into one total per year.
///
/// Months are listed in the order they occur. A window whose months wrap
/// past December is attributed to the year of its last month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationWindow {
    name: String,
    months: Vec<Month>,
}

impl AggregationWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::EmptyWindow`] if `months` is empty.
    /// - [`AggregateError::DuplicateMonth`] if a month appears twice.
    pub fn new(name: impl Into<String>, months: Vec<Month>) -> Result<Self, AggregateError> {
        let name = name.into();
        if months.is_empty() {
            return Err(AggregateError::EmptyWindow { name });
        }
        let mut seen = [false; 12];
        for &m in &months {
            if std::mem::replace(&mut seen[m.index()], true) {
                return Err(AggregateError::DuplicateMonth { name, month: m });
            }
        }
        Ok(Self { name, months })
    }

    /// Builds `len` consecutive months starting at `start`.
    pub(crate) fn span(name: String, start: Month, len: usize) -> Self {
        let months = std::iter::successors(Some(start), |m| Some(m.succ()))
            .take(len)
            .collect();
        Self { name, months }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Always `false`; a window has at least one month.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn contains(&self, month: Month) -> bool {
        self.months.contains(&month)
    }

    /// Whether the window wraps from December into January.
    pub fn crosses_year_boundary(&self) -> bool {
        crosses_year_boundary(&self.months)
    }

    /// Year to which the value of `(year, month)` contributes.
    pub fn attribution_year(&self, year: i32, month: Month) -> i32 {
        if self.crosses_year_boundary() {
            water_year(year, month, self.months[0])
        } else {
            year
        }
    }
}

impl fmt::Display for AggregationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for AggregationWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// A preset family of windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WindowGroup {
    /// Each calendar month on its own.
    OneMonth,
    /// Calendar quarters.
    ThreeMonth,
    /// Calendar halves.
    SixMonth,
    /// September through June.
    TenMonth,
    /// January through December.
    TwelveMonth,
    /// Twelve months from the configured water-year start.
    WaterYear,
    /// Consecutive blocks of this many months from January; see
    /// [`block_windows`](crate::block_windows). Build with
    /// [`WindowGroup::blocks`].
    Blocks(u8),
}

impl WindowGroup {
    /// The five calendar groups, in order of increasing length.
    pub const CALENDAR: [WindowGroup; 5] = [
        WindowGroup::OneMonth,
        WindowGroup::ThreeMonth,
        WindowGroup::SixMonth,
        WindowGroup::TenMonth,
        WindowGroup::TwelveMonth,
    ];

    /// Block group of `width` months.
    ///
    /// # Errors
    ///
    /// [`AggregateError::InvalidRollingWidth`] unless `width` is in `1..=12`.
    pub fn blocks(width: u8) -> Result<Self, AggregateError> {
        if (1..=12).contains(&width) {
            Ok(WindowGroup::Blocks(width))
        } else {
            Err(AggregateError::InvalidRollingWidth { width })
        }
    }

    /// Windows of this group. `water_year_start` is only read by
    /// [`WindowGroup::WaterYear`].
    pub fn windows(self, water_year_start: Month) -> Vec<AggregationWindow> {
        match self {
            WindowGroup::OneMonth => Month::ALL
                .iter()
                .map(|&m| AggregationWindow::span(m.name().to_string(), m, 1))
                .collect(),
            WindowGroup::ThreeMonth => [Month::Jan, Month::Apr, Month::Jul, Month::Oct]
                .iter()
                .enumerate()
                .map(|(i, &m)| AggregationWindow::span(format!("3-Month Q{}", i + 1), m, 3))
                .collect(),
            WindowGroup::SixMonth => [Month::Jan, Month::Jul]
                .iter()
                .enumerate()
                .map(|(i, &m)| AggregationWindow::span(format!("6-Month H{}", i + 1), m, 6))
                .collect(),
            WindowGroup::TenMonth => vec![AggregationWindow::span(
                "10-Month Sep-Jun".to_string(),
                Month::Sep,
                10,
            )],
            WindowGroup::TwelveMonth => vec![AggregationWindow::span(
                "12-Month Jan-Dec".to_string(),
                Month::Jan,
                12,
            )],
            WindowGroup::WaterYear => {
                let end = Month::ALL[(water_year_start.index() + 11) % 12];
                vec![AggregationWindow::span(
                    format!(
                        "12-Month {}-{}",
                        water_year_start.abbrev(),
                        end.abbrev()
                    ),
                    water_year_start,
                    12,
                )]
            }
            WindowGroup::Blocks(width) => blocks(width),
        }
    }
}

impl fmt::Display for WindowGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowGroup::OneMonth => f.write_str("1-month"),
            WindowGroup::ThreeMonth => f.write_str("3-month"),
            WindowGroup::SixMonth => f.write_str("6-month"),
            WindowGroup::TenMonth => f.write_str("10-month"),
            WindowGroup::TwelveMonth => f.write_str("12-month"),
            WindowGroup::WaterYear => f.write_str("water-year"),
            WindowGroup::Blocks(width) => write!(f, "{width}-month-blocks"),
        }
    }
}

impl Serialize for WindowGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for WindowGroup {
    type Err = AggregateError;

    /// Accepts the display tags, case-insensitively, plus `monthly`,
    /// `quarterly`, `half-year`, `annual` and `water year`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect();
        match key.as_str() {
            "1month" | "monthly" => Ok(WindowGroup::OneMonth),
            "3month" | "quarterly" => Ok(WindowGroup::ThreeMonth),
            "6month" | "halfyear" => Ok(WindowGroup::SixMonth),
            "10month" => Ok(WindowGroup::TenMonth),
            "12month" | "annual" => Ok(WindowGroup::TwelveMonth),
            "wateryear" => Ok(WindowGroup::WaterYear),
            _ => match key
                .strip_suffix("monthblocks")
                .and_then(|n| n.parse::<u8>().ok())
            {
                Some(width) => WindowGroup::blocks(width),
                None => Err(AggregateError::UnknownWindowGroup {
                    name: s.to_string(),
                }),
            },
        }
    }
}
