//! Calendar month enum.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// A calendar month, ordered January to December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

const FULL_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Builds a month from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `n` is outside 1..=12.
    pub fn from_number(n: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&n) {
            return Err(CalendarError::InvalidMonth { month: n });
        }
        Ok(Self::ALL[(n - 1) as usize])
    }

    /// Parses a full English month name or its three-letter abbreviation,
    /// ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownMonthName`] if nothing matches.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        let needle = name.trim().to_lowercase();
        FULL_NAMES
            .iter()
            .position(|full| {
                let full = full.to_lowercase();
                needle == full || (needle.len() == 3 && full.starts_with(&needle))
            })
            .map(|i| Self::ALL[i])
            .ok_or_else(|| CalendarError::UnknownMonthName {
                name: name.to_string(),
            })
    }

    /// 1-based month number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based index into month-indexed arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        FULL_NAMES[self.index()]
    }

    /// Three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        &FULL_NAMES[self.index()][..3]
    }

    /// The following month, wrapping December to January.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Accepts a month name, an abbreviation, or a number `1..=12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(n) => Self::from_number(n),
            Err(_) => Self::from_name(s),
        }
    }
}
