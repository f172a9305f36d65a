//! Consecutive-month blocks within each calendar year.

use hydrofreq_calendar::Month;

use crate::error::AggregateError;
use crate::window::AggregationWindow;

/// Blocks of `width` consecutive months, starting in January and stepping by
/// `width`. When `width` does not divide 12, the last block is shorter and
/// ends in December (width 5 gives Jan–May, Jun–Oct, Nov–Dec). Blocks never
/// cross the year boundary.
///
/// # Errors
///
/// [`AggregateError::InvalidRollingWidth`] unless `width` is in `1..=12`.
pub fn block_windows(width: u8) -> Result<Vec<AggregationWindow>, AggregateError> {
    if !(1..=12).contains(&width) {
        return Err(AggregateError::InvalidRollingWidth { width });
    }
    Ok(blocks(width))
}

/// Unchecked variant for widths already known to be in `1..=12`; any other
/// width yields no blocks.
pub(crate) fn blocks(width: u8) -> Vec<AggregationWindow> {
    if !(1..=12).contains(&width) {
        return Vec::new();
    }
    Month::ALL
        .chunks(usize::from(width))
        .map(|months| {
            let first = months[0];
            let last = months[months.len() - 1];
            let name = if months.len() == 1 {
                format!("{width}-Month Block {}", first.abbrev())
            } else {
                format!("{width}-Month Block {}-{}", first.abbrev(), last.abbrev())
            };
            AggregationWindow::span(name, first, months.len())
        })
        .collect()
}
