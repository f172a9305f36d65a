use approx::assert_relative_eq;
use hydrofreq_aggregate::{AggregateOptions, WindowGroup, aggregate};
use hydrofreq_calendar::Month;
use hydrofreq_series::{PrecipitationRecord, YearRow};

/// Value encodes its origin: year * 100 + month number.
fn coded_record(first: i32, last: i32) -> PrecipitationRecord {
    let rows = (first..=last)
        .map(|y| {
            let values = std::array::from_fn(|i| Some(f64::from(y * 100) + i as f64 + 1.0));
            YearRow::new(y, values)
        })
        .collect();
    PrecipitationRecord::new(rows).unwrap()
}

fn coded(year: i32, month: Month) -> f64 {
    f64::from(year * 100) + f64::from(month.number())
}

#[test]
fn sep_jun_window_attributed_to_end_year() {
    let record = coded_record(2000, 2002);
    let window = WindowGroup::TenMonth.windows(Month::Oct).remove(0);
    let s = aggregate(&record, &window, &AggregateOptions::new()).unwrap();

    // 2000 lacks Sep-Dec 1999 and 2003 lacks Jan-Jun 2003: both trimmed.
    assert_eq!(s.years(), &[2001, 2002]);

    let expected: f64 = [Month::Sep, Month::Oct, Month::Nov, Month::Dec]
        .iter()
        .map(|&m| coded(2000, m))
        .chain(
            [Month::Jan, Month::Feb, Month::Mar, Month::Apr, Month::May, Month::Jun]
                .iter()
                .map(|&m| coded(2001, m)),
        )
        .sum();
    assert_relative_eq!(s.get(2001).unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn untrimmed_sep_jun_keeps_partial_years() {
    let record = coded_record(2000, 2001);
    let window = WindowGroup::TenMonth.windows(Month::Oct).remove(0);
    let opts = AggregateOptions::new().with_trim_partial_windows(false);
    let s = aggregate(&record, &window, &opts).unwrap();
    assert_eq!(s.years(), &[2000, 2001, 2002]);

    // 2000 only sees Jan-Jun 2000.
    let jan_jun_2000: f64 = (1..=6).map(|m| f64::from(2000 * 100 + m)).sum();
    assert_relative_eq!(s.get(2000).unwrap(), jan_jun_2000, epsilon = 1e-9);
    // 2002 only sees Sep-Dec 2001.
    let sep_dec_2001: f64 = (9..=12).map(|m| f64::from(2001 * 100 + m)).sum();
    assert_relative_eq!(s.get(2002).unwrap(), sep_dec_2001, epsilon = 1e-9);
}

#[test]
fn october_water_year() {
    let record = coded_record(1990, 1992);
    let window = WindowGroup::WaterYear.windows(Month::Oct).remove(0);
    let s = aggregate(&record, &window, &AggregateOptions::new()).unwrap();
    assert_eq!(s.years(), &[1991, 1992]);

    let expected: f64 = (10..=12)
        .map(|m| f64::from(1990 * 100 + m))
        .chain((1..=9).map(|m| f64::from(1991 * 100 + m)))
        .sum();
    assert_relative_eq!(s.get(1991).unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn calendar_windows_never_trimmed() {
    let record = coded_record(2000, 2002);
    for group in [WindowGroup::OneMonth, WindowGroup::ThreeMonth, WindowGroup::SixMonth, WindowGroup::TwelveMonth] {
        for window in group.windows(Month::Oct) {
            let s = aggregate(&record, &window, &AggregateOptions::new()).unwrap();
            assert_eq!(s.years(), &[2000, 2001, 2002], "{window}");
        }
    }
}

#[test]
fn output_ascending_without_duplicates() {
    let record = PrecipitationRecord::from_entries([
        (2005, Month::Jul, 3.0),
        (1999, Month::Jul, 1.0),
        (2002, Month::Aug, 2.0),
    ])
    .unwrap();
    let window = WindowGroup::SixMonth.windows(Month::Oct).remove(1);
    let s = aggregate(&record, &window, &AggregateOptions::new()).unwrap();
    assert_eq!(s.years(), &[1999, 2002, 2005]);
    assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
    assert_eq!(s.missing_years(), &[2000, 2001, 2003, 2004]);
}
