use hydrofreq_calendar::Month;
use hydrofreq_series::{PrecipitationRecord, SeriesError, YearRow};

fn row(year: i32, fill: f64) -> YearRow {
    YearRow::new(year, [Some(fill); 12])
}

#[test]
fn gap_years_become_missing_slots() {
    let record = PrecipitationRecord::new(vec![row(2003, 2.0), row(2001, 1.0)]).unwrap();

    assert_eq!(record.first_year(), 2001);
    assert_eq!(record.last_year(), 2003);
    assert_eq!(record.n_years(), 2);

    let slots = record.chronological();
    assert_eq!(slots.len(), 36);
    assert_eq!(slots[0], (2001, Month::Jan, Some(1.0)));
    assert!(slots[12..24].iter().all(|(y, _, v)| *y == 2002 && v.is_none()));
    assert_eq!(slots[35], (2003, Month::Dec, Some(2.0)));
    assert_eq!(record.n_present(), 24);
}

#[test]
fn entries_leave_unmentioned_months_missing() {
    let record = PrecipitationRecord::from_entries([
        (2010, Month::Jun, 12.5),
        (2010, Month::Jul, 0.0),
        (2011, Month::Jun, 30.0),
    ])
    .unwrap();

    assert_eq!(
        record.month_series(Month::Jun),
        vec![(2010, Some(12.5)), (2011, Some(30.0))]
    );
    assert_eq!(record.get(2011, Month::Jul), None);
    assert_eq!(record.get(2010, Month::Jul), Some(0.0));
}

#[test]
fn duplicate_entry_rejected() {
    let err = PrecipitationRecord::from_entries([(2010, Month::Jun, 1.0), (2010, Month::Jun, 2.0)])
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::DuplicateEntry {
            year: 2010,
            month: Month::Jun
        }
    );
}

#[test]
fn record_shared_across_threads() {
    let record = PrecipitationRecord::new(vec![row(2000, 3.0), row(2001, 4.0)]).unwrap();
    let totals: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = Month::ALL
            .iter()
            .map(|&m| {
                let r = &record;
                s.spawn(move || r.month_series(m).iter().filter_map(|(_, v)| *v).sum::<f64>())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(totals.iter().all(|t| (*t - 7.0).abs() < 1e-12));
}
