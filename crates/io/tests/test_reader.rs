//! Integration test: reading the precipitation table from disk.

use std::io::Write;
use std::path::Path;

use hydrofreq_calendar::Month;
use hydrofreq_io::{IoError, ReaderConfig, read_precipitation_csv};

#[test]
fn read_file_not_found() {
    let path = Path::new("/tmp/hydrofreq_test_nonexistent_file.csv");
    let err = read_precipitation_csv(path, &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_invalid_config_rejects_early() {
    let path = Path::new("/tmp/hydrofreq_test_nonexistent_file.csv");
    let config = ReaderConfig::default().with_delimiter(b'7');
    let err = read_precipitation_csv(path, &config).unwrap_err();
    // Fails on config validation before touching the filesystem.
    assert!(
        matches!(err, IoError::Validation { .. }),
        "expected Validation error, got {err:?}",
    );
}

#[test]
fn read_full_month_names_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "Year,January,February,March,April,May,June,July,August,September,October,November,December"
    )
    .unwrap();
    writeln!(file, "1991,10,20,30,40,50,60,70,80,90,100,110,120").unwrap();
    writeln!(file, "1990,1,2,3,4,5,6,7,8,9,10,11,").unwrap();
    file.flush().unwrap();

    let record = read_precipitation_csv(file.path(), &ReaderConfig::default()).unwrap();
    assert_eq!(record.n_years(), 2);
    assert_eq!(record.first_year(), 1990);
    assert_eq!(record.get(1991, Month::Jun), Some(60.0));
    assert_eq!(record.get(1990, Month::Dec), None);
    assert_eq!(record.n_present(), 23);
}

#[test]
fn read_rejects_huge_year_span() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec").unwrap();
    writeln!(file, "1,1,1,1,1,1,1,1,1,1,1,1,1").unwrap();
    writeln!(file, "100000000,1,1,1,1,1,1,1,1,1,1,1,1").unwrap();
    file.flush().unwrap();

    let err = read_precipitation_csv(file.path(), &ReaderConfig::default()).unwrap_err();
    assert!(
        matches!(
            err,
            IoError::Series(hydrofreq_series::SeriesError::YearSpanTooLarge { first: 1, .. })
        ),
        "expected YearSpanTooLarge, got {err:?}",
    );
}
