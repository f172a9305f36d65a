use hydrofreq_calendar::{Month, crosses_year_boundary, water_year};

#[test]
fn all_months_october_start() {
    // With an October start, Jan-Sep stay in the current year and Oct-Dec
    // roll into the next water year.
    for month in &Month::ALL[..9] {
        assert_eq!(
            water_year(2000, *month, Month::Oct),
            2000,
            "{month} with October start should return 2000"
        );
    }
    for month in &Month::ALL[9..] {
        assert_eq!(
            water_year(2000, *month, Month::Oct),
            2001,
            "{month} with October start should return 2001"
        );
    }
}

#[test]
fn all_start_months_fixed_date() {
    let year = 2000;
    let month = Month::Jun;

    // January start is the calendar year.
    assert_eq!(water_year(year, month, Month::Jan), 2000);

    for sm in &Month::ALL[1..6] {
        assert_eq!(
            water_year(year, month, *sm),
            2001,
            "start {sm}: June >= start, should return 2001"
        );
    }
    for sm in &Month::ALL[6..] {
        assert_eq!(
            water_year(year, month, *sm),
            2000,
            "start {sm}: June < start, should return 2000"
        );
    }
}

#[test]
fn ten_month_window_attributed_to_end_year() {
    // Sep-Jun window: every member month of the window ending June 2001
    // maps to 2001.
    let window = [
        (2000, Month::Sep),
        (2000, Month::Oct),
        (2000, Month::Nov),
        (2000, Month::Dec),
        (2001, Month::Jan),
        (2001, Month::Feb),
        (2001, Month::Mar),
        (2001, Month::Apr),
        (2001, Month::May),
        (2001, Month::Jun),
    ];
    for (year, month) in window {
        assert_eq!(water_year(year, month, Month::Sep), 2001);
    }
    let months: Vec<Month> = window.iter().map(|(_, m)| *m).collect();
    assert!(crosses_year_boundary(&months));
}

#[test]
fn names_parse_in_calendar_order() {
    let names = [
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
    let parsed: Vec<Month> = names
        .iter()
        .map(|n| Month::from_name(n).unwrap())
        .collect();
    assert_eq!(parsed, Month::ALL.to_vec());
}
