use super::*;
use time::macros::date;

// =============================================================
// format_date_value
// =============================================================

#[test]
fn format_date_value_zero_pads_month_and_day() {
    assert_eq!(format_date_value(date!(2024 - 03 - 01)), "2024-03-01");
}

#[test]
fn format_date_value_keeps_two_digit_fields() {
    assert_eq!(format_date_value(date!(2025 - 12 - 31)), "2025-12-31");
}

#[test]
fn format_date_value_pads_early_years() {
    assert_eq!(format_date_value(date!(987 - 07 - 04)), "0987-07-04");
}

// =============================================================
// parse_date_value
// =============================================================

#[test]
fn parse_date_value_reads_iso_date() {
    assert_eq!(parse_date_value("2024-03-01"), Ok(date!(2024 - 03 - 01)));
}

#[test]
fn parse_date_value_trims_whitespace() {
    assert_eq!(parse_date_value(" 2024-03-01 "), Ok(date!(2024 - 03 - 01)));
}

#[test]
fn parse_date_value_rejects_empty_value() {
    assert_eq!(parse_date_value(""), Err(ClinicError::InvalidDate(String::new())));
}

#[test]
fn parse_date_value_rejects_impossible_day() {
    assert!(matches!(parse_date_value("2023-02-29"), Err(ClinicError::InvalidDate(_))));
}

#[test]
fn parse_date_value_rejects_other_layouts() {
    assert!(parse_date_value("03/01/2024").is_err());
    assert!(parse_date_value("2024-3-1").is_err());
}

#[test]
fn parse_accepts_leap_day() {
    assert_eq!(parse_date_value("2024-02-29"), Ok(date!(2024 - 02 - 29)));
}

// =============================================================
// resolve_pick
// =============================================================

#[test]
fn resolve_pick_takes_valid_value() {
    assert_eq!(resolve_pick("2024-03-05", date!(2024 - 03 - 01)), date!(2024 - 03 - 05));
}

#[test]
fn resolve_pick_keeps_previous_when_cleared() {
    let previous = date!(2024 - 03 - 01);
    assert_eq!(resolve_pick("", previous), previous);
}

#[test]
fn resolve_pick_keeps_previous_on_garbage() {
    let previous = date!(2024 - 03 - 01);
    assert_eq!(resolve_pick("2024-02-30", previous), previous);
    assert_eq!(resolve_pick("tomorrow", previous), previous);
}

#[test]
fn kept_date_restores_the_control_value() {
    let previous = date!(2024 - 03 - 01);
    let kept = resolve_pick("", previous);
    assert_eq!(format_date_value(kept), "2024-03-01");
    assert_eq!(long_date_label(kept), "Friday, March 1, 2024");
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn parse_of_format_returns_same_date_across_years() {
    let mut day = date!(1999 - 12 - 25);
    let end = date!(2001 - 01 - 10);
    while day <= end {
        assert_eq!(parse_date_value(&format_date_value(day)), Ok(day), "round trip failed for {day}");
        day = day.next_day().expect("date in range");
    }
}

#[test]
fn today_round_trips_through_control_value() {
    let now = today();
    assert_eq!(parse_date_value(&format_date_value(now)), Ok(now));
}

// =============================================================
// long_date_label
// =============================================================

#[test]
fn long_date_label_matches_weekday_month_day_year() {
    assert_eq!(long_date_label(date!(2024 - 03 - 01)), "Friday, March 1, 2024");
}

#[test]
fn long_date_label_does_not_pad_day() {
    assert_eq!(long_date_label(date!(2025 - 01 - 05)), "Sunday, January 5, 2025");
}

#[test]
fn long_date_label_for_end_of_year() {
    assert_eq!(long_date_label(date!(2024 - 12 - 31)), "Tuesday, December 31, 2024");
}
