//! Calendar date conversions for the native `<input type="date">` control.
//!
//! DESIGN
//! ======
//! Dates are calendar-only `time::Date` values with no time-of-day and no
//! offset. "Today" is read from the UTC clock once at mount; after that the
//! control value and the long display label are both derived from the same
//! `Date`, so a pick can never shift by a day between input and label.

#[cfg(test)]
#[path = "date_value_test.rs"]
mod date_value_test;

use time::Date;
use time::macros::format_description;

use crate::net::error::ClinicError;

/// Current calendar date in UTC.
#[must_use]
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

/// Format a date as the zero-padded `YYYY-MM-DD` value the date input expects.
#[must_use]
pub fn format_date_value(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse the raw value emitted by the date input.
///
/// # Errors
///
/// Returns [`ClinicError::InvalidDate`] when the value is empty (the user
/// cleared the control) or is not a real `YYYY-MM-DD` calendar date.
pub fn parse_date_value(raw: &str) -> Result<Date, ClinicError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClinicError::InvalidDate(raw.to_owned()));
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ClinicError::InvalidDate(raw.to_owned()))
}

/// Resolve a raw control value against the date currently selected.
///
/// A cleared or malformed value keeps `previous`.
#[must_use]
pub fn resolve_pick(raw: &str, previous: Date) -> Date {
    match parse_date_value(raw) {
        Ok(date) => date,
        Err(err) => {
            log::debug!("keeping {previous}: {} ({err:?})", err.error_code());
            previous
        }
    }
}

/// Long English label, e.g. `Friday, March 1, 2024`.
#[must_use]
pub fn long_date_label(date: Date) -> String {
    format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year())
}
