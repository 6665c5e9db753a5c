//! Appointment date selection and the doctor/slot display data.
//!
//! DESIGN
//! ======
//! `BookingState` is a one-variable state machine: `pick` replaces the date
//! unconditionally and every label is recomputed from it. Past dates are
//! accepted; nothing validates against the doctor's working days.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use time::Date;

use crate::net::types::TimeSlot;
use crate::util::date_value::{format_date_value, long_date_label};

/// Selected appointment date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingState {
    pub current_date: Date,
}

impl BookingState {
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self { current_date: today }
    }

    /// Replace the selected date.
    pub fn pick(&mut self, date: Date) {
        log::debug!("appointment date picked: {date}");
        self.current_date = date;
    }

    /// Value for the date input control.
    #[must_use]
    pub fn date_value(&self) -> String {
        format_date_value(self.current_date)
    }

    /// Long heading shown above the slot grid.
    #[must_use]
    pub fn date_label(&self) -> String {
        long_date_label(self.current_date)
    }
}

/// Static profile card contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorProfile {
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience: &'static str,
    pub availability: &'static str,
    pub photo: &'static str,
}

pub const DOCTOR: DoctorProfile = DoctorProfile {
    name: "Dr. Ajith",
    specialization: "General Physician",
    experience: "15+ years",
    availability: "Mon-Fri",
    photo: "dr.jpg",
};

/// Slots offered on every day.
#[must_use]
pub fn default_time_slots() -> Vec<TimeSlot> {
    [
        ("09:00 AM", true),
        ("10:00 AM", false),
        ("11:00 AM", true),
        ("12:00 PM", false),
        ("02:00 PM", true),
        ("03:00 PM", true),
        ("04:00 PM", false),
        ("05:00 PM", true),
    ]
    .into_iter()
    .map(|(time, available)| TimeSlot::new(time, available))
    .collect()
}
