use super::*;
use time::macros::date;

// =============================================================
// BookingState
// =============================================================

#[test]
fn new_state_starts_on_given_day() {
    let state = BookingState::new(date!(2024 - 02 - 10));
    assert_eq!(state.current_date, date!(2024 - 02 - 10));
    assert_eq!(state.date_value(), "2024-02-10");
}

#[test]
fn pick_updates_label() {
    let mut state = BookingState::new(date!(2024 - 02 - 10));
    state.pick(date!(2024 - 03 - 01));
    assert_eq!(state.date_label(), "Friday, March 1, 2024");
    assert_eq!(state.date_value(), "2024-03-01");
}

#[test]
fn pick_accepts_past_dates() {
    let mut state = BookingState::new(date!(2024 - 06 - 01));
    state.pick(date!(1990 - 01 - 01));
    assert_eq!(state.current_date, date!(1990 - 01 - 01));
}

#[test]
fn pick_same_date_is_idempotent() {
    let mut state = BookingState::new(date!(2024 - 06 - 01));
    state.pick(date!(2024 - 06 - 01));
    assert_eq!(state, BookingState::new(date!(2024 - 06 - 01)));
}

// =============================================================
// Static data
// =============================================================

#[test]
fn default_slots_keep_display_order() {
    let times = default_time_slots().into_iter().map(|s| s.time).collect::<Vec<_>>();
    assert_eq!(
        times,
        ["09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM"]
    );
}

#[test]
fn default_slots_availability_flags() {
    let open = default_time_slots()
        .into_iter()
        .filter(TimeSlot::is_selectable)
        .map(|s| s.time)
        .collect::<Vec<_>>();
    assert_eq!(open, ["09:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "05:00 PM"]);
}

#[test]
fn doctor_profile_contents() {
    assert_eq!(DOCTOR.name, "Dr. Ajith");
    assert_eq!(DOCTOR.specialization, "General Physician");
    assert_eq!(DOCTOR.experience, "15+ years");
    assert_eq!(DOCTOR.availability, "Mon-Fri");
}
