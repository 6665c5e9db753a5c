//! Grid of appointment time slots.
//!
//! Unavailable slots render disabled. Available slots are clickable but
//! selecting one has no effect yet; there is no booking flow behind them.

use leptos::prelude::*;

use crate::net::types::TimeSlot;

#[component]
pub fn TimeSlotPicker(#[prop(into)] slots: Signal<Vec<TimeSlot>>) -> impl IntoView {
    view! {
        <div class="slot-grid">
            {move || {
                slots
                    .get()
                    .into_iter()
                    .map(|slot| TimeSlotButton(TimeSlotButtonProps::builder().slot(slot).build()))
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn TimeSlotButton(slot: TimeSlot) -> impl IntoView {
    let selectable = slot.is_selectable();
    view! {
        <button
            class="slot"
            class:slot--available=selectable
            class:slot--unavailable={!selectable}
            type="button"
            disabled=!selectable
        >
            {slot.time}
        </button>
    }
}
