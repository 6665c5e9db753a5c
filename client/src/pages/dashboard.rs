//! Booking dashboard: doctor profile, date picker, slot grid, and chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route after login and the composition root for the
//! booking UI. It owns the selected-date and slot signals, loads slots once
//! per mount through a `SchedulingClient`, and shares one `TaskScope` with the
//! chat widget so everything in flight is aborted when the page unmounts.

use std::sync::Arc;

use leptos::prelude::*;
use time::Date;

use crate::components::chat_widget::ChatWidget;
use crate::components::date_picker::DatePicker;
use crate::components::doctor_card::DoctorCard;
use crate::components::navbar::Navbar;
use crate::components::time_slot_picker::TimeSlotPicker;
use crate::net::api::{ChatClient, SchedulingClient};
use crate::net::stub::{StubChatClient, StubSchedulingClient};
use crate::state::booking::{BookingState, DOCTOR, default_time_slots};
use crate::util::date_value::today;
use crate::util::task_scope::TaskScope;

#[component]
pub fn DashboardPage(
    #[prop(optional)] scheduling: Option<Arc<dyn SchedulingClient>>,
    #[prop(optional)] chat_client: Option<Arc<dyn ChatClient>>,
) -> impl IntoView {
    let scheduling = scheduling.unwrap_or_else(|| Arc::new(StubSchedulingClient::default()));
    let chat_client = chat_client.unwrap_or_else(|| Arc::new(StubChatClient::default()));

    let booking = RwSignal::new(BookingState::new(today()));
    let slots = RwSignal::new(default_time_slots());

    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    // Slots are fetched once for the initial date; picks do not refetch.
    let initial_date = booking.get_untracked().current_date;
    scope.spawn(async move {
        match scheduling.available_slots(initial_date).await {
            Ok(loaded) => slots.set(loaded),
            Err(err) => log::warn!("slot load failed: {} ({err})", err.error_code()),
        }
    });

    let on_date_change = Callback::new(move |date: Date| booking.update(|b| b.pick(date)));
    let selected = Signal::derive(move || booking.with(|b| b.current_date));
    let date_label = move || booking.with(BookingState::date_label);

    view! {
        <div class="dashboard">
            <Navbar/>

            <main class="dashboard__content">
                <section class="card hero">
                    <h1 class="hero__title">"Welcome to Dr. AJ's Clinic"</h1>
                    <p class="hero__tagline">
                        "Your health is our priority. Book an appointment with Dr. Ajith today."
                    </p>
                    <button class="btn hero__cta" type="button">
                        "Book Appointment"
                        <span aria-hidden="true">" ›"</span>
                    </button>
                </section>

                <div class="dashboard__grid">
                    <DoctorCard profile=DOCTOR/>

                    <section class="card">
                        <h2 class="card__title">
                            <span aria-hidden="true">"🕒 "</span>
                            "Select Date"
                        </h2>
                        <DatePicker selected=selected on_change=on_date_change/>
                    </section>

                    <section class="card">
                        <h2 class="card__title">
                            <span aria-hidden="true">"🕒 "</span>
                            "Available Slots"
                        </h2>
                        <div class="slot-date">{date_label}</div>
                        <TimeSlotPicker slots=slots/>
                    </section>
                </div>
            </main>

            <ChatWidget client=chat_client scope=scope/>
        </div>
    }
}
