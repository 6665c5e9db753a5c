//! Native date input bound to a calendar date.
//!
//! The control speaks `YYYY-MM-DD`; conversion goes through
//! `util::date_value` so the displayed label and the control value never
//! disagree. Cleared or malformed values are ignored, the previous date stays
//! selected, and its value is written back into the control.

use leptos::prelude::*;
use time::Date;

use crate::util::date_value::{format_date_value, resolve_pick};

/// Date input that reports picks through `on_change`.
#[component]
pub fn DatePicker(#[prop(into)] selected: Signal<Date>, on_change: Callback<Date>) -> impl IntoView {
    let on_input_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let previous = selected.get_untracked();
        let picked = resolve_pick(&raw, previous);
        if picked != previous {
            on_change.run(picked);
            return;
        }

        // `selected` did not change, so `prop:value` will not re-run.
        #[cfg(feature = "hydrate")]
        event_target::<web_sys::HtmlInputElement>(&ev).set_value(&format_date_value(previous));
    };

    view! {
        <input
            class="date-picker"
            type="date"
            prop:value=move || format_date_value(selected.get())
            on:change=on_input_change
        />
    }
}
