//! Top navigation bar with clinic branding.

use leptos::prelude::*;

/// Static navigation chrome. The buttons are placeholders with no routes yet.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"👤"</span>
                "Dr. AJ's Clinic"
            </div>
            <div class="navbar__actions">
                <button class="btn btn--ghost navbar__link" type="button">
                    <span aria-hidden="true">"⌂"</span>
                    " Home"
                </button>
                <button class="btn btn--ghost navbar__link" type="button">
                    <span aria-hidden="true">"📖"</span>
                    " Your Bookings"
                </button>
                <span class="avatar navbar__avatar" title="Account">"👤"</span>
            </div>
        </nav>
    }
}
