//! "Meet Your Doctor" profile card.

use leptos::prelude::*;

use crate::state::booking::DoctorProfile;

#[component]
pub fn DoctorCard(profile: DoctorProfile) -> impl IntoView {
    view! {
        <section class="card doctor-card">
            <h2 class="card__title">"Meet Your Doctor"</h2>
            <div class="doctor-card__body">
                <span class="avatar avatar--large">
                    <img src=profile.photo alt=profile.name/>
                </span>
                <h3 class="doctor-card__name">{profile.name}</h3>
                <span class="badge">{profile.specialization}</span>
                <div class="doctor-card__facts">
                    <div>
                        <span class="doctor-card__fact-label">"Experience:"</span>
                        " "
                        {profile.experience}
                    </div>
                    <div>
                        <span class="doctor-card__fact-label">"Available:"</span>
                        " "
                        {profile.availability}
                    </div>
                </div>
            </div>
        </section>
    }
}
