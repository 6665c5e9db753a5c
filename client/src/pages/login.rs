//! Clinic login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates locally, then hands the credentials to an `AuthClient`.
//! On success the browser leaves the app with a full-page navigation to the
//! dashboard. The shipped client is a stub that accepts everything after a
//! short delay; there is no real authentication behind this page.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::net::stub::StubAuthClient;
use crate::state::login::LoginState;
use crate::util::navigation::hard_navigate;
use crate::util::task_scope::TaskScope;

#[component]
pub fn LoginPage(#[prop(optional)] client: Option<Arc<dyn AuthClient>>) -> impl IntoView {
    let client = client.unwrap_or_else(|| Arc::new(StubAuthClient::default()));
    let form = RwSignal::new(LoginState::default());

    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(credentials)) = form.try_update(LoginState::submit) else {
            return;
        };
        let client = client.clone();
        scope.spawn(async move {
            let result = client.login(&credentials).await;
            if let Some(path) = form.try_update(|f| f.complete(result)).flatten() {
                hard_navigate(path);
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Clinic Login"</h1>
                    <p class="login-card__subtitle">"Enter your credentials"</p>
                </div>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="login-remember">
                        <input type="checkbox" id="remember"/>
                        " Remember me"
                    </label>
                    <button
                        class="login-button"
                        class:login-button--busy=move || form.with(|f| f.loading)
                        type="submit"
                        disabled=move || form.with(|f| f.loading)
                    >
                        {move || form.with(LoginState::button_label)}
                    </button>
                </form>

                <div class="login-card__footer">
                    <a href="#" class="login-link">
                        "Forgot password?"
                    </a>
                </div>
            </div>
        </div>
    }
}
