//! Full-page browser navigation.
//!
//! Login success leaves the SPA with a hard `location.href` assignment rather
//! than an in-app route change. SSR paths no-op.

/// Path the login page sends the browser to after a successful sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Replace the current document with `path`.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(path) {
                log::warn!("navigation to {path} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("skipping navigation to {path} outside the browser");
    }
}
