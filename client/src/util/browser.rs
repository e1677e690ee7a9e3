//! `window.location` access. Requires a browser environment; off the
//! browser reads are empty and navigation is a no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Full URL of the current page.
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Full-page navigation, so the app root re-runs its liveness check.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("navigation to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
