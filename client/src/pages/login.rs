//! Login page: server URL, username and password exchanged for a token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::session::Credentials;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter server URL, username and password.";

/// Trim server and username and require all three fields. The password is
/// sent exactly as typed.
pub(crate) fn validate_credentials(server: &str, username: &str, password: &str) -> Result<Credentials, &'static str> {
    let server = server.trim();
    let username = username.trim();
    if server.is_empty() || username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials { server: server.to_owned(), username: username.to_owned(), password: password.to_owned() })
}

/// The discovered origin only lands in an untouched server field.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn prefill(current: &str, discovered: String) -> Option<String> {
    current.trim().is_empty().then_some(discovered)
}

pub(crate) fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let server = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Pre-fill the server field on mount; typing before discovery resolves wins.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let config = crate::config::ClientConfig::from_build_env();
            let page_url = crate::util::browser::current_page_url().unwrap_or_default();
            let discovered = crate::session::discovery::discover_default_server(
                &crate::net::transport::BrowserTransport,
                &config,
                &page_url,
            )
            .await;
            if let Some(value) = prefill(&server.get_untracked(), discovered) {
                server.set(value);
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials =
            match validate_credentials(&server.get_untracked(), &username.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let session = crate::session::BrowserSession::browser();
            if let Err(e) = session.log_in(&credentials, crate::util::browser::navigate_to).await {
                error.set(Some(e.to_string()));
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"Argo DNS Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Server URL"
                        <input
                            class="login-input"
                            type="text"
                            required
                            prop:value=move || server.get()
                            on:input=move |ev| server.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || loading.get()>
                        {move || submit_label(loading.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
