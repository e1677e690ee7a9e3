//! App root: runs the liveness check once and renders the matching screen.

use leptos::prelude::*;

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::{AuthState, Screen};

#[component]
pub fn RootPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let alive = crate::session::BrowserSession::browser().is_logged_in().await;
            auth.update(|s| s.status = crate::state::auth::LoginStatus::from_liveness(alive));
        });
    }

    view! {
        <div class="app">
            {move || match auth.get().status.screen() {
                Screen::Checking => view! { <div class="app-checking">"Checking login..."</div> }.into_any(),
                Screen::Login => view! { <LoginPage/> }.into_any(),
                Screen::Home => view! { <HomePage/> }.into_any(),
            }}
        </div>
    }
}
