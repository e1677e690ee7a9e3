//! Home shell: header with the connected server, tab bar, placeholder panel.

use leptos::prelude::*;

use crate::session::{APP_ROOT, BrowserSession};
use crate::state::ui::{HomeTab, UiState};
use crate::util::browser::navigate_to;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let server = BrowserSession::browser().server().unwrap_or_default();

    // Full reload so the root re-runs the liveness check against empty storage.
    let on_logout = move |_| {
        BrowserSession::browser().log_out();
        navigate_to(APP_ROOT);
    };

    let tabs = HomeTab::ALL
        .into_iter()
        .map(|tab| {
            let class = move || {
                if ui.get().active_tab == tab { "tab-button tab-button--active" } else { "tab-button" }
            };
            view! {
                <button class=class on:click=move |_| ui.update(|s| s.active_tab = tab)>
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="homepage">
            <header class="homepage-header">
                <div class="homepage-header__left">
                    <span class="homepage-header__icon">"🏠"</span>
                    <a href="/" class="homepage-header__home">"Home"</a>
                    <span class="homepage-header__label">"Server URL"</span>
                    <span class="homepage-header__server">{server}</span>
                </div>
                <button class="logout-button" on:click=on_logout>"Logout"</button>
            </header>
            <nav class="homepage-tabs">{tabs}</nav>
            <main class="homepage-content">
                <div class="tab-panel">{move || ui.get().active_tab.placeholder()}</div>
            </main>
        </div>
    }
}
