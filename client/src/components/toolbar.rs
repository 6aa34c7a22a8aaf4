//! Top bar with the app name, theme toggle, current user, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signing out ends the provider session (when one is configured) and clears
//! `AuthState`; the page's unauthenticated redirect takes it from there.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let on_sign_out = move |_| {
        let auth_base = config.auth_base.clone();
        leptos::task::spawn_local(async move {
            if let Some(auth_base) = auth_base {
                crate::net::api::sign_out(&auth_base).await;
            }
            auth.update(AuthState::sign_out);
        });
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__app-name">"Postdesk"</span>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| ui.update(|u| u.theme = dark_mode::toggle(u.theme))
            >
                {move || ui.with(|u| u.theme.toggle_glyph())}
            </button>
            <span class="toolbar__self">{move || auth.with(|a| a.display_name().to_owned())}</span>
            <button class="btn toolbar__sign-out" on:click=on_sign_out title="Sign out">
                "Sign out"
            </button>
        </header>
    }
}
