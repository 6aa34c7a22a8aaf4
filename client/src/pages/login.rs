//! Sign-in gate.
//!
//! With a provider configured this only links out to its hosted sign-in page;
//! credentials never pass through this crate. Without one, the visitor can
//! continue as the local guest.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::guest_user;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(|a| a.user.is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let sign_in = if config.auth_enabled() {
        view! { <a class="login-button" href=config.sign_in_url.clone()>"Sign in"</a> }.into_any()
    } else {
        view! {
            <button class="login-button" on:click=move |_| auth.set(AuthState::signed_in(guest_user()))>
                "Continue as guest"
            </button>
        }
        .into_any()
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Postdesk"</h1>
                <p class="login-card__subtitle">"Sign in to manage your posts"</p>
                {sign_in}
            </div>
        </div>
    }
}
