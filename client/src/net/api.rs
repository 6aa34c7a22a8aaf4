//! Authentication provider calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`, since the provider's session
//! cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so provider outages degrade
//! to the signed-out state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(auth_base: &str) -> String {
    format!("{auth_base}/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(auth_base: &str) -> String {
    format!("{auth_base}/logout")
}

/// Identity used when no authentication provider is configured.
pub fn guest_user() -> User {
    User { id: "guest".to_owned(), name: "Guest".to_owned(), email: None }
}

/// Fetch the signed-in user from `{auth_base}/me`.
/// Returns `None` if not signed in, on provider failure, or on the server.
pub async fn fetch_current_user(auth_base: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(&me_endpoint(auth_base)).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("auth lookup failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth_base;
        None
    }
}

/// End the provider session via `POST {auth_base}/logout`.
pub async fn sign_out(auth_base: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&logout_endpoint(auth_base)).send().await {
            leptos::logging::warn!("sign-out request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth_base;
    }
}
