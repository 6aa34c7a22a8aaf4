//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same values must be visible to the SSR build and the WASM bundle, so
//! they are read from the build environment with `option_env!` rather than at
//! runtime.
//!
//! - `POSTDESK_AUTH_BASE`: base path of the authentication provider
//!   (`{base}/me`, `{base}/logout`). Unset or empty disables the sign-in gate
//!   and signs everyone in as a local guest.
//! - `POSTDESK_SIGN_IN_URL`: hosted sign-in page. Default `/auth/sign-in`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SIGN_IN_URL: &str = "/auth/sign-in";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub auth_base: Option<String>,
    pub sign_in_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { auth_base: None, sign_in_url: DEFAULT_SIGN_IN_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Configuration baked into this build.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("POSTDESK_AUTH_BASE"), option_env!("POSTDESK_SIGN_IN_URL"))
    }

    pub(crate) fn from_values(auth_base: Option<&str>, sign_in_url: Option<&str>) -> Self {
        let auth_base = auth_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(str::to_owned);
        let sign_in_url = sign_in_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SIGN_IN_URL)
            .to_owned();
        Self { auth_base, sign_in_url }
    }

    /// Whether an authentication provider is configured.
    pub fn auth_enabled(&self) -> bool {
        self.auth_base.is_some()
    }
}
