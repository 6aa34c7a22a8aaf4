//! Blocking user-facing notices for rejected form submissions.
//!
//! Outside the browser there is no dialog to raise, so the message is only
//! logged.

/// Show `message` to the user and block until it is dismissed.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    leptos::logging::warn!("alert: {message}");
}
