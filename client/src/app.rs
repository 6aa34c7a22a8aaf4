//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::guest_user;
use crate::net::memory::MemoryRecordService;
use crate::net::service::RecordServiceHandle;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, editor::EditorState, records::RecordsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Uses the `RecordServiceHandle` from context when the host provides one.
/// Otherwise every render (each SSR request and each browser load) builds its
/// own `MemoryRecordService`: records do not survive a reload and separate
/// tabs never share a snapshot.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let service =
        use_context::<RecordServiceHandle>().unwrap_or_else(|| RecordServiceHandle::new(MemoryRecordService::new()));

    let auth = RwSignal::new(if config.auth_enabled() {
        AuthState::pending()
    } else {
        AuthState::signed_in(guest_user())
    });
    let editor = RwSignal::new(EditorState::default());
    let records = RwSignal::new(RecordsState::default());
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);

        if let Some(auth_base) = config.auth_base.clone() {
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user(&auth_base).await;
                auth.set(AuthState { user, loading: false });
            });
        }
    }

    provide_context(config);
    provide_context(service);
    provide_context(auth);
    provide_context(editor);
    provide_context(records);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/postdesk.css"/>
        <Title text="Postdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
