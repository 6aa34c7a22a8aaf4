//! Home page: the record editor view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the snapshot subscription for its lifetime. It is opened once at mount
//! and cancelled at unmount; navigating away also abandons any edit in
//! progress.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::record_form::RecordForm;
use crate::components::record_list::RecordList;
use crate::components::sidebar::Sidebar;
use crate::components::toolbar::Toolbar;
use crate::net::service::RecordServiceHandle;
use crate::net::types::Record;
use crate::state::auth::AuthState;
use crate::state::editor::EditorState;
use crate::state::records::RecordsState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let records = expect_context::<RwSignal<RecordsState>>();
    let service = expect_context::<RecordServiceHandle>();

    install_unauth_redirect(auth, use_navigate());

    let subscription = service.observe(Arc::new(move |items: Vec<Record>| {
        records.update(|s| s.apply_snapshot(items));
    }));
    on_cleanup(move || {
        subscription.cancel();
        editor.update(EditorState::cancel);
    });

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to sign in..." }}</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <Toolbar/>
                <Sidebar/>
                <main class="home-page__main">
                    <h1>"My posts"</h1>
                    <RecordForm/>
                    <RecordList/>
                </main>
            </div>
        </Show>
    }
}
