//! Collapsible navigation panel.
//!
//! Purely presentational: one open flag in `UiState` and a static link list.

use leptos::prelude::*;

use crate::state::ui::{NAV_LINKS, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.nav_open);

    view! {
        <button
            class="btn sidebar-button"
            aria-label="Toggle navigation"
            on:click=move |_| ui.update(UiState::toggle_nav)
        >
            "☰"
        </button>
        <nav class="sidebar" class:sidebar--open=open>
            <div class="sidebar__header">
                <span class="sidebar__title">"Menu"</span>
                <button class="btn" aria-label="Close navigation" on:click=move |_| ui.update(UiState::toggle_nav)>
                    "☰"
                </button>
            </div>
            <ul class="sidebar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="sidebar__link" href=link.href>
                                    <span class="sidebar__icon" aria-hidden="true">{link.icon}</span>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
