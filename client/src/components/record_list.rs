//! Live list of records rendered from the latest snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps `RecordsState` fed from the data-service subscription. This
//! component only renders it and turns card actions into editor updates,
//! fire-and-forget deletes, and expansion toggles.

use leptos::prelude::*;

use crate::components::record_card::RecordCard;
use crate::net::service::RecordServiceHandle;
use crate::net::types::{Record, RecordId};
use crate::state::editor::{EditorState, delete_record};
use crate::state::records::RecordsState;
use crate::util::clock::{Clock, SystemClock};

#[component]
pub fn RecordList() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let service = expect_context::<RecordServiceHandle>();

    let on_edit = Callback::new(move |record: Record| {
        let offset = SystemClock.now().offset();
        editor.update(|e| e.begin_edit(&record, offset));
    });
    let on_delete = Callback::new(move |id: RecordId| {
        let service = service.clone();
        leptos::task::spawn_local(async move {
            delete_record(&*service, id).await;
        });
    });
    let on_toggle = Callback::new(move |id: RecordId| records.update(|s| s.toggle_expanded(&id)));

    view! {
        <Show
            when=move || !records.with(|s| s.loading)
            fallback=|| view! { <p class="record-list__status">"Loading records..."</p> }
        >
            <Show
                when=move || records.with(|s| !s.items.is_empty())
                fallback=|| view! { <p class="record-list__status">"No records yet."</p> }
            >
                <ul class="record-list">
                    <For
                        each=move || records.with(|s| s.items.clone())
                        key=|record| (record.id.clone(), record.updated_at)
                        children=move |record| {
                            view! { <RecordCard record=record on_edit=on_edit on_delete=on_delete on_toggle=on_toggle/> }
                        }
                    />
                </ul>
            </Show>
        </Show>
    }
}
