//! Card for a single record in the live list.

use leptos::prelude::*;

use crate::net::types::{Record, RecordId};
use crate::state::records::RecordsState;
use crate::util::clock::{Clock, SystemClock};
use crate::util::schedule::format_for_card;

/// One record: title, (possibly truncated) body, schedule, tags, actions.
#[component]
pub fn RecordCard(
    record: Record,
    on_edit: Callback<Record>,
    on_delete: Callback<RecordId>,
    on_toggle: Callback<RecordId>,
) -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();

    let offset = SystemClock.now().offset();
    let schedule = record.date.map(|at| format!("Scheduled {}", format_for_card(at, offset)));
    let tags = record.tags.labels();

    let body = {
        let record = record.clone();
        move || records.with(|s| s.display_body(&record).into_owned())
    };
    let toggle_label = {
        let record = record.clone();
        move || records.with(|s| s.toggle_label(&record))
    };
    let toggle_id = record.id.clone();
    let delete_id = record.id.clone();
    let title = record.title.clone();

    view! {
        <li class="record-card">
            <h2 class="record-card__title">{title}</h2>
            <p class="record-card__body">{body}</p>
            {move || {
                toggle_label()
                    .map(|label| {
                        let id = toggle_id.clone();
                        view! {
                            <button
                                class="btn record-card__toggle"
                                on:click=move |_| on_toggle.run(id.clone())
                            >
                                {label}
                            </button>
                        }
                    })
            }}
            {schedule.map(|text| view! { <span class="record-card__date">{text}</span> })}
            <ul class="record-card__tags">
                {tags.into_iter().map(|tag| view! { <li class="record-card__tag">{tag}</li> }).collect_view()}
            </ul>
            <div class="record-card__actions">
                <button class="btn record-card__edit" on:click=move |_| on_edit.run(record.clone())>
                    "Edit"
                </button>
                <button
                    class="btn record-card__delete"
                    title="Delete record"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
