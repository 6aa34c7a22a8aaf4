//! Create/edit form for a single record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `EditorState`. Submitting validates locally,
//! raises an alert on rejection, and otherwise hands the request to the data
//! service without waiting for it; the list updates from the next snapshot.

use leptos::prelude::*;

use crate::net::service::RecordServiceHandle;
use crate::net::types::Platform;
use crate::state::editor::{EditorState, dispatch};
use crate::util::alert::alert;
use crate::util::clock::{Clock, SystemClock};

/// Record editor form: title, body, schedule, platform tags.
#[component]
pub fn RecordForm() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let service = expect_context::<RecordServiceHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let now = SystemClock.now();
        match editor.try_update(|e| e.submit(now)) {
            Some(Ok(submission)) => {
                let service = service.clone();
                leptos::task::spawn_local(async move {
                    dispatch(&*service, submission).await;
                });
            }
            Some(Err(err)) => alert(&err.to_string()),
            None => {}
        }
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <input
                class="record-form__title"
                type="text"
                placeholder="Title"
                prop:value=move || editor.with(|e| e.title.clone())
                on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
            />
            <textarea
                class="record-form__body"
                placeholder="Body"
                prop:value=move || editor.with(|e| e.body.clone())
                on:input=move |ev| editor.update(|e| e.body = event_target_value(&ev))
            ></textarea>
            <div class="record-form__schedule">
                <input
                    type="date"
                    prop:value=move || editor.with(|e| e.date.clone())
                    on:input=move |ev| editor.update(|e| e.date = event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || editor.with(|e| e.time.clone())
                    on:input=move |ev| editor.update(|e| e.time = event_target_value(&ev))
                />
            </div>
            <div class="record-form__tags">
                {Platform::ALL.into_iter().map(|platform| view! { <TagToggle platform=platform/> }).collect_view()}
            </div>
            <div class="record-form__actions">
                <button class="btn record-form__submit" type="submit">
                    {move || editor.with(EditorState::submit_label)}
                </button>
                <Show when=move || editor.with(EditorState::is_editing)>
                    <button
                        class="btn record-form__cancel"
                        type="button"
                        on:click=move |_| editor.update(EditorState::cancel)
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}

/// Checkbox bound to one platform flag of the editor's tags.
#[component]
fn TagToggle(platform: Platform) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    view! {
        <label class="record-form__tag">
            <input
                type="checkbox"
                prop:checked=move || editor.with(|e| e.tags.get(platform))
                on:change=move |ev| {
                    let on = event_target_checked(&ev);
                    editor.update(|e| e.tags.set(platform, on));
                }
            />
            {platform.label()}
        </label>
    }
}
