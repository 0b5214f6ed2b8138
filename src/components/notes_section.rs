//! Notes Section Component
//!
//! Note cards with truncated content; a view action fetches the single
//! note and shows the full content in a toggled panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{confirm_delete, load_list, run_mutation};
use crate::api::use_api;
use crate::models::{NewNote, Note};
use crate::summary::truncate_with_ellipsis;

const LIST_PREVIEW_CHARS: usize = 150;

#[component]
pub fn NotesSection() -> impl IntoView {
    let api = use_api();

    let (notes, set_notes) = signal(Vec::<Note>::new());
    let (reload, set_reload) = signal(0u32);

    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_content, set_new_content) = signal(String::new());

    // Full-content panel for a single fetched note.
    let (viewing, set_viewing) = signal(None::<Note>);

    Effect::new(move |_| {
        let _ = reload.get();
        load_list(api, "/notes", "notes", set_notes);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = NewNote {
            title: new_title.get(),
            content: new_content.get(),
        };
        if body.title.is_empty() {
            return;
        }
        run_mutation(api.create("/notes", body), "Failed to add note", move || {
            set_new_title.set(String::new());
            set_new_content.set(String::new());
            set_adding.set(false);
            set_reload.update(|v| *v += 1);
        });
    };

    let on_view = move |id: u32| {
        spawn_local(async move {
            match api.fetch_one::<Note>("/notes", id).await {
                Ok(note) => set_viewing.set(Some(note)),
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load note {id}: {err}").into());
                    gloo_dialogs::alert("Failed to load note");
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("note") {
            return;
        }
        run_mutation(api.remove("/notes", id), "Failed to delete note", move || {
            set_reload.update(|v| *v += 1);
        });
    };

    let note_card = move |note: Note| {
        let id = note.id;
        view! {
            <div class="card note-card">
                <h5>{note.title.clone()}</h5>
                <p>{truncate_with_ellipsis(&note.content, LIST_PREVIEW_CHARS)}</p>
                <div class="row-between">
                    <small class="muted">{format!("Last updated: {}", note.updated_at)}</small>
                    <div>
                        <button on:click=move |_| on_view(id)>"View"</button>
                        <button on:click=move |_| on_delete(id)>"Delete"</button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <section class="notes-section">
            <div class="row-between">
                <h4>"Notes"</h4>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Note"</button>
            </div>

            {move || adding.get().then(|| view! {
                <form class="inline-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Content"
                        prop:value=move || new_content.get()
                        on:input=move |ev| set_new_content.set(event_target_value(&ev))
                    />
                    <button type="submit">"Save Note"</button>
                </form>
            })}

            {move || viewing.get().map(|note| view! {
                <div class="card note-full">
                    <div class="row-between">
                        <h5>{note.title.clone()}</h5>
                        <button on:click=move |_| set_viewing.set(None)>"Close"</button>
                    </div>
                    <pre class="note-content">{note.content.clone()}</pre>
                </div>
            })}

            {move || {
                let all = notes.get();
                if all.is_empty() {
                    view! { <div class="alert alert-info">"No notes added yet."</div> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {all.into_iter().map(note_card).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
