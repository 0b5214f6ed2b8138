//! Resources Section Component
//!
//! Resource cards with a type-selected icon; the type has no behavior
//! beyond the icon.

use leptos::prelude::*;

use super::{confirm_delete, load_list, run_mutation};
use crate::api::use_api;
use crate::models::{NewResource, Resource};

const RESOURCE_KINDS: &[(&str, &str)] = &[
    ("video", "Video"),
    ("article", "Article"),
    ("report", "Report"),
    ("tool", "Tool"),
    ("other", "Other"),
];

#[component]
pub fn ResourcesSection() -> impl IntoView {
    let api = use_api();

    let (resources, set_resources) = signal(Vec::<Resource>::new());
    let (reload, set_reload) = signal(0u32);

    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_kind, set_new_kind) = signal(String::from("video"));
    let (new_url, set_new_url) = signal(String::new());
    let (new_notes, set_new_notes) = signal(String::new());

    Effect::new(move |_| {
        let _ = reload.get();
        load_list(api, "/resources", "resources", set_resources);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = NewResource {
            title: new_title.get(),
            kind: new_kind.get(),
            url: new_url.get(),
            notes: new_notes.get(),
        };
        if body.title.is_empty() {
            return;
        }
        run_mutation(
            api.create("/resources", body),
            "Failed to add resource",
            move || {
                set_new_title.set(String::new());
                set_new_kind.set(String::from("video"));
                set_new_url.set(String::new());
                set_new_notes.set(String::new());
                set_adding.set(false);
                set_reload.update(|v| *v += 1);
            },
        );
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("resource") {
            return;
        }
        run_mutation(
            api.remove("/resources", id),
            "Failed to delete resource",
            move || set_reload.update(|v| *v += 1),
        );
    };

    let resource_card = move |resource: Resource| {
        let id = resource.id;
        let icon = resource.icon();
        view! {
            <div class="card resource-card">
                <div class="row-between">
                    <h5>{resource.title.clone()}</h5>
                    <span class="badge bg-secondary">{resource.kind.clone()}</span>
                </div>
                <p>{resource.notes.clone().unwrap_or_default()}</p>
                <div class="row-between">
                    <a href=resource.url.clone() target="_blank">
                        <i class=format!("bi {icon}")></i>
                        " Open"
                    </a>
                    <button on:click=move |_| on_delete(id)>"Delete"</button>
                </div>
            </div>
        }
    };

    view! {
        <section class="resources-section">
            <div class="row-between">
                <h4>"Resources"</h4>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Resource"</button>
            </div>

            {move || adding.get().then(|| view! {
                <form class="inline-form" on:submit=on_add>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_new_kind.set(event_target_value(&ev))>
                        {RESOURCE_KINDS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="url"
                        placeholder="URL"
                        prop:value=move || new_url.get()
                        on:input=move |ev| set_new_url.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Notes"
                        prop:value=move || new_notes.get()
                        on:input=move |ev| set_new_notes.set(event_target_value(&ev))
                    />
                    <button type="submit">"Save Resource"</button>
                </form>
            })}

            {move || {
                let all = resources.get();
                if all.is_empty() {
                    view! { <div class="alert alert-info">"No resources added yet."</div> }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {all.into_iter().map(resource_card).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
