//! Sidebar Navigation Component
//!
//! One button per section plus logout. Clicking a section re-runs its load
//! routine by remounting the panel.

use leptos::prelude::*;

use crate::section::Section;
use crate::session::use_session;

#[component]
pub fn Sidebar(
    current: ReadSignal<Section>,
    set_current: WriteSignal<Section>,
) -> impl IntoView {
    let session = use_session();

    let on_logout = move |_| {
        session.clear();
        // Next login starts back on the dashboard.
        set_current.set(Section::Dashboard);
    };

    view! {
        <nav class="sidebar">
            <h2>"StudyDash"</h2>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let is_active = move || current.get() == section;
                    view! {
                        <button
                            class=move || if is_active() { "active" } else { "" }
                            on:click=move |_| {
                                let _ = window().location().set_hash(section.key());
                                set_current.set(section);
                            }
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
            <button class="logout-btn" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
