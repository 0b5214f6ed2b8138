//! StudyDash App
//!
//! Root component: swaps between the auth view and the application shell,
//! and routes navigation to exactly one visible section panel. Switching
//! sections remounts the panel, so every navigation refetches.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{
    AchievementsSection, AuthView, Dashboard, LogsSection, NotesSection, ResourcesSection,
    SessionsSection, Sidebar, TasksSection,
};
use crate::section::Section;
use crate::session::SessionCtx;

/// Initial panel from the URL hash (`#tasks`), dashboard for anything
/// unrecognized.
fn initial_section() -> Section {
    let hash = window().location().hash().unwrap_or_default();
    Section::from_key(hash.trim_start_matches('#'))
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionCtx::new();
    provide_context(session);
    provide_context(ApiClient::new(session));

    let (section, set_section) = signal(initial_section());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || view! { <AuthView /> }
        >
            <div class="app-layout">
                <Sidebar current=section set_current=set_section />
                <main class="main-content">
                    <h1 id="section-title">{move || section.get().label()}</h1>
                    {move || match section.get() {
                        Section::Dashboard => view! { <Dashboard /> }.into_any(),
                        Section::Tasks => view! { <TasksSection /> }.into_any(),
                        Section::Sessions => view! { <SessionsSection /> }.into_any(),
                        Section::Resources => view! { <ResourcesSection /> }.into_any(),
                        Section::Notes => view! { <NotesSection /> }.into_any(),
                        Section::Achievements => view! { <AchievementsSection /> }.into_any(),
                        Section::Logs => view! { <LogsSection /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
