//! Dashboard Component
//!
//! Four read-only fetches issued concurrently on mount, each reduced into
//! its own store field and rendered into its own region. A failed fetch
//! leaves its region in the empty state and never disturbs the other
//! three.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::use_api;
use crate::format::{short_date, short_time, today_string};
use crate::models::{DailyLog, Mood, Note, StudySession, Task};
use crate::store::{DashboardState, DashboardStateStoreFields, DashboardStore};
use crate::summary::{
    mood_histogram, recent_notes, recent_tasks, todays_sessions, truncate_with_ellipsis,
};

const DASHBOARD_NOTE_CHARS: usize = 100;

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let store: DashboardStore = Store::new(DashboardState::default());

    // Four independent loads; completion order is unconstrained.
    Effect::new(move |_| {
        spawn_local(async move {
            match api.list::<Task>("/tasks").await {
                Ok(tasks) => *store.recent_tasks().write() = recent_tasks(&tasks),
                Err(err) => {
                    web_sys::console::error_1(&format!("dashboard tasks load: {err}").into())
                }
            }
        });
        spawn_local(async move {
            match api.list::<StudySession>("/sessions").await {
                Ok(sessions) => {
                    *store.todays_sessions().write() =
                        todays_sessions(&sessions, &today_string());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("dashboard sessions load: {err}").into())
                }
            }
        });
        spawn_local(async move {
            match api.list::<Note>("/notes").await {
                Ok(notes) => *store.recent_notes().write() = recent_notes(&notes),
                Err(err) => {
                    web_sys::console::error_1(&format!("dashboard notes load: {err}").into())
                }
            }
        });
        spawn_local(async move {
            match api.list::<DailyLog>("/logs").await {
                Ok(logs) => *store.mood_counts().write() = mood_histogram(&logs),
                Err(err) => {
                    web_sys::console::error_1(&format!("dashboard logs load: {err}").into())
                }
            }
        });
    });

    view! {
        <div class="dashboard-grid">
            <div class="card dashboard-region">
                <h4>"Recent Tasks"</h4>
                {move || {
                    let tasks = store.recent_tasks().get();
                    if tasks.is_empty() {
                        return view! { <p class="muted">"No tasks yet."</p> }.into_any();
                    }
                    tasks
                        .into_iter()
                        .map(|task| {
                            let deadline = task
                                .deadline
                                .as_deref()
                                .map(short_date)
                                .unwrap_or_default();
                            view! {
                                <div class="dashboard-row">
                                    <div class="row-between">
                                        <h6>{task.title.clone()}</h6>
                                        <small class="muted">{deadline}</small>
                                    </div>
                                    <p>{task.description.clone().unwrap_or_default()}</p>
                                    <small class="muted">
                                        {task
                                            .category_name
                                            .clone()
                                            .unwrap_or_else(|| "No category".to_string())}
                                    </small>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="card dashboard-region">
                <h4>"Today's Sessions"</h4>
                {move || {
                    let sessions = store.todays_sessions().get();
                    if sessions.is_empty() {
                        return view! { <p class="muted">"No sessions recorded today."</p> }
                            .into_any();
                    }
                    sessions
                        .into_iter()
                        .map(|session| {
                            view! {
                                <div class="dashboard-row">
                                    <div class="row-between">
                                        <strong>
                                            {session
                                                .task_title
                                                .clone()
                                                .unwrap_or_else(|| "General Session".to_string())}
                                        </strong>
                                        <span>{format!("{} mins", session.duration_minutes)}</span>
                                    </div>
                                    <span>
                                        {format!(
                                            "{} - {}",
                                            short_time(&session.start_time),
                                            short_time(&session.end_time),
                                        )}
                                    </span>
                                    <small class="muted">
                                        {session.notes.clone().unwrap_or_default()}
                                    </small>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="card dashboard-region">
                <h4>"Recent Notes"</h4>
                {move || {
                    let notes = store.recent_notes().get();
                    if notes.is_empty() {
                        return view! { <p class="muted">"No notes yet."</p> }.into_any();
                    }
                    notes
                        .into_iter()
                        .map(|note| {
                            view! {
                                <div class="dashboard-row">
                                    <h6>{note.title.clone()}</h6>
                                    <p>{truncate_with_ellipsis(&note.content, DASHBOARD_NOTE_CHARS)}</p>
                                    <small class="muted">
                                        {format!("Last updated: {}", note.updated_at)}
                                    </small>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="card dashboard-region">
                <h4>"Mood Breakdown"</h4>
                {move || {
                    let counts = store.mood_counts().get();
                    if counts.total() == 0 {
                        return view! { <p class="muted">"No logs recorded yet."</p> }.into_any();
                    }
                    let total = counts.total();
                    Mood::ALL
                        .into_iter()
                        .map(|mood| {
                            let count = counts.get(mood);
                            let width = (count * 100) / total;
                            view! {
                                <div class="row-between mood-row">
                                    <span class=format!("badge {}", mood.badge_class())>
                                        {mood.label()}
                                    </span>
                                    <span
                                        class="mood-bar"
                                        style=format!("width: {width}%")
                                    ></span>
                                    <span>{count}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
