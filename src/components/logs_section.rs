//! Daily Logs Section Component
//!
//! One entry per day with a mood badge, sorted newest-first by log_date.

use leptos::prelude::*;

use super::{confirm_delete, load_list, run_mutation};
use crate::api::use_api;
use crate::format::{long_date, today_string};
use crate::models::{mood_badge_class, DailyLog, Mood, NewDailyLog};
use crate::summary::sort_newest_first;

#[component]
pub fn LogsSection() -> impl IntoView {
    let api = use_api();

    let (logs, set_logs) = signal(Vec::<DailyLog>::new());
    let (reload, set_reload) = signal(0u32);

    let (adding, set_adding) = signal(false);
    let (new_date, set_new_date) = signal(today_string());
    let (new_summary, set_new_summary) = signal(String::new());
    let (new_mood, set_new_mood) = signal(String::from("productive"));

    Effect::new(move |_| {
        let _ = reload.get();
        load_list(api, "/logs", "logs", set_logs);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = NewDailyLog {
            log_date: new_date.get(),
            summary: new_summary.get(),
            mood: new_mood.get(),
        };
        if body.summary.is_empty() {
            return;
        }
        run_mutation(api.create("/logs", body), "Failed to add log", move || {
            set_new_date.set(today_string());
            set_new_summary.set(String::new());
            set_new_mood.set(String::from("productive"));
            set_adding.set(false);
            set_reload.update(|v| *v += 1);
        });
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("log") {
            return;
        }
        run_mutation(api.remove("/logs", id), "Failed to delete log", move || {
            set_reload.update(|v| *v += 1)
        });
    };

    let log_row = move |log: DailyLog| {
        let id = log.id;
        view! {
            <div class="card log-item">
                <div class="row-between">
                    <h5>{long_date(&log.log_date)}</h5>
                    <span class=format!("badge {}", mood_badge_class(&log.mood))>
                        {log.mood.clone()}
                    </span>
                </div>
                <p>{log.summary.clone()}</p>
                <button on:click=move |_| on_delete(id)>"Delete"</button>
            </div>
        }
    };

    view! {
        <section class="logs-section">
            <div class="row-between">
                <h4>"Daily Logs"</h4>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Log"</button>
            </div>

            {move || adding.get().then(|| view! {
                <form class="inline-form" on:submit=on_add>
                    <input
                        type="date"
                        prop:value=move || new_date.get()
                        on:input=move |ev| set_new_date.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="What happened today?"
                        prop:value=move || new_summary.get()
                        on:input=move |ev| set_new_summary.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_new_mood.set(event_target_value(&ev))>
                        {Mood::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                            .collect_view()}
                    </select>
                    <button type="submit">"Save Log"</button>
                </form>
            })}

            {move || {
                let mut all = logs.get();
                if all.is_empty() {
                    return view! {
                        <div class="alert alert-info">"No logs recorded yet."</div>
                    }
                    .into_any();
                }
                sort_newest_first(&mut all, |l| l.log_date.as_str());
                all.into_iter().map(log_row).collect_view().into_any()
            }}
        </section>
    }
}
