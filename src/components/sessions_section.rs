//! Sessions Section Component
//!
//! Study sessions grouped by date, newest group first, fetch order kept
//! inside a group. The only list in the app whose load failure is rendered
//! distinctly from an empty result. Each row carries its own countdown
//! badge; session creation computes duration_minutes locally before
//! sending.

use chrono::NaiveTime;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{confirm_delete, load_list, run_mutation, CountdownBadge};
use crate::api::use_api;
use crate::format::{long_date, short_time, today_string};
use crate::models::{NewSession, StudySession, Task};

/// Group by session_date into buckets, buckets in descending date order,
/// fetch order preserved within a bucket.
pub fn group_by_date(sessions: Vec<StudySession>) -> Vec<(String, Vec<StudySession>)> {
    let mut groups: Vec<(String, Vec<StudySession>)> = Vec::new();
    for session in sessions {
        match groups.iter_mut().find(|(date, _)| *date == session.session_date) {
            Some((_, bucket)) => bucket.push(session),
            None => groups.push((session.session_date.clone(), vec![session])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

/// Minute difference between two time-of-day strings (`HH:MM` or
/// `HH:MM:SS`). Negative when end precedes start; the backend receives it
/// as computed.
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let parse = |t: &str| {
        NaiveTime::parse_from_str(t, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
            .ok()
    };
    let (start, end) = (parse(start)?, parse(end)?);
    Some((end - start).num_minutes())
}

#[component]
pub fn SessionsSection() -> impl IntoView {
    let api = use_api();

    let (sessions, set_sessions) = signal(Vec::<StudySession>::new());
    let (load_failed, set_load_failed) = signal(false);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (reload, set_reload) = signal(0u32);

    let (adding, set_adding) = signal(false);
    let (new_task_id, set_new_task_id) = signal(String::new());
    let (new_date, set_new_date) = signal(today_string());
    let (new_start, set_new_start) = signal(String::new());
    let (new_end, set_new_end) = signal(String::new());
    let (new_notes, set_new_notes) = signal(String::new());

    Effect::new(move |_| {
        let _ = reload.get();
        // Sessions alone distinguishes "failed" from "empty" in its render.
        spawn_local(async move {
            match api.list::<StudySession>("/sessions").await {
                Ok(list) => {
                    set_sessions.set(list);
                    set_load_failed.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load sessions: {err}").into());
                    set_load_failed.set(true);
                }
            }
        });
        load_list(api, "/tasks", "tasks", set_tasks);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let start = new_start.get();
        let end = new_end.get();
        let Some(duration) = duration_minutes(&start, &end) else {
            gloo_dialogs::alert("Failed to add session");
            return;
        };
        let body = NewSession {
            task_id: new_task_id.get().parse().ok(),
            session_date: new_date.get(),
            start_time: start,
            end_time: end,
            duration_minutes: duration,
            notes: new_notes.get(),
        };
        run_mutation(
            api.create("/sessions", body),
            "Failed to add session",
            move || {
                set_new_task_id.set(String::new());
                set_new_date.set(today_string());
                set_new_start.set(String::new());
                set_new_end.set(String::new());
                set_new_notes.set(String::new());
                set_adding.set(false);
                set_reload.update(|v| *v += 1);
            },
        );
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("session") {
            return;
        }
        run_mutation(
            api.remove("/sessions", id),
            "Failed to delete session",
            move || set_reload.update(|v| *v += 1),
        );
    };

    let session_row = move |session: StudySession| {
        let id = session.id;
        view! {
            <div class="card session-item">
                <div class="row-between">
                    <h5>{session
                        .task_title
                        .clone()
                        .unwrap_or_else(|| "General Session".to_string())}</h5>
                    <CountdownBadge end_time_iso=session.end_time_iso.clone() />
                </div>
                <div class="row-between">
                    <span>
                        {format!(
                            "{} - {}",
                            short_time(&session.start_time),
                            short_time(&session.end_time),
                        )}
                    </span>
                    <span class="muted">{format!("{} mins", session.duration_minutes)}</span>
                </div>
                <p>{session.notes.clone().unwrap_or_default()}</p>
                <button on:click=move |_| on_delete(id)>"Delete"</button>
            </div>
        }
    };

    view! {
        <section class="sessions-section">
            <div class="row-between">
                <h4>"Study Sessions"</h4>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Session"</button>
            </div>

            {move || adding.get().then(|| view! {
                <form class="inline-form" on:submit=on_add>
                    <select on:change=move |ev| set_new_task_id.set(event_target_value(&ev))>
                        <option value="">"Select Task"</option>
                        {tasks
                            .get()
                            .into_iter()
                            .map(|t| view! { <option value=t.id.to_string()>{t.title}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="date"
                        prop:value=move || new_date.get()
                        on:input=move |ev| set_new_date.set(event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || new_start.get()
                        on:input=move |ev| set_new_start.set(event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || new_end.get()
                        on:input=move |ev| set_new_end.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Notes"
                        prop:value=move || new_notes.get()
                        on:input=move |ev| set_new_notes.set(event_target_value(&ev))
                    />
                    <button type="submit">"Save Session"</button>
                </form>
            })}

            {move || {
                if load_failed.get() {
                    return view! {
                        <div class="alert alert-danger">
                            "Failed to load sessions. Please try again later."
                        </div>
                    }
                    .into_any();
                }
                let all = sessions.get();
                if all.is_empty() {
                    return view! {
                        <div class="alert alert-info">"No sessions recorded yet."</div>
                    }
                    .into_any();
                }
                group_by_date(all)
                    .into_iter()
                    .map(|(date, bucket)| {
                        view! {
                            <div class="session-group">
                                <h4>{long_date(&date)}</h4>
                                {bucket.into_iter().map(session_row).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: u32, date: &str) -> StudySession {
        StudySession {
            id,
            task_id: None,
            task_title: None,
            session_date: date.into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            end_time_iso: None,
            duration_minutes: 60,
            notes: None,
        }
    }

    #[test]
    fn groups_are_in_descending_date_order() {
        let groups = group_by_date(vec![
            session(1, "2026-08-10"),
            session(2, "2026-08-30"),
            session(3, "2026-08-20"),
        ]);
        let dates: Vec<&str> = groups.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2026-08-30", "2026-08-20", "2026-08-10"]);
        for pair in groups.windows(2) {
            assert!(pair[0].0 >= pair[1].0);
        }
    }

    #[test]
    fn fetch_order_is_stable_within_a_group() {
        let groups = group_by_date(vec![
            session(5, "2026-08-30"),
            session(9, "2026-08-29"),
            session(2, "2026-08-30"),
            session(7, "2026-08-30"),
        ]);
        let todays = &groups[0];
        assert_eq!(todays.0, "2026-08-30");
        let ids: Vec<u32> = todays.1.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 2, 7]);
    }

    #[test]
    fn empty_input_groups_to_nothing() {
        assert!(group_by_date(Vec::new()).is_empty());
    }

    #[test]
    fn duration_is_minute_difference_of_times() {
        assert_eq!(duration_minutes("10:00", "11:30"), Some(90));
        assert_eq!(duration_minutes("09:15", "09:15"), Some(0));
        // Seconds-bearing times are accepted.
        assert_eq!(duration_minutes("09:00:00", "09:45:00"), Some(45));
        // End before start comes out negative, as computed.
        assert_eq!(duration_minutes("11:00", "10:00"), Some(-60));
    }

    #[test]
    fn unparsable_times_yield_no_duration() {
        assert_eq!(duration_minutes("soon", "later"), None);
        assert_eq!(duration_minutes("", "10:00"), None);
    }
}
