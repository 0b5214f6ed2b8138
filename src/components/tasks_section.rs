//! Tasks Section Component
//!
//! Tasks fan out into four rendered buckets (all plus one per status).
//! Supports create, edit/update, and delete; the form's category select is
//! populated from /categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{confirm_delete, load_list, run_mutation};
use crate::api::use_api;
use crate::format::short_date;
use crate::models::{Category, Task, TaskPayload, TaskStatus};

/// Status-keyed rendering destinations for a fetched task list. No sort is
/// applied; backend order is preserved in every bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBuckets {
    pub all: Vec<Task>,
    pub pending: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

pub fn bucket_tasks(tasks: &[Task]) -> TaskBuckets {
    let mut buckets = TaskBuckets::default();
    for task in tasks {
        buckets.all.push(task.clone());
        match task.status {
            TaskStatus::Pending => buckets.pending.push(task.clone()),
            TaskStatus::InProgress => buckets.in_progress.push(task.clone()),
            TaskStatus::Completed => buckets.completed.push(task.clone()),
        }
    }
    buckets
}

/// Which bucket tab is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BucketTab {
    All,
    Status(TaskStatus),
}

impl BucketTab {
    const ALL_TABS: [BucketTab; 4] = [
        BucketTab::All,
        BucketTab::Status(TaskStatus::Pending),
        BucketTab::Status(TaskStatus::InProgress),
        BucketTab::Status(TaskStatus::Completed),
    ];

    fn label(&self) -> &'static str {
        match self {
            BucketTab::All => "All",
            BucketTab::Status(TaskStatus::Pending) => "Pending",
            BucketTab::Status(TaskStatus::InProgress) => "In Progress",
            BucketTab::Status(TaskStatus::Completed) => "Completed",
        }
    }
}

/// Empty form strings become null payload fields.
fn payload(
    title: String,
    description: String,
    category_id: String,
    deadline: String,
    status: TaskStatus,
) -> TaskPayload {
    TaskPayload {
        title,
        description: (!description.is_empty()).then_some(description),
        category_id: category_id.parse().ok(),
        deadline: (!deadline.is_empty()).then_some(deadline),
        status,
    }
}

#[component]
pub fn TasksSection() -> impl IntoView {
    let api = use_api();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (reload, set_reload) = signal(0u32);
    let (tab, set_tab) = signal(BucketTab::All);

    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (new_category, set_new_category) = signal(String::new());
    let (new_deadline, set_new_deadline) = signal(String::new());
    let (new_status, set_new_status) = signal(TaskStatus::Pending);

    // Edit form state, populated by load_for_edit.
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_description, set_edit_description) = signal(String::new());
    let (edit_category, set_edit_category) = signal(String::new());
    let (edit_deadline, set_edit_deadline) = signal(String::new());
    let (edit_status, set_edit_status) = signal(TaskStatus::Pending);

    Effect::new(move |_| {
        let _ = reload.get();
        load_list(api, "/tasks", "tasks", set_tasks);
        load_list(api, "/categories", "categories", set_categories);
    });

    let buckets = Memo::new(move |_| bucket_tasks(&tasks.get()));

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = payload(
            new_title.get(),
            new_description.get(),
            new_category.get(),
            new_deadline.get(),
            new_status.get(),
        );
        if body.title.is_empty() {
            return;
        }
        run_mutation(api.create("/tasks", body), "Failed to add task", move || {
            set_new_title.set(String::new());
            set_new_description.set(String::new());
            set_new_category.set(String::new());
            set_new_deadline.set(String::new());
            set_new_status.set(TaskStatus::Pending);
            set_adding.set(false);
            set_reload.update(|v| *v += 1);
        });
    };

    let load_for_edit = move |id: u32| {
        spawn_local(async move {
            match api.fetch_one::<Task>("/tasks", id).await {
                Ok(task) => {
                    set_edit_title.set(task.title);
                    set_edit_description.set(task.description.unwrap_or_default());
                    set_edit_category
                        .set(task.category_id.map(|c| c.to_string()).unwrap_or_default());
                    set_edit_deadline.set(task.deadline.unwrap_or_default());
                    set_edit_status.set(task.status);
                    set_editing_id.set(Some(id));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("failed to load task {id}: {err}").into());
                    gloo_dialogs::alert("Failed to load task data");
                }
            }
        });
    };

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing_id.get() else { return };
        let body = payload(
            edit_title.get(),
            edit_description.get(),
            edit_category.get(),
            edit_deadline.get(),
            edit_status.get(),
        );
        run_mutation(
            api.update("/tasks", id, body),
            "Failed to update task",
            move || {
                set_editing_id.set(None);
                set_reload.update(|v| *v += 1);
            },
        );
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("task") {
            return;
        }
        run_mutation(api.remove("/tasks", id), "Failed to delete task", move || {
            set_reload.update(|v| *v += 1);
        });
    };

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
            .collect_view()
    };

    let status_options = || {
        TaskStatus::ALL
            .into_iter()
            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
            .collect_view()
    };

    let task_card = move |task: Task| {
        let id = task.id;
        let deadline = task
            .deadline
            .as_deref()
            .map(short_date)
            .unwrap_or_else(|| "No deadline".to_string());
        let category = task
            .category_name
            .clone()
            .unwrap_or_else(|| "No category".to_string());
        view! {
            <div class="card task-card">
                <div class="row-between">
                    <h5>{task.title.clone()}</h5>
                    <span class=format!("badge {}", task.status.badge_class())>
                        {task.status.label()}
                    </span>
                </div>
                <p>{task.description.clone().unwrap_or_default()}</p>
                <div class="row-between">
                    <small class="muted">{format!("{category} \u{2022} Due: {deadline}")}</small>
                    <div>
                        <button on:click=move |_| load_for_edit(id)>"Edit"</button>
                        <button on:click=move |_| on_delete(id)>"Delete"</button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <section class="tasks-section">
            <div class="row-between">
                <div class="tab-bar">
                    {BucketTab::ALL_TABS
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class=move || if tab.get() == t { "active" } else { "" }
                                    on:click=move |_| set_tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Task"</button>
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
                        placeholder="Description"
                        prop:value=move || new_description.get()
                        on:input=move |ev| set_new_description.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_new_category.set(event_target_value(&ev))>
                        <option value="">"Select Category"</option>
                        {category_options}
                    </select>
                    <input
                        type="date"
                        prop:value=move || new_deadline.get()
                        on:input=move |ev| set_new_deadline.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        set_new_status.set(TaskStatus::from_form_value(&event_target_value(&ev)))
                    }>
                        {status_options()}
                    </select>
                    <button type="submit">"Save Task"</button>
                </form>
            })}

            {move || editing_id.get().map(|id| view! {
                <form class="inline-form edit-form" on:submit=on_update>
                    <h5>{format!("Edit task #{id}")}</h5>
                    <input
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                    />
                    <textarea
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || edit_category.get()
                        on:change=move |ev| set_edit_category.set(event_target_value(&ev))
                    >
                        <option value="">"Select Category"</option>
                        {category_options}
                    </select>
                    <input
                        type="date"
                        prop:value=move || edit_deadline.get()
                        on:input=move |ev| set_edit_deadline.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || edit_status.get().as_str()
                        on:change=move |ev| {
                            set_edit_status
                                .set(TaskStatus::from_form_value(&event_target_value(&ev)))
                        }
                    >
                        {status_options()}
                    </select>
                    <button type="submit">"Update Task"</button>
                    <button type="button" on:click=move |_| set_editing_id.set(None)>
                        "Cancel"
                    </button>
                </form>
            })}

            {move || {
                let buckets = buckets.get();
                let shown = match tab.get() {
                    BucketTab::All => buckets.all,
                    BucketTab::Status(TaskStatus::Pending) => buckets.pending,
                    BucketTab::Status(TaskStatus::InProgress) => buckets.in_progress,
                    BucketTab::Status(TaskStatus::Completed) => buckets.completed,
                };
                if shown.is_empty() {
                    view! {
                        <div class="alert alert-info">"No tasks found. Add your first task!"</div>
                    }
                    .into_any()
                } else {
                    shown.into_iter().map(task_card).collect_view().into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str, status: TaskStatus) -> Task {
        Task {
            id,
            title: title.into(),
            description: None,
            category_id: None,
            category_name: None,
            deadline: None,
            status,
        }
    }

    #[test]
    fn created_task_lands_in_all_and_its_status_bucket() {
        let tasks = vec![
            task(1, "Write spec", TaskStatus::Pending),
            task(2, "Ship it", TaskStatus::Completed),
        ];
        let buckets = bucket_tasks(&tasks);

        assert!(buckets.all.iter().any(|t| t.title == "Write spec"));
        assert!(buckets.pending.iter().any(|t| t.title == "Write spec"));
        assert!(!buckets.completed.iter().any(|t| t.title == "Write spec"));
        assert!(buckets.in_progress.is_empty());
    }

    #[test]
    fn buckets_preserve_fetch_order() {
        let tasks = vec![
            task(3, "c", TaskStatus::Pending),
            task(1, "a", TaskStatus::Pending),
            task(2, "b", TaskStatus::InProgress),
        ];
        let buckets = bucket_tasks(&tasks);
        let all_ids: Vec<u32> = buckets.all.iter().map(|t| t.id).collect();
        let pending_ids: Vec<u32> = buckets.pending.iter().map(|t| t.id).collect();
        assert_eq!(all_ids, vec![3, 1, 2]);
        assert_eq!(pending_ids, vec![3, 1]);
    }

    #[test]
    fn empty_form_fields_become_null_payloads() {
        let body = payload(
            "Title".into(),
            String::new(),
            String::new(),
            String::new(),
            TaskStatus::Pending,
        );
        assert_eq!(body.description, None);
        assert_eq!(body.category_id, None);
        assert_eq!(body.deadline, None);

        let body = payload(
            "Title".into(),
            "desc".into(),
            "4".into(),
            "2026-09-01".into(),
            TaskStatus::Completed,
        );
        assert_eq!(body.category_id, Some(4));
        assert_eq!(body.deadline.as_deref(), Some("2026-09-01"));
    }
}
