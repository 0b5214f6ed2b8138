//! Achievements Section Component
//!
//! Achievement cards sorted newest-first by achieved_on.

use leptos::prelude::*;

use super::{confirm_delete, load_list, run_mutation};
use crate::api::use_api;
use crate::format::{short_date, today_string};
use crate::models::{Achievement, NewAchievement};
use crate::summary::sort_newest_first;

#[component]
pub fn AchievementsSection() -> impl IntoView {
    let api = use_api();

    let (achievements, set_achievements) = signal(Vec::<Achievement>::new());
    let (reload, set_reload) = signal(0u32);

    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (new_date, set_new_date) = signal(today_string());

    Effect::new(move |_| {
        let _ = reload.get();
        load_list(api, "/achievements", "achievements", set_achievements);
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = NewAchievement {
            title: new_title.get(),
            description: new_description.get(),
            achieved_on: new_date.get(),
        };
        if body.title.is_empty() {
            return;
        }
        run_mutation(
            api.create("/achievements", body),
            "Failed to add achievement",
            move || {
                set_new_title.set(String::new());
                set_new_description.set(String::new());
                set_new_date.set(today_string());
                set_adding.set(false);
                set_reload.update(|v| *v += 1);
            },
        );
    };

    let on_delete = move |id: u32| {
        if !confirm_delete("achievement") {
            return;
        }
        run_mutation(
            api.remove("/achievements", id),
            "Failed to delete achievement",
            move || set_reload.update(|v| *v += 1),
        );
    };

    let achievement_card = move |achievement: Achievement| {
        let id = achievement.id;
        view! {
            <div class="card achievement-card">
                <div class="row-between">
                    <h5>{achievement.title.clone()}</h5>
                    <span class="badge bg-success">
                        <i class="bi bi-trophy"></i>
                    </span>
                </div>
                <p>{achievement.description.clone()}</p>
                <div class="row-between">
                    <small class="muted">
                        {format!("Achieved on: {}", short_date(&achievement.achieved_on))}
                    </small>
                    <button on:click=move |_| on_delete(id)>"Delete"</button>
                </div>
            </div>
        }
    };

    view! {
        <section class="achievements-section">
            <div class="row-between">
                <h4>"Achievements"</h4>
                <button on:click=move |_| set_adding.update(|v| *v = !*v)>"Add Achievement"</button>
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
                    <input
                        type="date"
                        prop:value=move || new_date.get()
                        on:input=move |ev| set_new_date.set(event_target_value(&ev))
                    />
                    <button type="submit">"Save Achievement"</button>
                </form>
            })}

            {move || {
                let mut all = achievements.get();
                if all.is_empty() {
                    return view! {
                        <div class="alert alert-info">"No achievements added yet."</div>
                    }
                    .into_any();
                }
                sort_newest_first(&mut all, |a| a.achieved_on.as_str());
                view! {
                    <div class="card-grid">
                        {all.into_iter().map(achievement_card).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
