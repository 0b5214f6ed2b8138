//! UI Components
//!
//! One section component per feature, all sharing the same lifecycle:
//! fetch on mount, replace the rendered list wholesale, confirm before
//! delete, alert generically on failure, refetch after mutation.

mod achievements_section;
mod auth_view;
mod countdown_badge;
mod dashboard;
mod logs_section;
mod notes_section;
mod resources_section;
mod sessions_section;
mod sidebar;
mod tasks_section;

pub use achievements_section::AchievementsSection;
pub use auth_view::AuthView;
pub use countdown_badge::CountdownBadge;
pub use dashboard::Dashboard;
pub use logs_section::LogsSection;
pub use notes_section::NotesSection;
pub use resources_section::ResourcesSection;
pub use sessions_section::SessionsSection;
pub use sidebar::Sidebar;
pub use tasks_section::TasksSection;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::{ApiClient, ApiError};
use crate::models::ApiMessage;

/// Fetch a list and replace the target signal; failures go to the console
/// only. Sessions hand-rolls its own variant because it alone renders a
/// visible error state.
pub(crate) fn load_list<T>(
    api: ApiClient,
    path: &'static str,
    noun: &'static str,
    set: WriteSignal<Vec<T>>,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match api.list::<T>(path).await {
            Ok(items) => set.set(items),
            Err(err) => {
                web_sys::console::error_1(&format!("failed to load {noun}: {err}").into())
            }
        }
    });
}

/// Run one mutation: on success fire the follow-up (close form, refetch),
/// on any failure alert generically and log the detail. No retries.
pub(crate) fn run_mutation<F>(
    operation: F,
    fail_alert: &'static str,
    on_success: impl FnOnce() + 'static,
) where
    F: Future<Output = Result<ApiMessage, ApiError>> + 'static,
{
    spawn_local(async move {
        match operation.await {
            Ok(_) => on_success(),
            Err(err) => {
                web_sys::console::error_1(&format!("{fail_alert}: {err}").into());
                gloo_dialogs::alert(fail_alert);
            }
        }
    });
}

/// Confirmation gate for deletes; cancelling performs no network call.
pub(crate) fn confirm_delete(noun: &'static str) -> bool {
    gloo_dialogs::confirm(&format!("Are you sure you want to delete this {noun}?"))
}
