//! StudyDash Frontend Entry Point

mod api;
mod app;
mod components;
mod countdown;
mod format;
mod models;
mod section;
mod session;
mod store;
mod summary;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
