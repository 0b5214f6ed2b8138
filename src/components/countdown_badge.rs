//! Countdown Badge Component
//!
//! Per-row time-remaining badge. Each instance drives its own 60-second
//! tick loop; the loop ends when the state turns terminal or when the row
//! leaves the document (the signal is disposed with its row, which stops
//! the loop at the next tick).

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::countdown::Countdown;

const TICK_MS: u32 = 60_000;

#[component]
pub fn CountdownBadge(end_time_iso: Option<String>) -> impl IntoView {
    let Some(end_iso) = end_time_iso else {
        return view! { <span class="badge bg-warning countdown">"No end time"</span> }.into_any();
    };

    let initial = Countdown::evaluate(Utc::now(), &end_iso);
    let (state, set_state) = signal(initial);

    // Terminal states (Expired, Invalid) schedule no updates at all.
    if !initial.is_terminal() {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(TICK_MS).await;
                let next = Countdown::evaluate(Utc::now(), &end_iso);
                // try_set fails once the row (and its signal) is gone.
                if set_state.try_set(next).is_some() {
                    break;
                }
                if next.is_terminal() {
                    break;
                }
            }
        });
    }

    view! {
        <span class=move || format!("badge countdown {}", state.get().badge_class())>
            {move || state.get().label()}
        </span>
    }
    .into_any()
}
