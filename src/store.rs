//! Dashboard State Store
//!
//! Uses reactive_stores for field-level reactivity: the four dashboard
//! regions are independent fields, each written by its own fetch, so the
//! four concurrent loads never race each other's render.

use reactive_stores::Store;

use crate::models::{Note, StudySession, Task};
use crate::summary::MoodCounts;

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Latest 5 tasks as fetched
    pub recent_tasks: Vec<Task>,
    /// Sessions recorded on the current local date
    pub todays_sessions: Vec<StudySession>,
    /// Latest 3 notes, content truncated for display
    pub recent_notes: Vec<Note>,
    /// Mood-frequency breakdown over all daily logs
    pub mood_counts: MoodCounts,
}

pub type DashboardStore = Store<DashboardState>;
