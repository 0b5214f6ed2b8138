//! Dashboard Reductions
//!
//! Pure reductions over freshly fetched lists: each dashboard region is a
//! function of one list and nothing else, so a failed fetch for one region
//! never disturbs the others. Also hosts the shared newest-first ordering
//! used by the achievements and daily-log sections.

use crate::models::{DailyLog, Mood, Note, StudySession, Task};

/// First `n` entries as fetched (backend order is trusted).
pub fn recent<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}

pub fn recent_tasks(tasks: &[Task]) -> Vec<Task> {
    recent(tasks, 5)
}

pub fn recent_notes(notes: &[Note]) -> Vec<Note> {
    recent(notes, 3)
}

/// Sessions recorded on the given local date.
pub fn todays_sessions(sessions: &[StudySession], today: &str) -> Vec<StudySession> {
    sessions
        .iter()
        .filter(|s| s.session_date == today)
        .cloned()
        .collect()
}

/// Char-boundary-safe truncation with an ellipsis marker when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Fixed four-bucket mood histogram; unrecognized moods count nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodCounts {
    pub productive: u32,
    pub tired: u32,
    pub stuck: u32,
    pub flow: u32,
}

impl MoodCounts {
    pub fn get(&self, mood: Mood) -> u32 {
        match mood {
            Mood::Productive => self.productive,
            Mood::Tired => self.tired,
            Mood::Stuck => self.stuck,
            Mood::Flow => self.flow,
        }
    }

    pub fn total(&self) -> u32 {
        self.productive + self.tired + self.stuck + self.flow
    }
}

pub fn mood_histogram(logs: &[DailyLog]) -> MoodCounts {
    let mut counts = MoodCounts::default();
    for log in logs {
        match Mood::parse(&log.mood) {
            Some(Mood::Productive) => counts.productive += 1,
            Some(Mood::Tired) => counts.tired += 1,
            Some(Mood::Stuck) => counts.stuck += 1,
            Some(Mood::Flow) => counts.flow += 1,
            None => {}
        }
    }
    counts
}

/// Stable newest-first sort by an ISO date field (lexicographic order is
/// chronological for `YYYY-MM-DD`).
pub fn sort_newest_first<T, F>(items: &mut [T], date_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| date_of(b).cmp(date_of(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn log(id: u32, date: &str, mood: &str) -> DailyLog {
        DailyLog {
            id,
            log_date: date.into(),
            summary: String::new(),
            mood: mood.into(),
        }
    }

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
    fn histogram_buckets_sum_to_recognized_entries() {
        let logs = vec![
            log(1, "2026-08-01", "productive"),
            log(2, "2026-08-02", "flow"),
            log(3, "2026-08-03", "productive"),
            log(4, "2026-08-04", "meh"),
            log(5, "2026-08-05", "stuck"),
        ];
        let counts = mood_histogram(&logs);
        assert_eq!(counts.productive, 2);
        assert_eq!(counts.flow, 1);
        assert_eq!(counts.stuck, 1);
        assert_eq!(counts.tired, 0);
        // "meh" contributed to no bucket.
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn histogram_of_empty_list_is_all_zero() {
        assert_eq!(mood_histogram(&[]), MoodCounts::default());
    }

    #[test]
    fn newest_first_is_non_increasing_by_date() {
        let mut logs = vec![
            log(1, "2026-08-01", "flow"),
            log(2, "2026-08-20", "flow"),
            log(3, "2026-08-10", "flow"),
        ];
        sort_newest_first(&mut logs, |l| l.log_date.as_str());
        let dates: Vec<&str> = logs.iter().map(|l| l.log_date.as_str()).collect();
        assert_eq!(dates, vec!["2026-08-20", "2026-08-10", "2026-08-01"]);
        for pair in logs.windows(2) {
            assert!(pair[0].log_date >= pair[1].log_date);
        }
    }

    #[test]
    fn newest_first_sort_is_stable_for_equal_dates() {
        let mut logs = vec![
            log(1, "2026-08-10", "flow"),
            log(2, "2026-08-10", "tired"),
            log(3, "2026-08-10", "stuck"),
        ];
        sort_newest_first(&mut logs, |l| l.log_date.as_str());
        let ids: Vec<u32> = logs.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn recent_takes_leading_entries_in_fetch_order() {
        let tasks: Vec<Task> = (1..=8)
            .map(|id| Task {
                id,
                title: format!("task {id}"),
                description: None,
                category_id: None,
                category_name: None,
                deadline: None,
                status: TaskStatus::Pending,
            })
            .collect();
        let top = recent_tasks(&tasks);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].id, 1);
        assert_eq!(top[4].id, 5);
    }

    #[test]
    fn todays_sessions_filters_by_local_date() {
        let sessions = vec![
            session(1, "2026-08-30"),
            session(2, "2026-08-29"),
            session(3, "2026-08-30"),
        ];
        let today = todays_sessions(&sessions, "2026-08-30");
        assert_eq!(today.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(todays_sessions(&[], "2026-08-30").is_empty());
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        assert_eq!(truncate_with_ellipsis("short", 100), "short");
        let exact = "x".repeat(100);
        assert_eq!(truncate_with_ellipsis(&exact, 100), exact);
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        // Multibyte content must cut between chars, not bytes.
        assert_eq!(truncate_with_ellipsis("ééééé", 3), "ééé...");
    }
}
