//! Section Router
//!
//! One visible content panel at a time; navigation swaps the active panel
//! and its title, and every navigation refetches (no caching).

/// The application shell's content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Tasks,
    Sessions,
    Resources,
    Notes,
    Achievements,
    Logs,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Tasks,
        Section::Sessions,
        Section::Resources,
        Section::Notes,
        Section::Achievements,
        Section::Logs,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Tasks => "tasks",
            Section::Sessions => "sessions",
            Section::Resources => "resources",
            Section::Notes => "notes",
            Section::Achievements => "achievements",
            Section::Logs => "logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Tasks => "Tasks",
            Section::Sessions => "Sessions",
            Section::Resources => "Resources",
            Section::Notes => "Notes",
            Section::Achievements => "Achievements",
            Section::Logs => "Daily Logs",
        }
    }

    /// Unknown keys fall back to the dashboard, panel and title both.
    pub fn from_key(key: &str) -> Section {
        Section::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or(Section::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), section);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_dashboard() {
        assert_eq!(Section::from_key("settings"), Section::Dashboard);
        assert_eq!(Section::from_key(""), Section::Dashboard);
    }

    #[test]
    fn logs_label_reads_daily_logs() {
        assert_eq!(Section::Logs.label(), "Daily Logs");
    }
}
