//! Frontend Models
//!
//! Data structures matching backend entities, plus the request payloads
//! sent to mutation endpoints.

use serde::{Deserialize, Serialize};

/// Task status, serialized snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire value, also used as the form select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "bg-secondary",
            TaskStatus::InProgress => "bg-warning",
            TaskStatus::Completed => "bg-success",
        }
    }

    pub fn from_form_value(value: &str) -> TaskStatus {
        match value {
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

/// Recognized daily-log moods. The wire value is a free string; anything
/// outside these four renders with a neutral badge and counts toward no
/// histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Productive,
    Tired,
    Stuck,
    Flow,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Productive, Mood::Tired, Mood::Stuck, Mood::Flow];

    pub fn parse(value: &str) -> Option<Mood> {
        match value {
            "productive" => Some(Mood::Productive),
            "tired" => Some(Mood::Tired),
            "stuck" => Some(Mood::Stuck),
            "flow" => Some(Mood::Flow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Productive => "productive",
            Mood::Tired => "tired",
            Mood::Stuck => "stuck",
            Mood::Flow => "flow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Productive => "Productive",
            Mood::Tired => "Tired",
            Mood::Stuck => "Stuck",
            Mood::Flow => "Flow",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Mood::Productive => "bg-success",
            Mood::Tired => "bg-warning",
            Mood::Stuck => "bg-danger",
            Mood::Flow => "bg-primary",
        }
    }
}

/// Badge class for a raw mood string, neutral for unrecognized values.
pub fn mood_badge_class(value: &str) -> &'static str {
    Mood::parse(value).map_or("bg-secondary", |m| m.badge_class())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: u32,
    #[serde(default)]
    pub task_id: Option<u32>,
    #[serde(default)]
    pub task_title: Option<String>,
    pub session_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub end_time_iso: Option<String>,
    pub duration_minutes: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Resource {
    /// Kind selects a display icon only.
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "video" => "bi-play-circle",
            "article" => "bi-newspaper",
            "report" => "bi-file-earmark-text",
            "tool" => "bi-tools",
            _ => "bi-link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub achieved_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: u32,
    pub log_date: String,
    pub summary: String,
    pub mood: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Generic mutation response body; the message is display-only, success is
/// judged by HTTP status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<u32>,
    pub deadline: Option<String>,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSession {
    pub task_id: Option<u32>,
    pub session_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub achieved_on: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDailyLog {
    pub log_date: String,
    pub summary: String,
    pub mood: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_round_trips_snake_case() {
        let json = r#"{"id":1,"title":"Write report","status":"in_progress"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.category_name, None);

        let back = serde_json::to_value(&task).unwrap();
        assert_eq!(back["status"], "in_progress");
    }

    #[test]
    fn unknown_mood_gets_neutral_badge() {
        assert_eq!(mood_badge_class("flow"), "bg-primary");
        assert_eq!(mood_badge_class("mysterious"), "bg-secondary");
        assert!(Mood::parse("mysterious").is_none());
    }

    #[test]
    fn resource_kind_maps_to_icon() {
        let mut res = Resource {
            id: 1,
            title: "Intro".into(),
            kind: "video".into(),
            url: "https://example.com".into(),
            notes: None,
        };
        assert_eq!(res.icon(), "bi-play-circle");
        res.kind = "podcast".into();
        assert_eq!(res.icon(), "bi-link");
    }

    #[test]
    fn resource_kind_uses_type_on_the_wire() {
        let json = r#"{"id":2,"title":"Docs","type":"article","url":"https://example.com"}"#;
        let res: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(res.kind, "article");
    }
}
