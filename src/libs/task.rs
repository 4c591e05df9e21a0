//! Task model shared by the repository, the controller and the CLI.
//!
//! [`Task`] mirrors the server's JSON; [`TaskFields`] is the write payload and
//! [`TaskForm`] the editable form state. [`StatusFilter`] scopes list requests
//! on the server.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned task identity.
///
/// Opaque to the client: it is only compared for equality and echoed back in
/// URLs. The server may send it as a number or a string; both round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{}", id),
            TaskId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(id) => TaskId::Number(id),
            Err(_) => TaskId::Text(s.to_owned()),
        })
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Number(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    /// Any value the client does not know. Never offered as a choice.
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task exactly as last received from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date text. Never validated client-side.
    pub due_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: bool,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status
    }

    /// Full write payload for this task with `status` replaced.
    pub fn with_status(&self, status: bool) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            due_date: self.due_date.clone(),
            priority: self.priority,
            status: Some(status),
        }
    }
}

/// Body of a create or update request.
///
/// `status` is omitted on create and always sent on update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// Editable form state for creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
}

impl TaskForm {
    /// Empty form with the default `Medium` priority.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date.clone(),
            priority: task.priority,
        }
    }

    pub fn into_fields(self, status: Option<bool>) -> TaskFields {
        TaskFields {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status,
        }
    }
}

/// Server-side scoping of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Complete, StatusFilter::Incomplete];

    /// Value of the `status` query parameter, `None` for no scoping.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Complete => Some("complete"),
            StatusFilter::Incomplete => Some("incomplete"),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Complete => "complete",
            StatusFilter::Incomplete => "incomplete",
        })
    }
}

/// Filter state owned by the dashboard. Changed only by user actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub search: String,
}
