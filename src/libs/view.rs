use super::messages::Message;
use super::task::{Priority, Task};
use chrono::{Local, NaiveDate};
use prettytable::{format, row, Cell, Row, Table};

/// Colour class of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl Tone {
    /// prettytable style string for the tone.
    fn style(&self) -> &'static str {
        match self {
            Tone::Success => "Fg",
            Tone::Warning => "Fy",
            Tone::Danger => "Fr",
            Tone::Secondary => "Fd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn cell(&self) -> Cell {
        Cell::new(&self.label).style_spec(self.tone.style())
    }
}

pub fn priority_badge(priority: Priority) -> Badge {
    let tone = match priority {
        Priority::Low => Tone::Success,
        Priority::Medium => Tone::Warning,
        Priority::High => Tone::Danger,
        Priority::Unknown => Tone::Secondary,
    };
    Badge {
        label: priority.to_string(),
        tone,
    }
}

pub fn status_badge(task: &Task) -> Badge {
    if task.is_completed() {
        Badge {
            label: "Completed".to_string(),
            tone: Tone::Success,
        }
    } else {
        Badge {
            label: "Pending".to_string(),
            tone: Tone::Secondary,
        }
    }
}

/// An incomplete task whose due date lies before `today`.
///
/// Due dates that do not parse as `YYYY-MM-DD` are never overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.is_completed() {
        return false;
    }
    NaiveDate::parse_from_str(task.due_date.trim(), "%Y-%m-%d").is_ok_and(|due| due < today)
}

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) -> Table {
        Self::tasks_on(tasks, Local::now().date_naive())
    }

    pub fn tasks_on(tasks: &[&Task], today: NaiveDate) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "DUE", "PRIORITY", "STATUS"]);
        for task in tasks {
            let due = match is_overdue(task, today) {
                true => Cell::new(&format!("{} (Overdue)", task.due_date)).style_spec("Fr"),
                false => Cell::new(&task.due_date),
            };
            table.add_row(Row::new(vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.title),
                Cell::new(task.description.as_deref().unwrap_or("")),
                due,
                priority_badge(task.priority).cell(),
                status_badge(task).cell(),
            ]));
        }

        table
    }

    /// Renders the visible tasks, or the empty-list notice.
    pub fn render(tasks: &[&Task]) -> String {
        Self::render_on(tasks, Local::now().date_naive())
    }

    pub fn render_on(tasks: &[&Task], today: NaiveDate) -> String {
        if tasks.is_empty() {
            return Message::NoTasksFound.to_string();
        }
        Self::tasks_on(tasks, today).to_string()
    }
}
