//! Display implementation for taskpro messages.
//!
//! All user-facing text lives here so that notifications, prompts and menu
//! entries read consistently across the CLI and the interactive dashboard.
//!
//! ```rust
//! use taskpro::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDeleted.to_string(), "Task deleted!");
//! assert_eq!(Message::TaskNotFoundWithId("7".into()).to_string(), "Task 7 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created!".to_string(),
            Message::TaskUpdated => "Task updated!".to_string(),
            Message::TaskDeleted => "Task deleted!".to_string(),
            Message::TaskStatusUpdated => "Task status updated!".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task {} not found.", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksHeader(filter) => format!("Tasks ({})", filter),
            Message::ConfirmDeleteTask => "Are you sure you want to delete this task?".to_string(),
            Message::TaskDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::EditingTask(title) => format!("Edit Task: {}", title),
            Message::AddingTask => "Add New Task".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::LoggedIn(username) => format!("Logged in as {}.", username),
            Message::LoggedOut => "Logged out.".to_string(),
            Message::AlreadyLoggedIn => "You are already logged in. Log out first to switch accounts.".to_string(),
            Message::NotLoggedIn => "Please log in first.".to_string(),
            Message::RegistrationSuccessful => "Registration successful! Please log in.".to_string(),
            Message::SessionExpired => "Session expired. Please log in.".to_string(),
            Message::SessionStoreFailed(error) => format!("Failed to update the stored session: {}", error),

            // === API MESSAGES ===
            Message::ApiRequestFailed => "API request failed".to_string(),
            Message::RequestError(error) => format!("Error: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "TaskPro server settings".to_string(),

            // === PROMPTS ===
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptConfirmPassword => "Repeat password".to_string(),
            Message::PromptPasswordMismatch => "Passwords do not match".to_string(),
            Message::PromptApiUrl => "Enter the TaskPro API URL".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptStatusFilter => "Show tasks".to_string(),
            Message::PromptSearch => "Search by title or priority".to_string(),

            // === DASHBOARD MENU ===
            Message::MenuLogin => "Log in".to_string(),
            Message::MenuRegister => "Register".to_string(),
            Message::MenuAddTask => "Add task".to_string(),
            Message::MenuEditTask => "Edit task".to_string(),
            Message::MenuToggleTask => "Mark task complete / incomplete".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuFilter => "Filter by status".to_string(),
            Message::MenuSearch => "Search".to_string(),
            Message::MenuRefresh => "Refresh".to_string(),
            Message::MenuLogout => "Log out".to_string(),
            Message::MenuQuit => "Quit".to_string(),
        };
        write!(f, "{}", text)
    }
}
