//! Terminal prompts standing in for the task and login forms.

use crate::libs::{
    messages::Message,
    task::{Priority, StatusFilter, Task, TaskForm},
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

/// Asks for every task field, offering the current values as defaults.
pub fn prompt_task(form: TaskForm) -> Result<TaskForm> {
    let theme = ColorfulTheme::default();

    let title = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(form.title)
        .interact_text()?;
    let description = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(form.description)
        .allow_empty(true)
        .interact_text()?;
    let due_date = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(form.due_date)
        .interact_text()?;
    let priority = Priority::ALL[Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&Priority::ALL)
        .default(Priority::ALL.iter().position(|p| *p == form.priority).unwrap_or(1))
        .interact()?];

    Ok(TaskForm {
        title,
        description,
        due_date,
        priority,
    })
}

pub fn prompt_username(default: Option<String>) -> Result<String> {
    if let Some(username) = default {
        return Ok(username);
    }
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUsername.to_string())
        .interact_text()?)
}

pub fn prompt_password(confirm: bool) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut password = Password::with_theme(&theme).with_prompt(Message::PromptPassword.to_string());
    if confirm {
        password = password.with_confirmation(
            Message::PromptConfirmPassword.to_string(),
            Message::PromptPasswordMismatch.to_string(),
        );
    }
    Ok(password.interact()?)
}

pub fn prompt_status_filter(current: StatusFilter) -> Result<StatusFilter> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStatusFilter.to_string())
        .items(&StatusFilter::ALL)
        .default(StatusFilter::ALL.iter().position(|s| *s == current).unwrap_or(0))
        .interact()?;
    Ok(StatusFilter::ALL[selection])
}

pub fn prompt_search(current: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSearch.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Lets the user pick one of `tasks`. `None` when there is nothing to pick.
pub fn select_task(tasks: &[Task]) -> Result<Option<&Task>> {
    if tasks.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = tasks
        .iter()
        .map(|task| format!("[{}] {} ({}, due {})", task.id, task.title, task.priority, task.due_date))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(tasks.get(selection))
}
