//! One-shot task commands.
//!
//! Each command opens the dashboard, feeds it the same actions the
//! interactive mode would, and prints the resulting view.

use super::{form, open_dashboard, show};
use crate::{
    libs::{
        dashboard::{Action, Dashboard, Effect},
        messages::Message,
        task::{FilterState, Priority, StatusFilter, TaskForm, TaskId},
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only complete or incomplete tasks
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
    status: StatusFilter,
    /// Case-insensitive search in title and priority
    #[arg(short = 'q', long)]
    search: Option<String>,
}

#[derive(Debug, Args)]
pub struct TaskFieldArgs {
    /// Task title
    #[arg(short, long)]
    title: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    due: Option<String>,
    /// Task priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

impl TaskFieldArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due.is_none() && self.priority.is_none()
    }

    /// Overlays the given values onto `form`.
    fn apply(self, mut form: TaskForm) -> TaskForm {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(due) = self.due {
            form.due_date = due;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        form
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    fields: TaskFieldArgs,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: TaskId,
    #[command(flatten)]
    fields: TaskFieldArgs,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: TaskId,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: TaskId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn list(args: ListArgs) -> Result<()> {
    let filter = FilterState {
        status: args.status,
        search: args.search.unwrap_or_default(),
    };
    let mut dashboard = open_dashboard()?.with_filter(filter);
    if !dashboard.is_authenticated() {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    }
    show(&dashboard.start().await);
    Ok(())
}

pub async fn add(args: AddArgs) -> Result<()> {
    let mut dashboard = open_dashboard()?;
    let form = match dashboard.dispatch(Action::OpenCreate).await {
        Effect::ShowForm(form) => form,
        _ => return Ok(()),
    };

    msg_info!(Message::AddingTask);
    let form = match args.fields.is_empty() {
        true => form::prompt_task(form)?,
        false => args.fields.apply(form),
    };
    submit(&mut dashboard, form).await;
    Ok(())
}

pub async fn edit(args: EditArgs) -> Result<()> {
    let mut dashboard = open_dashboard()?;
    if !load(&mut dashboard).await {
        return Ok(());
    }

    let form = match dashboard.dispatch(Action::OpenEdit(args.id)).await {
        Effect::ShowForm(form) => form,
        _ => return Ok(()),
    };

    msg_info!(Message::EditingTask(form.title.clone()));
    let form = match args.fields.is_empty() {
        true => form::prompt_task(form)?,
        false => args.fields.apply(form),
    };
    submit(&mut dashboard, form).await;
    Ok(())
}

pub async fn toggle(args: IdArgs, done: bool) -> Result<()> {
    let mut dashboard = open_dashboard()?;
    if !load(&mut dashboard).await {
        return Ok(());
    }

    show(&dashboard.dispatch(Action::ToggleStatus(args.id, done)).await);
    Ok(())
}

pub async fn delete(args: DeleteArgs) -> Result<()> {
    let mut dashboard = open_dashboard()?;

    if !args.yes && !confirm_delete()? {
        msg_info!(Message::TaskDeleteCancelled);
        return Ok(());
    }

    show(&dashboard.dispatch(Action::DeleteTask(args.id)).await);
    Ok(())
}

pub fn confirm_delete() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask.to_string())
        .default(false)
        .interact()?)
}

/// Fetches the collection without printing it. `false` when nothing could
/// be loaded (not logged in, expired, or request failed).
async fn load(dashboard: &mut Dashboard) -> bool {
    if !dashboard.is_authenticated() {
        msg_info!(Message::NotLoggedIn);
        return false;
    }
    matches!(dashboard.start().await, Effect::Render(_))
}

async fn submit(dashboard: &mut Dashboard, form: TaskForm) {
    let effect = dashboard.dispatch(Action::Submit(form)).await;
    show(&effect);
}
