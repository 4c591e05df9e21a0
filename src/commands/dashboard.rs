//! Interactive dashboard.
//!
//! A menu loop over the same actions as the one-shot commands. The menu shown
//! depends on the dashboard state: login/register while unauthenticated, the
//! task actions otherwise.

use super::{form, open_dashboard, show, tasks::confirm_delete};
use crate::libs::{
    dashboard::{Action, Dashboard, Effect},
    messages::Message,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Login,
    Register,
    AddTask,
    EditTask,
    ToggleTask,
    DeleteTask,
    Filter,
    Search,
    Refresh,
    Logout,
    Quit,
}

impl MenuItem {
    const GUEST: [MenuItem; 3] = [MenuItem::Login, MenuItem::Register, MenuItem::Quit];
    const MEMBER: [MenuItem; 9] = [
        MenuItem::AddTask,
        MenuItem::EditTask,
        MenuItem::ToggleTask,
        MenuItem::DeleteTask,
        MenuItem::Filter,
        MenuItem::Search,
        MenuItem::Refresh,
        MenuItem::Logout,
        MenuItem::Quit,
    ];

    fn label(&self) -> Message {
        match self {
            MenuItem::Login => Message::MenuLogin,
            MenuItem::Register => Message::MenuRegister,
            MenuItem::AddTask => Message::MenuAddTask,
            MenuItem::EditTask => Message::MenuEditTask,
            MenuItem::ToggleTask => Message::MenuToggleTask,
            MenuItem::DeleteTask => Message::MenuDeleteTask,
            MenuItem::Filter => Message::MenuFilter,
            MenuItem::Search => Message::MenuSearch,
            MenuItem::Refresh => Message::MenuRefresh,
            MenuItem::Logout => Message::MenuLogout,
            MenuItem::Quit => Message::MenuQuit,
        }
    }
}

pub async fn cmd() -> Result<()> {
    let mut dashboard = open_dashboard()?;
    show(&dashboard.start().await);

    loop {
        let items: &[MenuItem] = match dashboard.is_authenticated() {
            true => &MenuItem::MEMBER,
            false => &MenuItem::GUEST,
        };
        let labels: Vec<String> = items.iter().map(|item| item.label().to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let action = match next_action(&dashboard, items[selection])? {
            Step::Dispatch(action) => action,
            Step::Skip => continue,
            Step::Quit => return Ok(()),
        };
        let effect = dashboard.dispatch(action).await;
        handle(&mut dashboard, effect).await?;
    }
}

enum Step {
    Dispatch(Action),
    Skip,
    Quit,
}

/// Collects the input a menu item needs and turns it into an action.
fn next_action(dashboard: &Dashboard, item: MenuItem) -> Result<Step> {
    let action = match item {
        MenuItem::Login => Action::Login {
            username: form::prompt_username(None)?,
            password: form::prompt_password(false)?,
        },
        MenuItem::Register => Action::Register {
            username: form::prompt_username(None)?,
            password: form::prompt_password(true)?,
        },
        MenuItem::AddTask => Action::OpenCreate,
        MenuItem::EditTask => match form::select_task(dashboard.tasks())? {
            Some(task) => Action::OpenEdit(task.id.clone()),
            None => return Ok(Step::Skip),
        },
        MenuItem::ToggleTask => match form::select_task(dashboard.tasks())? {
            Some(task) => Action::ToggleStatus(task.id.clone(), !task.is_completed()),
            None => return Ok(Step::Skip),
        },
        MenuItem::DeleteTask => match form::select_task(dashboard.tasks())? {
            Some(task) if confirm_delete()? => Action::DeleteTask(task.id.clone()),
            _ => return Ok(Step::Skip),
        },
        MenuItem::Filter => Action::ChangeFilter(form::prompt_status_filter(dashboard.filter().status)?),
        MenuItem::Search => Action::ChangeSearch(form::prompt_search(&dashboard.filter().search)?),
        MenuItem::Refresh => Action::Refresh,
        MenuItem::Logout => Action::Logout,
        MenuItem::Quit => return Ok(Step::Quit),
    };
    Ok(Step::Dispatch(action))
}

/// Shows an effect. A form is filled in and submitted right away; the
/// submission's own effect is shown in turn.
async fn handle(dashboard: &mut Dashboard, effect: Effect) -> Result<()> {
    let effect = match effect {
        Effect::ShowForm(task_form) => {
            let filled = form::prompt_task(task_form)?;
            match dashboard.dispatch(Action::Submit(filled)).await {
                Effect::None => dashboard.dispatch(Action::Cancel).await,
                effect => effect,
            }
        }
        effect => effect,
    };
    show(&effect);
    Ok(())
}
