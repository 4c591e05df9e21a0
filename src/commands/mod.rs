pub mod auth;
pub mod dashboard;
pub mod form;
pub mod init;
pub mod tasks;

use crate::api::Transport;
use crate::libs::{
    config::Config,
    dashboard::{Dashboard, Effect},
    messages::Message,
    notify::ConsoleNotifier,
    session::FileSessionStore,
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the TaskPro server address")]
    Init(init::InitArgs),
    #[command(about = "Log in and store the access token")]
    Login(auth::LoginArgs),
    #[command(about = "Create a new account")]
    Register(auth::RegisterArgs),
    #[command(about = "Forget the stored access token")]
    Logout,
    #[command(about = "List tasks ordered by due date")]
    List(tasks::ListArgs),
    #[command(about = "Create a task")]
    Add(tasks::AddArgs),
    #[command(about = "Edit a task")]
    Edit(tasks::EditArgs),
    #[command(about = "Mark a task as complete")]
    Done(tasks::IdArgs),
    #[command(about = "Mark a task as incomplete")]
    Undo(tasks::IdArgs),
    #[command(about = "Delete a task")]
    Delete(tasks::DeleteArgs),
    #[command(about = "Open the interactive dashboard")]
    Dashboard,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => auth::login(args).await,
            Commands::Register(args) => auth::register(args).await,
            Commands::Logout => auth::logout().await,
            Commands::List(args) => tasks::list(args).await,
            Commands::Add(args) => tasks::add(args).await,
            Commands::Edit(args) => tasks::edit(args).await,
            Commands::Done(args) => tasks::toggle(args, true).await,
            Commands::Undo(args) => tasks::toggle(args, false).await,
            Commands::Delete(args) => tasks::delete(args).await,
            Commands::Dashboard => dashboard::cmd().await,
        }
    }
}

/// Dashboard wired to the configured server, the stored session and the
/// terminal.
pub fn open_dashboard() -> Result<Dashboard> {
    let config = Config::read()?;
    let api_url = config.api_url();
    tracing::debug!(%api_url, "opening dashboard");

    let transport = Transport::new(&api_url, Arc::new(FileSessionStore::new()?), Arc::new(ConsoleNotifier));
    Ok(Dashboard::new(transport))
}

/// Prints what an effect asks to show. Forms and the auth view are handled
/// by the calling command.
pub fn show(effect: &Effect) {
    if let Effect::Render(frame) = effect {
        msg_print!(Message::TasksHeader(frame.filter.status.to_string()), true);
        msg_print!(View::render(&frame.visible()));
    }
}
