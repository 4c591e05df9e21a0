use super::{form, open_dashboard, show};
use crate::libs::dashboard::Action;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account name (prompted when omitted)
    username: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account name (prompted when omitted)
    username: Option<String>,
}

pub async fn login(args: LoginArgs) -> Result<()> {
    let mut dashboard = open_dashboard()?;
    let username = form::prompt_username(args.username)?;
    let password = form::prompt_password(false)?;

    let effect = dashboard.dispatch(Action::Login { username, password }).await;
    show(&effect);
    Ok(())
}

pub async fn register(args: RegisterArgs) -> Result<()> {
    let mut dashboard = open_dashboard()?;
    let username = form::prompt_username(args.username)?;
    let password = form::prompt_password(true)?;

    dashboard.dispatch(Action::Register { username, password }).await;
    Ok(())
}

pub async fn logout() -> Result<()> {
    open_dashboard()?.dispatch(Action::Logout).await;
    Ok(())
}
