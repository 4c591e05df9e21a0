//! Dashboard controller: turns user actions into repository calls and
//! re-derives what is shown.
//!
//! ## States
//!
//! ```text
//!                    login ok                   open create / edit
//! Unauthenticated ────────────▶ Authenticated ─────────────────────▶ EditingTask
//!        ▲                        │     ▲                                 │
//!        └──── logout / 401 ──────┘     └──── submit ok / cancel ─────────┘
//! ```
//!
//! Every transition that (re-)enters `Authenticated` performs exactly one
//! `list` and produces exactly one [`Effect::Render`]. A 401 seen on any
//! request drops the dashboard back to `Unauthenticated` and empties the
//! held collection.
//!
//! Actions that show the list (filter, search, refresh, delete, toggle)
//! close an open form first.
//!
//! ## Actions
//!
//! User gestures arrive as [`Action`] values and are handled one at a time
//! by [`Dashboard::dispatch`]. The returned [`Effect`] tells the front end
//! what to show next; notifications have already been emitted.

use super::filter;
use super::messages::Message;
use super::notify::Notifier;
use super::repository::TaskRepository;
use super::session::SessionStore;
use super::task::{FilterState, StatusFilter, Task, TaskForm, TaskId};
use crate::api::auth::{Auth, Credentials};
use crate::api::{ApiError, Transport};
use std::sync::Arc;

/// Which task the form is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editing {
    New,
    /// `status` is the completion the task had when the form was opened.
    Existing { id: TaskId, status: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Unauthenticated,
    Authenticated,
    EditingTask(Editing),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String, password: String },
    Register { username: String, password: String },
    Logout,
    OpenCreate,
    OpenEdit(TaskId),
    Cancel,
    Submit(TaskForm),
    DeleteTask(TaskId),
    ToggleStatus(TaskId, bool),
    ChangeFilter(StatusFilter),
    ChangeSearch(String),
    Refresh,
}

/// What is visible after a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub filter: FilterState,
    pub tasks: Vec<Task>,
}

impl Frame {
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing new to show.
    None,
    /// Show the task list.
    Render(Frame),
    /// Show the task form, pre-filled.
    ShowForm(TaskForm),
    /// Show the login / registration view.
    ShowAuth,
}

pub struct Dashboard {
    auth: Auth,
    repository: TaskRepository,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    state: ViewState,
    filter: FilterState,
}

impl Dashboard {
    /// Builds the dashboard; the initial state depends on whether a
    /// credential is already stored.
    pub fn new(transport: Transport) -> Self {
        let session = transport.session().clone();
        let notifier = transport.notifier().clone();
        let state = match session.get() {
            Some(_) => ViewState::Authenticated,
            None => ViewState::Unauthenticated,
        };

        Self {
            auth: Auth::new(transport.clone()),
            repository: TaskRepository::new(transport),
            session,
            notifier,
            state,
            filter: FilterState::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_authenticated(&self) -> bool {
        self.state != ViewState::Unauthenticated
    }

    pub fn tasks(&self) -> &[Task] {
        self.repository.tasks()
    }

    /// Initial view: the task list when a session exists, the auth view
    /// otherwise.
    pub async fn start(&mut self) -> Effect {
        match self.state {
            ViewState::Unauthenticated => Effect::ShowAuth,
            _ => self.enter_authenticated().await,
        }
    }

    pub async fn dispatch(&mut self, action: Action) -> Effect {
        tracing::debug!(?action, state = ?self.state, "dispatching action");

        match action {
            Action::Login { username, password } => self.login(&username, &password).await,
            Action::Register { username, password } => self.register(&username, &password).await,
            Action::Logout => self.logout(),
            _ if !self.is_authenticated() => {
                self.notifier.error(Message::NotLoggedIn);
                Effect::ShowAuth
            }
            Action::OpenCreate => {
                self.transition(ViewState::EditingTask(Editing::New));
                Effect::ShowForm(TaskForm::blank())
            }
            Action::OpenEdit(id) => self.open_edit(id),
            Action::Cancel => match self.state {
                ViewState::EditingTask(_) => self.enter_authenticated().await,
                _ => Effect::None,
            },
            Action::Submit(form) => self.submit(form).await,
            Action::DeleteTask(id) => {
                self.close_form();
                self.delete(&id).await
            }
            Action::ToggleStatus(id, done) => {
                self.close_form();
                self.toggle(&id, done).await
            }
            Action::ChangeFilter(status) => {
                self.close_form();
                self.filter.status = status;
                self.refresh().await
            }
            Action::ChangeSearch(search) => {
                self.filter.search = search;
                match self.close_form() {
                    true => self.refresh().await,
                    false => Effect::Render(self.frame()),
                }
            }
            Action::Refresh => {
                self.close_form();
                self.refresh().await
            }
        }
    }

    async fn login(&mut self, username: &str, password: &str) -> Effect {
        if self.is_authenticated() {
            self.notifier.error(Message::AlreadyLoggedIn);
            return Effect::None;
        }

        let token = match self.auth.login(&Credentials::new(username, password)).await {
            Ok(Some(token)) => token,
            Ok(None) => return Effect::None,
            Err(e) => return self.request_failed(e),
        };
        if let Err(e) = self.session.set(&token) {
            self.notifier.error(Message::SessionStoreFailed(e.to_string()));
        }
        self.notifier.success(Message::LoggedIn(username.to_owned()));
        self.enter_authenticated().await
    }

    async fn register(&mut self, username: &str, password: &str) -> Effect {
        match self.auth.register(&Credentials::new(username, password)).await {
            Ok(Some(_)) => {
                self.notifier.success(Message::RegistrationSuccessful);
                Effect::None
            }
            Ok(None) => self.after_failure(),
            Err(e) => self.request_failed(e),
        }
    }

    fn logout(&mut self) -> Effect {
        if let Err(e) = self.session.clear() {
            self.notifier.error(Message::SessionStoreFailed(e.to_string()));
        }
        self.leave_authenticated();
        self.notifier.success(Message::LoggedOut);
        Effect::ShowAuth
    }

    /// Pre-fills the form from the held task. An id that is no longer held
    /// is reported and leaves the state unchanged.
    fn open_edit(&mut self, id: TaskId) -> Effect {
        let (form, status) = match self.repository.find(&id) {
            Some(task) => (TaskForm::from_task(task), task.is_completed()),
            None => {
                self.notifier.error(Message::TaskNotFoundWithId(id.to_string()));
                return Effect::None;
            }
        };
        self.transition(ViewState::EditingTask(Editing::Existing { id, status }));
        Effect::ShowForm(form)
    }

    async fn submit(&mut self, form: TaskForm) -> Effect {
        let editing = match &self.state {
            ViewState::EditingTask(editing) => editing.clone(),
            _ => return Effect::None,
        };

        let (saved, message) = match &editing {
            Editing::New => (self.repository.create(&form.into_fields(None)).await, Message::TaskCreated),
            Editing::Existing { id, status } => {
                let fields = form.into_fields(Some(*status));
                (self.repository.update(id, &fields).await, Message::TaskUpdated)
            }
        };

        match saved {
            Some(_) => {
                self.notifier.success(message);
                self.enter_authenticated().await
            }
            None => self.after_failure(),
        }
    }

    async fn delete(&mut self, id: &TaskId) -> Effect {
        match self.repository.remove(id).await {
            Some(()) => {
                self.notifier.success(Message::TaskDeleted);
                self.refresh().await
            }
            None => self.after_failure(),
        }
    }

    async fn toggle(&mut self, id: &TaskId, done: bool) -> Effect {
        let fields = match self.repository.find(id) {
            Some(task) => task.with_status(done),
            None => {
                self.notifier.error(Message::TaskNotFoundWithId(id.to_string()));
                return Effect::None;
            }
        };

        match self.repository.update(id, &fields).await {
            Some(_) => {
                self.notifier.success(Message::TaskStatusUpdated);
                self.refresh().await
            }
            None => self.after_failure(),
        }
    }

    /// Re-fetches and re-renders without changing the state.
    async fn refresh(&mut self) -> Effect {
        match self.repository.list(self.filter.status).await {
            Some(_) => Effect::Render(self.frame()),
            None => self.after_failure(),
        }
    }

    /// Enters `Authenticated` with one list and one render.
    async fn enter_authenticated(&mut self) -> Effect {
        self.transition(ViewState::Authenticated);
        self.refresh().await
    }

    /// Drops an open form without touching the network. `true` if one was
    /// open.
    fn close_form(&mut self) -> bool {
        match self.state {
            ViewState::EditingTask(_) => {
                self.transition(ViewState::Authenticated);
                true
            }
            _ => false,
        }
    }

    fn leave_authenticated(&mut self) {
        self.repository.clear();
        self.transition(ViewState::Unauthenticated);
    }

    fn request_failed(&mut self, error: ApiError) -> Effect {
        tracing::warn!(%error, "request failed");
        self.notifier.error(Message::RequestError(error.to_string()));
        self.after_failure()
    }

    /// After any failed operation: if the transport dropped the session,
    /// follow it to the auth view; otherwise stay where we are.
    fn after_failure(&mut self) -> Effect {
        if self.is_authenticated() && self.session.get().is_none() {
            self.leave_authenticated();
            return Effect::ShowAuth;
        }
        Effect::None
    }

    fn transition(&mut self, next: ViewState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "dashboard state changed");
            self.state = next;
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            filter: self.filter.clone(),
            tasks: filter::search(self.repository.tasks(), &self.filter.search).into_iter().cloned().collect(),
        }
    }
}
