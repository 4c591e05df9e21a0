//! The client's single source of truth for "which tasks does the server
//! currently say exist".
//!
//! ## Consistency model
//!
//! The held collection is **replaced, never merged**: every successful
//! [`TaskRepository::list`] swaps in exactly what the server returned, and
//! the write operations (`create`, `update`, `remove`) leave it untouched.
//! Callers re-run `list` after a successful write to observe the result. The
//! collection is therefore only asserted to be correct right after a `list`.
//!
//! ## Failure handling
//!
//! Operations return `Some(..)` on success and `None` otherwise. Request
//! failures are turned into error notifications here and do not propagate;
//! a `None` caused by session expiry has already been reported by the
//! transport.

use super::messages::Message;
use super::task::{StatusFilter, Task, TaskFields, TaskId};
use crate::api::{ApiError, Reply, Transport};

const TASKS_URL: &str = "/tasks/";

pub struct TaskRepository {
    transport: Transport,
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            tasks: Vec::new(),
        }
    }

    /// Snapshot of the last successfully fetched collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Drops the held collection (used on logout).
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Fetches the tasks ordered by due date, scoped by `filter`, and
    /// replaces the held collection with the result.
    pub async fn list(&mut self, filter: StatusFilter) -> Option<&[Task]> {
        let tasks: Vec<Task> = self.settle(self.transport.get(&list_url(filter)).await)?;
        tracing::debug!(%filter, count = tasks.len(), "task collection replaced");
        self.tasks = tasks;
        Some(&self.tasks)
    }

    pub async fn create(&self, fields: &TaskFields) -> Option<Task> {
        self.settle(self.transport.post(TASKS_URL, fields).await)
    }

    pub async fn update(&self, id: &TaskId, fields: &TaskFields) -> Option<Task> {
        self.settle(self.transport.put(&task_url(id), fields).await)
    }

    pub async fn remove(&self, id: &TaskId) -> Option<()> {
        match self.transport.delete(&task_url(id)).await {
            Ok(Some(_)) => Some(()),
            Ok(None) => None,
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// Decodes a successful reply, reporting any failure.
    fn settle<T: serde::de::DeserializeOwned>(&self, result: Result<Option<Reply>, ApiError>) -> Option<T> {
        match result.and_then(|reply| reply.map(Reply::decode::<T>).transpose()) {
            Ok(value) => value,
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    fn report(&self, error: ApiError) {
        tracing::warn!(%error, "task request failed");
        self.transport.notifier().error(Message::RequestError(error.to_string()));
    }
}

pub fn list_url(filter: StatusFilter) -> String {
    match filter.query_value() {
        Some(status) => format!("{}?ordering=due_date&status={}", TASKS_URL, status),
        None => format!("{}?ordering=due_date", TASKS_URL),
    }
}

pub fn task_url(id: &TaskId) -> String {
    format!("{}{}/", TASKS_URL, id)
}
