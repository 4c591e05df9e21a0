//! User-visible notifications.
//!
//! Transport, repository and dashboard report outcomes through a shared
//! [`Notifier`]. The CLI prints them with the message macros; tests collect
//! them with [`MemoryNotifier`].

use super::messages::{self, Message};
use crate::{msg_error, msg_success};
use parking_lot::Mutex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: Message,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.level {
            Level::Success => messages::success(self.message.clone()),
            Level::Error => messages::error(self.message.clone()),
        };
        write!(f, "{}", text)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: Message) {
        self.notify(Notification {
            level: Level::Success,
            message,
        });
    }

    fn error(&self, message: Message) {
        self.notify(Notification {
            level: Level::Error,
            message,
        });
    }
}

/// Prints notifications to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => msg_success!(notification.message),
            Level::Error => msg_error!(notification.message),
        }
    }
}

/// Collects notifications in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn contains(&self, message: &Message) -> bool {
        self.entries.lock().iter().any(|n| &n.message == message)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(%notification, "notification recorded");
        self.entries.lock().push(notification);
    }
}
