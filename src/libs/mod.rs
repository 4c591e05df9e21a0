//! Core library modules for the taskpro client.
//!
//! ## Layout
//!
//! - **Session**: durable storage of the bearer credential (`session`, `secret`)
//! - **Synchronization**: the task repository and the dashboard controller
//!   (`repository`, `dashboard`)
//! - **Presentation**: search filter, table rendering, notifications
//!   (`filter`, `view`, `notify`, `messages`)
//! - **Infrastructure**: configuration and data directory (`config`, `data_storage`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskpro::api::Transport;
//! use taskpro::libs::dashboard::{Action, Dashboard};
//! use taskpro::libs::notify::ConsoleNotifier;
//! use taskpro::libs::session::FileSessionStore;
//! use taskpro::libs::task::StatusFilter;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let transport = Transport::new(
//!     "http://127.0.0.1:8000/api",
//!     Arc::new(FileSessionStore::new()?),
//!     Arc::new(ConsoleNotifier),
//! );
//! let mut dashboard = Dashboard::new(transport);
//! dashboard.start().await;
//! dashboard.dispatch(Action::ChangeFilter(StatusFilter::Incomplete)).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod filter;
pub mod messages;
pub mod notify;
pub mod repository;
pub mod secret;
pub mod session;
pub mod task;
pub mod view;
