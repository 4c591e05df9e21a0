//! # taskpro - terminal client for the TaskPro task service
//!
//! Authenticates against a TaskPro REST API and lets the user list, filter,
//! search, create, edit, complete and delete personal tasks. The local view
//! is always re-derived from the last server response: every successful
//! write is followed by a fresh fetch.
//!
//! ## Features
//!
//! - **Session**: encrypted, persistent bearer token; cleared on logout or 401
//! - **Tasks**: create, edit, toggle completion, delete
//! - **Views**: server-side status filter, client-side case-insensitive search
//! - **Interactive dashboard**: menu-driven loop over the same actions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpro::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
