//! Bearer credential storage.
//!
//! The session is a single opaque access token. It is created on login,
//! survives process restarts through [`FileSessionStore`], and is destroyed on
//! logout or when the server answers 401 to an authenticated request.
//!
//! The store performs no validation of the token: it only remembers it.
//!
//! ```rust,no_run
//! use taskpro::libs::session::{FileSessionStore, SessionStore};
//!
//! let store = FileSessionStore::new()?;
//! if store.get().is_none() {
//!     store.set("eyJhbGciOi...")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::{data_storage::DataStorage, secret::Secret};
use anyhow::Result;
use parking_lot::Mutex;
use std::path::PathBuf;

/// File name of the encrypted token inside the data directory.
pub const ACCESS_TOKEN_FILE: &str = ".access_token";

/// Holder of the current bearer credential.
///
/// Shared between the transport (which reads it on every request and clears
/// it on expiry) and the dashboard (which sets it on login and clears it on
/// logout).
pub trait SessionStore: Send + Sync {
    /// Returns the current credential, if any.
    fn get(&self) -> Option<String>;

    /// Replaces the current credential.
    fn set(&self, token: &str) -> Result<()>;

    /// Forgets the current credential. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// Durable session store backed by an encrypted file.
///
/// The file is read once when the store is opened; afterwards the in-memory
/// copy answers `get` and every `set`/`clear` is written through.
#[derive(Debug)]
pub struct FileSessionStore {
    secret: Secret,
    token: Mutex<Option<String>>,
}

impl FileSessionStore {
    /// Opens the store at the default location in the data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(ACCESS_TOKEN_FILE)?;
        Ok(Self::open(path))
    }

    /// Opens the store at an explicit path.
    ///
    /// An unreadable or corrupted token file is treated as "no session".
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let secret = Secret::new(path);
        let token = match secret.read() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(path = %secret.path().display(), error = %e, "ignoring unreadable access token file");
                None
            }
        };

        Self {
            secret,
            token: Mutex::new(token),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_owned());
        self.secret.write(token)
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        self.secret.delete()
    }
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
