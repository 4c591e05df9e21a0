//! HTTP transport for the TaskPro REST API.
//!
//! Every request made by the client goes through [`Transport::request`], which
//! attaches the bearer credential, encodes JSON bodies and classifies the
//! response uniformly:
//!
//! | Response                               | Result                                   |
//! |----------------------------------------|------------------------------------------|
//! | 2xx with body                          | `Ok(Some(Reply::Json(value)))`           |
//! | 204 / empty 2xx                        | `Ok(Some(Reply::NoContent))`             |
//! | 401 on a request that carried a token  | session cleared, notified, `Ok(None)`    |
//! | 401 on an anonymous request (login)    | `Err(ApiError::Request { .. })`          |
//! | any other non-2xx                      | `Err(ApiError::Request { .. })`          |
//! | server unreachable                     | `Err(ApiError::Network(..))`             |
//!
//! The transport never retries and sets no timeout of its own. Each failure
//! ends that call; the caller decides whether to try again.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskpro::api::Transport;
//! use taskpro::libs::{notify::ConsoleNotifier, session::FileSessionStore};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let transport = Transport::new(
//!     "http://127.0.0.1:8000/api",
//!     Arc::new(FileSessionStore::new()?),
//!     Arc::new(ConsoleNotifier),
//! );
//! if let Some(reply) = transport.get("/tasks/?ordering=due_date").await? {
//!     println!("{:?}", reply);
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::notify::Notifier;
use crate::libs::session::SessionStore;
use reqwest::{
    header::{self, HeaderValue},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub mod auth;

pub use auth::Auth;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's error body as compact JSON, or a generic
    /// text when the body was not JSON.
    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// No response could be obtained.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// A successful response did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The stored token cannot be sent as a header value.
    #[error("stored access token is not a valid header value")]
    InvalidToken(#[from] header::InvalidHeaderValue),
}

/// Successful response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    /// Success without a body (204).
    NoContent,
}

impl Reply {
    /// Deserializes the JSON body into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            Reply::Json(value) => value,
            Reply::NoContent => Value::Null,
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Authenticated JSON-over-HTTP client.
///
/// Cheap to clone: the HTTP connection pool, session store and notifier are
/// shared.
#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl Transport {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
            notifier,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Option<Reply>, ApiError> {
        self.request::<()>(endpoint, Method::GET, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Option<Reply>, ApiError> {
        self.request(endpoint, Method::POST, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Option<Reply>, ApiError> {
        self.request(endpoint, Method::PUT, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Option<Reply>, ApiError> {
        self.request::<()>(endpoint, Method::DELETE, None).await
    }

    /// Sends one request and classifies the response.
    ///
    /// `Ok(None)` means the session expired: the token was rejected with 401,
    /// the session store has been cleared and the user notified.
    ///
    /// Only a request that carried a token can expire the session. A 401 on
    /// an anonymous request (a login with bad credentials) is returned as
    /// [`ApiError::Request`] with the server's explanation, not as "Session
    /// expired".
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<Option<Reply>, ApiError> {
        let url = self.url(endpoint);
        let token = self.session.get();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &token {
            request = request.header(header::AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, authenticated = token.is_some(), "sending request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, %url, %status, "response received");

        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            self.expire();
            return Ok(None);
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<Value>(&bytes) {
                Ok(body) => body.to_string(),
                Err(_) => Message::ApiRequestFailed.to_string(),
            };
            return Err(ApiError::Request { status, message });
        }

        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Ok(Some(Reply::NoContent));
        }

        Ok(Some(Reply::Json(serde_json::from_slice(&bytes)?)))
    }

    fn expire(&self) {
        tracing::info!("access token rejected, clearing session");
        if let Err(e) = self.session.clear() {
            self.notifier.error(Message::SessionStoreFailed(e.to_string()));
        }
        self.notifier.error(Message::SessionExpired);
    }
}
