//! Login and registration endpoints.

use super::{ApiError, Transport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const LOGIN_URL: &str = "/token/";
const REGISTER_URL: &str = "/register/";

#[derive(Serialize, Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access: String,
}

pub struct Auth {
    transport: Transport,
}

impl Auth {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Exchanges credentials for an access token.
    ///
    /// Bad credentials come back as [`ApiError::Request`] with the server's
    /// explanation: the login request carries no token, so a 401 here is not
    /// a session expiry.
    pub async fn login(&self, credentials: &Credentials) -> Result<Option<String>, ApiError> {
        match self.transport.post(LOGIN_URL, credentials).await? {
            Some(reply) => Ok(Some(reply.decode::<TokenResponse>()?.access)),
            None => Ok(None),
        }
    }

    /// Creates a user account. Returns the created user object.
    pub async fn register(&self, credentials: &Credentials) -> Result<Option<Value>, ApiError> {
        match self.transport.post(REGISTER_URL, credentials).await? {
            Some(reply) => Ok(Some(reply.decode::<Value>()?)),
            None => Ok(None),
        }
    }
}
