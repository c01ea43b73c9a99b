use std::fmt;

use serde::{Deserialize, Serialize};

const REDACTED: &str = "<redacted>";

/// Long-lived credentials exchanged for an access token
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("refresh_token", &REDACTED)
            .finish()
    }
}

/// Short-lived bearer token, valid for a single run
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&REDACTED).finish()
    }
}

/// Form body of the `refresh_token` grant
#[derive(Serialize, Debug)]
pub(crate) struct RefreshTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
    refresh_token: &'a str,
}

impl<'a> From<&'a Credentials> for RefreshTokenRequest<'a> {
    fn from(creds: &'a Credentials) -> Self {
        RefreshTokenRequest {
            client_id: &creds.client_id,
            client_secret: &creds.client_secret,
            grant_type: "refresh_token",
            refresh_token: &creds.refresh_token,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
}
