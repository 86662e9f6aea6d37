use std::fmt::{Debug, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::QueryError;

lazy_static! {
    /// OAuth key material issued by the API: 40 alphanumeric characters.
    static ref CREDENTIAL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9]{40}$").expect("Invalid regex pattern");
}

pub const CONSUMER_KEY_VAR: &str = "TK_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "TK_CONSUMER_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "TK_ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET_VAR: &str = "TK_ACCESS_TOKEN_SECRET";

/// The four OAuth 1.0 values needed to sign a request.
///
/// All four are validated on construction. `Debug` never prints them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            consumer_key: validate("consumer_key", consumer_key.into())?,
            consumer_secret: validate("consumer_secret", consumer_secret.into())?,
            access_token: validate("access_token", access_token.into())?,
            access_token_secret: validate("access_token_secret", access_token_secret.into())?,
        })
    }

    /// Read credentials from `TK_CONSUMER_KEY`, `TK_CONSUMER_SECRET`,
    /// `TK_ACCESS_TOKEN` and `TK_ACCESS_TOKEN_SECRET`.
    pub fn from_env() -> Result<Self, QueryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QueryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |credential: &'static str, var: &str| {
            lookup(var).ok_or_else(|| QueryError::InvalidCredential {
                name: credential,
                reason: format!("{} is not set", var),
            })
        };

        Self::new(
            read("consumer_key", CONSUMER_KEY_VAR)?,
            read("consumer_secret", CONSUMER_SECRET_VAR)?,
            read("access_token", ACCESS_TOKEN_VAR)?,
            read("access_token_secret", ACCESS_TOKEN_SECRET_VAR)?,
        )
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }
}

fn validate(name: &'static str, value: String) -> Result<String, QueryError> {
    if value.is_empty() {
        return Err(QueryError::InvalidCredential {
            name,
            reason: "value is empty".to_string(),
        });
    }
    if !CREDENTIAL_REGEX.is_match(&value) {
        return Err(QueryError::InvalidCredential {
            name,
            reason: "must be 40 consecutive alphanumeric characters".to_string(),
        });
    }
    Ok(value)
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}
