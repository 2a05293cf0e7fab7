//! Error types for seedspace.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hub(#[from] HubError),
}

/// Problems with the caller's input or identity, detected before provisioning.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("token must not be empty")]
    EmptyToken,

    #[error("no user name returned for this token")]
    MissingIdentity,
}

/// Failures talking to the Hub.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token rejected by the hub (401)")]
    Unauthorized,

    #[error("space already exists: {0}")]
    AlreadyExists(String),

    #[error("hub returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to start runtime: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
