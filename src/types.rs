//! Core types and errors for the breach lookup client.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring the client or looking up an email.
#[derive(Error, Debug)]
pub enum PwnCheckError {
    #[error("Cannot read CA file '{}': {reason}", path.display())]
    InvalidCaFile { path: PathBuf, reason: String },

    #[error("HTTP client error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid email format '{email}'")]
    InvalidEmail { email: String },

    #[error("Unexpected response - status code '{status}'")]
    UnexpectedResponse { status: u16 },

    #[error("Error decoding JSON: {0}")]
    InvalidResponseFormat(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PwnCheckError>;

/// Outcome of a single breach lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    /// The service has no entry for the email.
    NotBreached,
    /// The email appears in these breaches, in the order the service listed them.
    Breached { sites: Vec<String> },
}

impl LookupResult {
    pub fn is_breached(&self) -> bool {
        matches!(self, LookupResult::Breached { .. })
    }

    /// Breach site names, empty when not breached.
    pub fn sites(&self) -> &[String] {
        match self {
            LookupResult::NotBreached => &[],
            LookupResult::Breached { sites } => sites,
        }
    }
}
