use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Classification attached to a fetch failure where it happens.
///
/// Presentation code branches on the kind, never on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Transport failed before the backend answered (offline, DNS, timeout).
    Network,
    /// The backend answered with an error (query failure, permission denied).
    Backend,
    /// The request itself was malformed (bad range, window too large).
    Validation,
    /// The backend is temporarily unable to serve (rate limited, maintenance).
    Unavailable,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Backend => "backend",
            FetchErrorKind::Validation => "validation",
            FetchErrorKind::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page fetch that did not produce a page.
///
/// The loader stores this verbatim in its state; it is never thrown across
/// the loader's public operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Network, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Backend, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Validation, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Unavailable, message)
    }

    /// Whether retrying the same request later can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            FetchErrorKind::Network | FetchErrorKind::Unavailable
        )
    }

    /// Display text for an error panel.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Network => {
                "Could not reach the server. Check your connection and try again."
            }
            FetchErrorKind::Backend => "The server could not load this list.",
            FetchErrorKind::Validation => "This request is not valid.",
            FetchErrorKind::Unavailable => {
                "The service is temporarily unavailable. Please retry in a moment."
            }
        }
    }
}
