//! Shared error types for the services crate.

pub use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification the views use to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never reached the backend or no response came back.
    Network,
    /// The backend answered, but not with a usable success response.
    Backend,
}

/// Errors emitted by `QuizApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend responded with status {status}")]
    Backend { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport(err) if err.is_decode() || err.is_status() => ApiErrorKind::Backend,
            Self::Transport(_) | Self::Unreachable(_) => ApiErrorKind::Network,
            Self::Backend { .. } | Self::Decode(_) => ApiErrorKind::Backend,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// Errors emitted while reading client configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid backend URL {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}
