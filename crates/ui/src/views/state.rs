use std::fmt;

use dioxus::prelude::*;
use quiz_core::ValidationError;
use services::{ApiError, ApiErrorKind};
use tracing::{error, warn};

/// A failure as a view presents it: where it came from and what to tell the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Network(String),
    Backend(String),
    Validation(String),
    Unknown,
}

impl ViewError {
    /// Convert a backend failure into the page's own message, logging the cause.
    #[must_use]
    pub fn from_api(err: &ApiError, message: &str) -> Self {
        error!(error = %err, "{message}");
        match err.kind() {
            ApiErrorKind::Network => Self::Network(message.to_owned()),
            ApiErrorKind::Backend => Self::Backend(message.to_owned()),
        }
    }

    #[must_use]
    pub fn validation(err: impl Into<ValidationError>) -> Self {
        let err = err.into();
        warn!(%err, "rejected form input");
        Self::Validation(err.to_string())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Backend(message) | Self::Validation(message) => {
                message
            }
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Failed(err.clone()),
            None => ViewState::Failed(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
