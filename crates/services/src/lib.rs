#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http_client;
pub mod in_memory;

pub use client::QuizApi;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use endpoints::{Endpoint, Endpoints};
pub use error::{ApiError, ApiErrorKind, ConfigError};
pub use http_client::HttpQuizApi;
pub use in_memory::{ApiOperation, InMemoryQuizApi, SimulatedFailure};
