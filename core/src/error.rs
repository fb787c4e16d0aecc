//! Error types for the partner API client.
//!
//! # Design
//! `ApiError` classifies every way a call can fail, but the endpoint
//! operations never hand it to the caller: `MarketClient::call` logs it and
//! collapses it to `None`. The classified form is still reachable through
//! `MarketClient::try_call` and `Dispatcher::try_send`.

use thiserror::Error;

/// Errors produced while building, sending or decoding a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// No usable response was obtained (DNS, refused connection, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body is not JSON. `body` is the raw text.
    #[error("response is not valid JSON: {reason}")]
    Decode { reason: String, body: String },

    /// A request argument could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// An argument failed local validation; nothing was sent.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A `{placeholder}` in the endpoint path was left unbound.
    #[error("missing path parameter `{0}`")]
    MissingPathParam(&'static str),

    /// A query or body key the endpoint does not declare.
    #[error("endpoint `{endpoint}` does not accept parameter `{key}`")]
    UnexpectedParam { endpoint: &'static str, key: String },
}

impl ApiError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True when the error was raised before anything reached the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Serialization(_)
                | ApiError::InvalidArgument { .. }
                | ApiError::MissingPathParam(_)
                | ApiError::UnexpectedParam { .. }
        )
    }
}

/// Errors raised while loading a `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` is not set")]
    MissingVar(&'static str),

    #[error("environment variable `{name}` is empty")]
    EmptyVar { name: &'static str },
}
