//! Blocking client for the marketplace partner REST API.
//!
//! # Overview
//! `MarketClient` holds the credentials and a dispatcher. Endpoint groups
//! (`client.campaigns()`, `client.reports()`, ...) translate typed arguments
//! into vendor keys and return the decoded JSON body, or `None` when
//! anything went wrong. Every failure is logged through `tracing` at ERROR
//! level before it is collapsed.
//!
//! # Design
//! - The endpoint catalog is data: each operation is a `const Endpoint`
//!   naming its method, path template and accepted query/body keys.
//! - Requests are built as plain `HttpRequest` values and executed through
//!   the `Transport` trait, so building stays deterministic and testable.
//!   `UreqTransport` is the production implementation.
//! - Arguments are validated locally; a rejected call sends nothing.
//! - Responses are not modeled. Callers receive `serde_json::Value`.

pub mod api;
pub mod args;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod types;
pub(crate) mod validate;

pub use api::{Page, PromoRemoval};
pub use args::{Args, QueryValue};
pub use client::MarketClient;
pub use config::ClientConfig;
pub use dispatch::{Dispatcher, Transport, UreqTransport};
pub use endpoint::{Endpoint, Keys};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ReportFormat, SortOrder};
