//! The shared client every endpoint group borrows.
//!
//! # Design
//! `MarketClient` owns the immutable configuration and the dispatcher. A
//! call is split the way the rest of the crate is: `build` turns an
//! `Endpoint` plus `Args` into an `HttpRequest` without I/O, the dispatcher
//! executes it. `call` is the entry point used by the endpoint groups; it
//! logs and swallows every failure, including arguments rejected before
//! anything is sent.

use serde_json::Value;
use tracing::error;

use crate::api::{
    Businesses, Campaigns, Categories, Chats, Feedback, Logistics, Models, Offers, Promos,
    Regions, Reports, Tariffs,
};
use crate::args::Args;
use crate::config::ClientConfig;
use crate::dispatch::{Dispatcher, Transport, UreqTransport};
use crate::endpoint::{Endpoint, Keys};
use crate::error::{ApiError, ConfigError};
use crate::http::HttpRequest;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "Api-Key";
/// Content type declared on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking client for the partner API.
#[derive(Debug)]
pub struct MarketClient {
    config: ClientConfig,
    headers: Vec<(String, String)>,
    dispatcher: Dispatcher,
}

impl MarketClient {
    /// Client talking to the configured address over `ureq`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Client built from `MARKET_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        let headers = vec![
            (API_KEY_HEADER.to_string(), config.api_key().to_string()),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
        ];
        Self {
            config,
            headers,
            dispatcher: Dispatcher::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request for `endpoint` without sending it.
    pub fn build(&self, endpoint: &Endpoint, args: Args) -> Result<HttpRequest, ApiError> {
        if let Some(err) = args.error {
            return Err(err);
        }
        let path = endpoint.render_path(&args.path)?;

        for (key, _) in &args.query {
            if !endpoint.query.accepts(key) {
                return Err(ApiError::UnexpectedParam {
                    endpoint: endpoint.name,
                    key: key.clone(),
                });
            }
        }
        check_body_keys(endpoint, args.body.as_ref())?;

        let body = args
            .body
            .map(|body| serde_json::to_string(&body))
            .transpose()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        Ok(HttpRequest {
            method: endpoint.method,
            url: format!("{}/{path}", self.config.base_url()),
            headers: self.headers.clone(),
            query: args.query,
            body,
        })
    }

    /// Build and send; return the classified outcome.
    pub fn try_call(&self, endpoint: &Endpoint, args: Args) -> Result<Value, ApiError> {
        let request = self.build(endpoint, args)?;
        self.dispatcher.try_send(&request)
    }

    /// Build and send. Rejected arguments, transport failures, error
    /// statuses and undecodable bodies are all logged and yield `None`.
    pub fn call(&self, endpoint: &Endpoint, args: Args) -> Option<Value> {
        match self.build(endpoint, args) {
            Ok(request) => self.dispatcher.send(&request),
            Err(e) => {
                error!(endpoint = endpoint.name, error = %e, "request rejected before sending");
                None
            }
        }
    }

    /// Like `call`, with arguments produced by a fallible validation step.
    pub fn call_checked(
        &self,
        endpoint: &Endpoint,
        args: impl FnOnce() -> Result<Args, ApiError>,
    ) -> Option<Value> {
        match args() {
            Ok(args) => self.call(endpoint, args),
            Err(e) => {
                error!(endpoint = endpoint.name, error = %e, "request rejected before sending");
                None
            }
        }
    }

    pub fn businesses(&self) -> Businesses<'_> {
        Businesses::new(self)
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(self)
    }

    pub fn offers(&self) -> Offers<'_> {
        Offers::new(self)
    }

    pub fn models(&self) -> Models<'_> {
        Models::new(self)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    pub fn chats(&self) -> Chats<'_> {
        Chats::new(self)
    }

    pub fn feedback(&self) -> Feedback<'_> {
        Feedback::new(self)
    }

    pub fn promos(&self) -> Promos<'_> {
        Promos::new(self)
    }

    pub fn regions(&self) -> Regions<'_> {
        Regions::new(self)
    }

    pub fn logistics(&self) -> Logistics<'_> {
        Logistics::new(self)
    }

    pub fn tariffs(&self) -> Tariffs<'_> {
        Tariffs::new(self)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }
}

fn check_body_keys(endpoint: &Endpoint, body: Option<&Value>) -> Result<(), ApiError> {
    let Some(body) = body else {
        return Ok(());
    };
    match (endpoint.body, body) {
        (Keys::Any, _) => Ok(()),
        (Keys::Only(_), Value::Object(map)) => {
            match map.keys().find(|key| !endpoint.body.accepts(key)) {
                Some(key) => Err(ApiError::UnexpectedParam {
                    endpoint: endpoint.name,
                    key: key.clone(),
                }),
                None => Ok(()),
            }
        }
        (Keys::Only(_), _) => Err(ApiError::Serialization(format!(
            "endpoint `{}` expects a JSON object body",
            endpoint.name
        ))),
        (Keys::None, _) => Err(ApiError::UnexpectedParam {
            endpoint: endpoint.name,
            key: "<body>".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::HttpMethod;

    const ORDERS: Endpoint =
        Endpoint::get("campaigns.orders", "campaigns/{campaign_id}/orders").query(&["limit", "page_token"]);
    const QUALITY: Endpoint =
        Endpoint::post("businesses.quality_rating", "businesses/{business_id}/ratings/quality")
            .body(&["campaignIds"]);

    fn client() -> MarketClient {
        MarketClient::new(ClientConfig::new("914570202", "ACMA:test").with_base_url("http://localhost:3000"))
    }

    #[test]
    fn build_joins_base_and_path() {
        let req = client()
            .build(&ORDERS, Args::new().path("campaign_id", 21962613).query("limit", 5u32))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/campaigns/21962613/orders");
        assert_eq!(req.query, vec![("limit".to_string(), "5".to_string())]);
        assert!(req.body.is_none());
    }

    #[test]
    fn build_always_attaches_auth_headers() {
        let req = client().build(&ORDERS, Args::new().path("campaign_id", 1)).unwrap();
        assert_eq!(req.header("api-key"), Some("ACMA:test"));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn build_serializes_body_fields() {
        let req = client()
            .build(
                &QUALITY,
                Args::new().path("business_id", 954323).field("campaignIds", [1u64, 2]),
            )
            .unwrap();
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"campaignIds": [1, 2]}));
    }

    #[test]
    fn build_rejects_undeclared_query_key() {
        let err = client()
            .build(&ORDERS, Args::new().path("campaign_id", 1).query("offset", 10u32))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedParam { key, .. } if key == "offset"));
    }

    #[test]
    fn build_rejects_undeclared_body_key() {
        let err = client()
            .build(&QUALITY, Args::new().path("business_id", 1).field("campaigns", [1]))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedParam { key, .. } if key == "campaigns"));
    }

    #[test]
    fn build_rejects_body_on_bodyless_endpoint() {
        let err = client()
            .build(&ORDERS, Args::new().path("campaign_id", 1).field("x", 1))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedParam { .. }));
    }

    #[test]
    fn build_requires_path_parameters() {
        let err = client().build(&ORDERS, Args::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingPathParam("campaign_id")));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn client_is_shareable_across_threads() {
        assert_send_sync::<MarketClient>();
        assert_send_sync::<ClientConfig>();
    }

    #[test]
    fn rejected_arguments_never_reach_the_network() {
        let err = client().try_call(&ORDERS, Args::new()).unwrap_err();
        assert!(err.is_local());
    }
}
