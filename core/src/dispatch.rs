//! The request dispatcher: one round trip, one normalized outcome.
//!
//! # Design
//! `Transport` is the only code that touches the network. `Dispatcher` runs
//! a built request through it, classifies the result with `parse_response`,
//! and at its public boundary turns every failure into an error log plus
//! `None`. Nothing is retried.

use serde_json::Value;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an `HttpRequest`. Non-2xx statuses are data, not errors; only
/// failures to obtain a response at all come back as `Err`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent with default timeouts.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let result = match (request.method, &request.body) {
            (HttpMethod::Get, _) => with_parts(self.agent.get(url), request).call(),
            (HttpMethod::Delete, None) => with_parts(self.agent.delete(url), request).call(),
            (HttpMethod::Delete, Some(body)) => {
                with_parts(self.agent.delete(url).force_send_body(), request).send(body.as_bytes())
            }
            (HttpMethod::Post, Some(body)) => {
                with_parts(self.agent.post(url), request).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_parts(self.agent.post(url), request).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_parts(self.agent.put(url), request).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_parts(self.agent.put(url), request).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_parts<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<B> {
    for (key, value) in &request.headers {
        builder = builder.header(key, value);
    }
    for (key, value) in &request.query {
        builder = builder.query(key, value);
    }
    builder
}

/// Map a received response to its JSON value or a classified error.
///
/// An empty 2xx body decodes to `Value::Null`.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
        reason: e.to_string(),
        body: response.body,
    })
}

/// Shared by every endpoint group of a `MarketClient`.
pub struct Dispatcher {
    transport: Box<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Send `request` and return the classified outcome.
    pub fn try_send(&self, request: &HttpRequest) -> Result<Value, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        parse_response(response)
    }

    /// Send `request`; any failure is logged at error level and becomes
    /// `None`.
    pub fn send(&self, request: &HttpRequest) -> Option<Value> {
        match self.try_send(request) {
            Ok(value) => Some(value),
            Err(e) => {
                log_failure(request, &e);
                None
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

fn log_failure(request: &HttpRequest, err: &ApiError) {
    match err {
        ApiError::Http { status, body } => error!(
            method = %request.method,
            url = %request.url,
            status,
            body = %body,
            "HTTP error"
        ),
        ApiError::Decode { reason, body } => error!(
            method = %request.method,
            url = %request.url,
            error = %reason,
            body = %body,
            "response body is not JSON"
        ),
        other => error!(
            method = %request.method,
            url = %request.url,
            error = %other,
            "request error"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct Canned(Mutex<Option<Result<HttpResponse, ApiError>>>);

    impl Canned {
        fn status(status: u16, body: &str) -> Self {
            Canned(Mutex::new(Some(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }))))
        }

        fn failing(reason: &str) -> Self {
            Canned(Mutex::new(Some(Err(ApiError::Transport(reason.to_string())))))
        }
    }

    impl Transport for Canned {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.0.lock().unwrap().take().expect("transport called twice")
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/campaigns".to_string(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn success_returns_decoded_body() {
        let dispatcher = Dispatcher::new(Canned::status(200, r#"{"ok": true}"#));
        assert_eq!(dispatcher.send(&request()), Some(json!({"ok": true})));
    }

    #[test]
    fn empty_success_body_is_null() {
        let dispatcher = Dispatcher::new(Canned::status(204, ""));
        assert_eq!(dispatcher.send(&request()), Some(Value::Null));
    }

    #[test]
    fn client_and_server_errors_become_none() {
        for status in [400, 401, 403, 404, 420, 500, 503] {
            let dispatcher = Dispatcher::new(Canned::status(status, r#"{"status":"ERROR"}"#));
            assert_eq!(dispatcher.send(&request()), None, "status {status}");
        }
    }

    #[test]
    fn http_error_keeps_raw_body() {
        let dispatcher = Dispatcher::new(Canned::status(400, "bad campaign"));
        let err = dispatcher.try_send(&request()).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 400, ref body } if body == "bad campaign"));
    }

    #[test]
    fn transport_failure_becomes_none() {
        let dispatcher = Dispatcher::new(Canned::failing("connection refused"));
        assert_eq!(dispatcher.send(&request()), None);
    }

    #[test]
    fn non_json_success_is_a_decode_error() {
        let dispatcher = Dispatcher::new(Canned::status(200, "<html>maintenance</html>"));
        let err = dispatcher.try_send(&request()).unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref body, .. } if body.contains("maintenance")));
    }

    #[test]
    fn json_scalars_and_lists_pass_through() {
        let dispatcher = Dispatcher::new(Canned::status(200, "[1, 2, 3]"));
        assert_eq!(dispatcher.send(&request()), Some(json!([1, 2, 3])));
        let dispatcher = Dispatcher::new(Canned::status(200, "42"));
        assert_eq!(dispatcher.send(&request()), Some(json!(42)));
    }
}
