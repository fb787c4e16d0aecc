//! Declarative description of a remote operation.
//!
//! # Design
//! Every vendor endpoint is a `const Endpoint`: method, path template and
//! the query/body keys it accepts. The endpoint groups under `api` only map
//! arguments onto these keys; `MarketClient::build` is the one place that
//! turns a table entry plus arguments into a request.

use crate::error::ApiError;
use crate::http::HttpMethod;

/// Which keys an endpoint accepts in the query string or the JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keys {
    /// Nothing may be sent.
    None,
    /// Exactly these keys may be sent, each optional.
    Only(&'static [&'static str]),
    /// Free-form: the caller passes a vendor-defined map through.
    Any,
}

impl Keys {
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            Keys::None => false,
            Keys::Only(keys) => keys.contains(&key),
            Keys::Any => true,
        }
    }
}

/// One entry of the endpoint catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Stable name used in logs.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base address, with `{name}` placeholders.
    pub path: &'static str,
    pub query: Keys,
    pub body: Keys,
}

impl Endpoint {
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Put, path)
    }

    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Delete, path)
    }

    const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            query: Keys::None,
            body: Keys::None,
        }
    }

    pub const fn query(mut self, keys: &'static [&'static str]) -> Self {
        self.query = Keys::Only(keys);
        self
    }

    pub const fn any_query(mut self) -> Self {
        self.query = Keys::Any;
        self
    }

    pub const fn body(mut self, keys: &'static [&'static str]) -> Self {
        self.body = Keys::Only(keys);
        self
    }

    pub const fn any_body(mut self) -> Self {
        self.body = Keys::Any;
        self
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// Substitute every placeholder with its bound value, percent-encoded
    /// as a single path segment. The result never starts with `/`.
    pub fn render_path(&self, params: &[(&'static str, String)]) -> Result<String, ApiError> {
        let mut path = self.path.trim_start_matches('/').to_string();
        for name in self.placeholders() {
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
                .ok_or(ApiError::MissingPathParam(name))?;
            if matches!(value.as_str(), "" | "." | "..") {
                return Err(ApiError::invalid(name, "not a valid path segment"));
            }
            path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        }
        Ok(path)
    }
}
