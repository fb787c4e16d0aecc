//! Arguments of a single endpoint call.
//!
//! `Args` collects path bindings, query pairs and body fields. Optional
//! values that are absent or empty (`None`, `""`, `[]`) are dropped at the
//! point they are added, so nothing downstream ever sees a null key.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A value that can be rendered into zero or more query pairs.
pub trait QueryValue {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>);
}

macro_rules! display_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
                    out.push((key.to_string(), self.to_string()));
                }
            }
        )*
    };
}

display_query_value!(u8, u16, u32, u64, usize, i32, i64, bool);

impl QueryValue for str {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        if !self.is_empty() {
            out.push((key.to_string(), self.to_string()));
        }
    }
}

impl QueryValue for String {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        self.as_str().push_pairs(key, out);
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        if let Some(value) = self {
            value.push_pairs(key, out);
        }
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        for value in self {
            value.push_pairs(key, out);
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        self.as_slice().push_pairs(key, out);
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        (**self).push_pairs(key, out);
    }
}

impl QueryValue for Value {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            Value::Null => {}
            Value::String(s) => s.push_pairs(key, out),
            Value::Bool(b) => b.push_pairs(key, out),
            Value::Number(n) => out.push((key.to_string(), n.to_string())),
            Value::Array(items) => items.push_pairs(key, out),
            Value::Object(_) => out.push((key.to_string(), self.to_string())),
        }
    }
}

/// `None`, an empty string and an empty list count as "not supplied".
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Path, query and body inputs for one call.
#[derive(Debug, Default)]
pub struct Args {
    pub(crate) path: Vec<(&'static str, String)>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) error: Option<ApiError>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a `{name}` placeholder of the endpoint path.
    #[must_use]
    pub fn path(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path.push((name, value.to_string()));
        self
    }

    /// Add a query parameter. Absent and empty values are skipped; lists
    /// become repeated keys.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl QueryValue) -> Self {
        value.push_pairs(key, &mut self.query);
        self
    }

    /// Pass a vendor-defined parameter map through unchanged, minus null
    /// and empty entries.
    #[must_use]
    pub fn query_map(mut self, params: Option<&Map<String, Value>>) -> Self {
        for (key, value) in params.into_iter().flatten() {
            value.push_pairs(key, &mut self.query);
        }
        self
    }

    /// Set a required body field. Sent even when empty.
    #[must_use]
    pub fn field(self, key: &str, value: impl Serialize) -> Self {
        self.insert(key, value, false)
    }

    /// Set an optional body field; absent or empty values are skipped.
    #[must_use]
    pub fn opt_field(self, key: &str, value: impl Serialize) -> Self {
        self.insert(key, value, true)
    }

    /// Merge every non-blank field of a serializable struct into the body.
    #[must_use]
    pub fn fields(mut self, payload: &impl Serialize) -> Self {
        match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => {
                for (key, value) in map {
                    if !is_blank(&value) {
                        self = self.insert_value(key, value);
                    }
                }
                self
            }
            Ok(other) => self.fail(ApiError::Serialization(format!(
                "expected a JSON object, got {other}"
            ))),
            Err(e) => self.fail(ApiError::Serialization(e.to_string())),
        }
    }

    /// Use a free-form JSON body. `None` and `Some(Value::Null)` leave the
    /// body unset.
    #[must_use]
    pub fn body(mut self, body: Option<Value>) -> Self {
        match body {
            None | Some(Value::Null) => {}
            Some(body) => self.body = Some(body),
        }
        self
    }

    fn insert(self, key: &str, value: impl Serialize, skip_blank: bool) -> Self {
        match serde_json::to_value(value) {
            Ok(value) if skip_blank && is_blank(&value) => self,
            Ok(value) => self.insert_value(key.to_string(), value),
            Err(e) => self.fail(ApiError::Serialization(e.to_string())),
        }
    }

    fn insert_value(mut self, key: String, value: Value) -> Self {
        match &mut self.body {
            Some(Value::Object(map)) => {
                map.insert(key, value);
            }
            None => {
                let mut map = Map::new();
                map.insert(key, value);
                self.body = Some(Value::Object(map));
            }
            Some(_) => {
                return self.fail(ApiError::Serialization(format!(
                    "cannot add field `{key}` to a non-object body"
                )));
            }
        }
        self
    }

    fn fail(mut self, error: ApiError) -> Self {
        self.error.get_or_insert(error);
        self
    }
}
