//! The request object a middleware chain inspects.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::Error;

/// A bag of named values handed to every node of a [`Chain`](crate::middleware::Chain).
///
/// Keys are strings, values are arbitrary JSON, and keys keep the order they
/// were inserted in. The chain only ever borrows a request, so no node can
/// change what the next node sees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    fields: Map<String, Value>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` and returns `self` so fields chain naturally:
    ///
    /// ```rust
    /// use motif::Request;
    ///
    /// let req = Request::new().with("user", "Alice").with("data", "X");
    /// assert!(req.contains("user"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn contains(&self, key: &str) -> bool { self.fields.contains_key(key) }
    pub fn get(&self, key: &str) -> Option<&Value> { self.fields.get(key) }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl From<Map<String, Value>> for Request {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Request {
    type Error = Error;

    /// Accepts `json!({ ... })`; anything other than an object is rejected.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null      => Err(Error::NotAnObject("null")),
            Value::Bool(_)   => Err(Error::NotAnObject("a boolean")),
            Value::Number(_) => Err(Error::NotAnObject("a number")),
            Value::String(_) => Err(Error::NotAnObject("a string")),
            Value::Array(_)  => Err(Error::NotAnObject("an array")),
        }
    }
}

/// Renders the request as a compact JSON object.
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
