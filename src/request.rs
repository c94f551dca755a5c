//! Incoming HTTP request type.
//!
//! By the time a handler sees a [`Request`] the body has already been
//! collected into memory — handlers never await I/O to read it. Path
//! variables captured by the matching route predicate are attached before
//! dispatch and read back with [`Request::param`].

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

/// An incoming HTTP request with its body fully collected.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: impl Into<String>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        Self { method, path: path.into(), headers, body, params: HashMap::new() }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup. Returns `None` for absent headers and
    /// for values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The raw body bytes. Parse them however you like — tern does not
    /// interpret them.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a path variable captured by the matched route.
    ///
    /// For a route predicate `get("/person/{id}")`, `req.param("id")` on
    /// `/person/42` returns `Some("42")`. Variables are always strings;
    /// parsing (and deciding what a parse failure means) is the handler's
    /// job, not the router's.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
