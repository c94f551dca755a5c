//! Request predicates.
//!
//! A [`Predicate`] is a small tagged tree of conditions tested against an
//! incoming request: method equality, path-template match (with `{name}`
//! variable capture), and header / content-type / accept constraints,
//! composed with short-circuit [`and`](Predicate::and) /
//! [`or`](Predicate::or).
//!
//! The free constructors mirror the route table they describe:
//!
//! ```rust
//! use tern::{accept, content_type, get, post};
//!
//! let list = get("/person").and(accept("application/json"));
//! let create = post("/person").and(content_type("application/json"));
//! ```
//!
//! Predicates are built once at startup. An invalid path template panics at
//! registration, never at request time.

use std::collections::HashMap;
use std::fmt;

use http::Method;

use crate::request::Request;

// ── Path templates ────────────────────────────────────────────────────────────

/// A compiled path template such as `/person/{id}`.
///
/// Matching and variable capture are delegated to a single-route [`matchit`]
/// tree; the ordering of routes relative to each other stays with the
/// router, which scans predicates in registration order.
pub struct PathTemplate {
    template: String,
    tree: matchit::Router<()>,
}

impl PathTemplate {
    /// # Panics
    ///
    /// Panics if `template` is not a valid route template.
    fn new(template: &str) -> Self {
        let mut tree = matchit::Router::new();
        tree.insert(template, ())
            .unwrap_or_else(|e| panic!("invalid path template `{template}`: {e}"));
        Self { template: template.to_owned(), tree }
    }

    /// Tests `path` against the template, inserting captured variables into
    /// `params` on success.
    fn capture(&self, path: &str, params: &mut HashMap<String, String>) -> bool {
        match self.tree.at(path) {
            Ok(matched) => {
                for (key, value) in matched.params.iter() {
                    params.insert(key.to_owned(), value.to_owned());
                }
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Debug for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathTemplate").field(&self.template).finish()
    }
}

// ── Predicate tree ────────────────────────────────────────────────────────────

/// A condition tested against an incoming request.
#[derive(Debug)]
pub enum Predicate {
    /// Method equality.
    Method(Method),
    /// Path-template match with `{name}` capture.
    Path(PathTemplate),
    /// Exact header value (name compared case-insensitively).
    Header { name: String, value: String },
    /// `content-type` media type, parameters (`; charset=…`) ignored.
    /// The header must be present.
    ContentType(String),
    /// `accept` header compatibility. A missing `accept` header accepts
    /// everything; `*/*` and `type/*` wildcards are honoured.
    Accept(String),
    /// Both sides, short-circuit.
    And(Box<Predicate>, Box<Predicate>),
    /// Either side, short-circuit. Variables captured by a failed left arm
    /// do not leak into the result.
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Evaluates the predicate against `req`, collecting path variables into
    /// `params`. Callers discard `params` when the result is `false`.
    pub(crate) fn matches(&self, req: &Request, params: &mut HashMap<String, String>) -> bool {
        match self {
            Predicate::Method(m) => req.method() == m,
            Predicate::Path(template) => template.capture(req.path(), params),
            Predicate::Header { name, value } => {
                req.header(name).is_some_and(|v| v == value)
            }
            Predicate::ContentType(wanted) => {
                req.header("content-type").is_some_and(|v| media_type(v) == wanted)
            }
            Predicate::Accept(wanted) => match req.header("accept") {
                // No accept header means the client takes anything.
                None => true,
                Some(raw) => accepts(raw, wanted),
            },
            Predicate::And(a, b) => a.matches(req, params) && b.matches(req, params),
            Predicate::Or(a, b) => {
                let mut left = params.clone();
                if a.matches(req, &mut left) {
                    *params = left;
                    true
                } else {
                    b.matches(req, params)
                }
            }
        }
    }
}

/// Strips media-type parameters: `application/json; charset=utf-8` →
/// `application/json`.
fn media_type(value: &str) -> &str {
    match value.split_once(';') {
        Some((essence, _)) => essence.trim(),
        None => value.trim(),
    }
}

/// Does an `accept` header value accept the `wanted` media type?
fn accepts(raw: &str, wanted: &str) -> bool {
    raw.split(',').map(media_type).any(|offered| {
        if offered == wanted || offered == "*/*" {
            return true;
        }
        match (offered.strip_suffix("/*"), wanted.split_once('/')) {
            (Some(family), Some((wanted_family, _))) => family == wanted_family,
            _ => false,
        }
    })
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Method equality.
pub fn method(m: Method) -> Predicate {
    Predicate::Method(m)
}

/// Path-template match. Panics at registration on an invalid template.
pub fn path(template: &str) -> Predicate {
    Predicate::Path(PathTemplate::new(template))
}

/// `GET` + path template.
pub fn get(template: &str) -> Predicate {
    method(Method::GET).and(path(template))
}

/// `POST` + path template.
pub fn post(template: &str) -> Predicate {
    method(Method::POST).and(path(template))
}

/// Exact header value.
pub fn header(name: &str, value: &str) -> Predicate {
    Predicate::Header { name: name.to_owned(), value: value.to_owned() }
}

/// `content-type` media type.
pub fn content_type(mime: &str) -> Predicate {
    Predicate::ContentType(mime.to_owned())
}

/// `accept` header compatibility.
pub fn accept(mime: &str) -> Predicate {
    Predicate::Accept(mime.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::header::HeaderValue;
    use http::HeaderMap;

    fn request(method: Method, path: &str, headers: &[(&str, &str)]) -> Request {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(
                http::header::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        Request::new(method, path, map, Bytes::new())
    }

    fn eval(pred: &Predicate, req: &Request) -> (bool, HashMap<String, String>) {
        let mut params = HashMap::new();
        let matched = pred.matches(req, &mut params);
        (matched, params)
    }

    #[test]
    fn path_template_captures_variables() {
        let pred = get("/person/{id}");
        let req = request(Method::GET, "/person/42", &[]);

        let (matched, params) = eval(&pred, &req);
        assert!(matched);
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn method_mismatch_fails() {
        let pred = get("/person/{id}");
        let req = request(Method::POST, "/person/42", &[]);
        assert!(!eval(&pred, &req).0);
    }

    #[test]
    fn missing_accept_header_accepts_everything() {
        let pred = accept("application/json");
        let req = request(Method::GET, "/person", &[]);
        assert!(eval(&pred, &req).0);
    }

    #[test]
    fn accept_wildcards() {
        let req_any = request(Method::GET, "/person", &[("accept", "*/*")]);
        let req_family =
            request(Method::GET, "/person", &[("accept", "text/html, application/*")]);
        let req_other = request(Method::GET, "/person", &[("accept", "text/html")]);

        let pred = accept("application/json");
        assert!(eval(&pred, &req_any).0);
        assert!(eval(&pred, &req_family).0);
        assert!(!eval(&pred, &req_other).0);
    }

    #[test]
    fn content_type_ignores_parameters_but_requires_header() {
        let pred = content_type("application/json");

        let with = request(
            Method::POST,
            "/person",
            &[("content-type", "application/json; charset=utf-8")],
        );
        let without = request(Method::POST, "/person", &[]);

        assert!(eval(&pred, &with).0);
        assert!(!eval(&pred, &without).0);
    }

    #[test]
    fn or_does_not_leak_captures_from_failed_arm() {
        // Left arm captures {x} on its path but fails on the method test,
        // so /b/7 must come back with only {y}.
        let pred = path("/b/{x}").and(method(Method::POST)).or(get("/b/{y}"));
        let req = request(Method::GET, "/b/7", &[]);

        let (matched, params) = eval(&pred, &req);
        assert!(matched);
        assert_eq!(params.get("y").map(String::as_str), Some("7"));
        assert!(!params.contains_key("x"));
    }

    #[test]
    #[should_panic(expected = "invalid path template")]
    fn invalid_template_panics_at_registration() {
        path("/person/{unclosed");
    }
}
