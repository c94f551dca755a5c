//! Ordered, first-match-wins request router.
//!
//! The router is a plain list of (predicate, handler) pairs. Dispatch is a
//! linear scan in registration order; the first predicate that matches wins.
//! There is no specificity or priority resolution — if two routes overlap,
//! the one registered earlier takes the request. No match yields a bodyless
//! `404`, so routing never surfaces an error to the server loop.
//!
//! ```rust
//! use tern::{get, post, Request, Response, Router};
//!
//! # async fn fetch(_: Request) -> Response { Response::text("") }
//! # async fn create(_: Request) -> Response { Response::text("") }
//! let app = Router::new()
//!     .route(get("/person/{id}"), fetch)
//!     .route(post("/person"), create);
//! ```

use std::collections::HashMap;

use http::StatusCode;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::predicate::Predicate;
use crate::request::Request;
use crate::response::Response;

/// One registered route: a predicate paired with a type-erased handler.
/// Immutable once registered; lives for the process lifetime.
struct Route {
    predicate: Predicate,
    handler: BoxedHandler,
}

/// The application router. Build it once at startup; pass it to
/// [`Server::serve`](crate::Server::serve).
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route. Returns `self` so registrations chain; the chain
    /// order is the match order.
    pub fn route(mut self, predicate: Predicate, handler: impl Handler) -> Self {
        self.routes.push(Route { predicate, handler: handler.into_boxed_handler() });
        self
    }

    /// Routes one request to completion.
    ///
    /// Path variables captured by the winning predicate are attached to the
    /// request before its handler runs. A request no predicate matches gets
    /// `404 Not Found` — distinct from a matched route whose handler chooses
    /// to answer with an error status.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        for route in &self.routes {
            let mut params = HashMap::new();
            if route.predicate.matches(&req, &mut params) {
                req.params = params;
                return (route.handler)(req).await;
            }
        }

        debug!(method = %req.method(), path = req.path(), "no route matched");
        Response::status(StatusCode::NOT_FOUND)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{get, path};
    use bytes::Bytes;
    use http::{HeaderMap, Method};

    fn req(method: Method, path: &str) -> Request {
        Request::new(method, path, HeaderMap::new(), Bytes::new())
    }

    async fn first(_req: Request) -> &'static str {
        "first"
    }

    async fn second(_req: Request) -> &'static str {
        "second"
    }

    async fn echo_word(req: Request) -> String {
        req.param("word").unwrap_or("missing").to_owned()
    }

    #[tokio::test]
    async fn first_matching_route_wins() {
        // Both predicates match GET /same; registration order decides.
        let app = Router::new()
            .route(path("/same"), first)
            .route(get("/same"), second);

        let res = app.dispatch(req(Method::GET, "/same")).await;
        assert_eq!(res.body(), b"first");
    }

    #[tokio::test]
    async fn unmatched_request_is_not_found() {
        let app = Router::new().route(get("/known"), first);

        let res = app.dispatch(req(Method::GET, "/unknown")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn empty_router_is_not_found() {
        let app = Router::new();
        let res = app.dispatch(req(Method::GET, "/")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn winning_route_attaches_its_params() {
        let app = Router::new().route(get("/echo/{word}"), echo_word);

        let res = app.dispatch(req(Method::GET, "/echo/abc")).await;
        assert_eq!(res.body(), b"abc");
    }
}
