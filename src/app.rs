//! Application wiring: the demo route table.
//!
//! Registration order is load-bearing — the router matches in this order and
//! the first hit wins:
//!
//! 1. `GET  /person/{id}`
//! 2. `GET  /person` (accept: application/json)
//! 3. `POST /person` (content-type: application/json)
//! 4. `GET  /user/{id}`
//! 5. `GET  /hello-world`
//! 6. `GET  /healthz`, `GET /readyz`

use std::sync::Arc;

use crate::blog;
use crate::health;
use crate::person::{PersonHandler, PersonRepository};
use crate::predicate::{accept, content_type, get, post};
use crate::request::Request;
use crate::router::Router;

async fn hello_world(_req: Request) -> &'static str {
    "Hello World"
}

/// Builds the route table over `repo`.
///
/// The person handler is shared by its three routes through an `Arc`; each
/// route closure clones it per call, which keeps the handler futures
/// `'static`.
pub fn router(repo: Arc<PersonRepository>) -> Router {
    let people = Arc::new(PersonHandler::new(repo));

    let get_person = {
        let h = Arc::clone(&people);
        move |req: Request| {
            let h = Arc::clone(&h);
            async move { h.get_person(req).await }
        }
    };
    let list_people = {
        let h = Arc::clone(&people);
        move |req: Request| {
            let h = Arc::clone(&h);
            async move { h.list_people(req).await }
        }
    };
    let create_person = {
        let h = Arc::clone(&people);
        move |req: Request| {
            let h = Arc::clone(&h);
            async move { h.create_person(req).await }
        }
    };

    Router::new()
        .route(get("/person/{id}"), get_person)
        .route(get("/person").and(accept("application/json")), list_people)
        .route(post("/person").and(content_type("application/json")), create_person)
        .route(get("/user/{id}"), blog::posts_for_user)
        .route(get("/hello-world"), hello_world)
        .route(get("/healthz"), health::liveness)
        .route(get("/readyz"), health::readiness)
}
