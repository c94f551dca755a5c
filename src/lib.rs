//! # tern
//!
//! A predicate-routed HTTP demo service, plus the micro framework it rides
//! on.
//!
//! ## The contract
//!
//! Routing here is deliberately boring: a [`Router`] is an ordered list of
//! (predicate, handler) pairs. Dispatch scans the list in registration
//! order and the first predicate that matches wins — no specificity rules,
//! no priority scores, no surprises. Predicates test method, path template
//! (`{name}` variables), and header / content-type / accept conditions,
//! composed with short-circuit `and` / `or`.
//!
//! Everything below the router — connection handling, HTTP/1.1 vs HTTP/2,
//! graceful shutdown — is hyper and tokio doing what they do; tern adds no
//! transport behaviour of its own.
//!
//! ## The demo
//!
//! [`app::router`] wires the sample endpoints: an in-memory person
//! repository (`GET /person/{id}`, `GET /person`, `POST /person`), a canned
//! blog-post listing (`GET /user/{id}`), `GET /hello-world`, and health
//! probes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tern::person::PersonRepository;
//! use tern::{app, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let repo = Arc::new(PersonRepository::seeded());
//!     let routes = app::router(repo);
//!
//!     Server::bind("127.0.0.1:8080").serve(routes).await.unwrap();
//! }
//! ```
//!
//! Or register your own routes:
//!
//! ```rust,no_run
//! use tern::{accept, get, post, Request, Response, Router};
//!
//! # async fn fetch(_: Request) -> Response { Response::text("") }
//! # async fn create(_: Request) -> Response { Response::text("") }
//! let routes = Router::new()
//!     .route(get("/thing/{id}"), fetch)
//!     .route(post("/thing").and(accept("application/json")), create);
//! ```

mod error;
mod handler;
mod predicate;
mod request;
mod response;
mod router;
mod server;

pub mod app;
pub mod blog;
pub mod health;
pub mod person;

pub use error::Error;
pub use handler::Handler;
pub use predicate::{accept, content_type, get, header, method, path, post, PathTemplate, Predicate};
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
