//! Binary entrypoint for the demo service.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:8080/hello-world
//!   curl http://localhost:8080/person/1
//!   curl http://localhost:8080/person
//!   curl -X POST http://localhost:8080/person \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"Ada Lovelace"}'
//!   curl http://localhost:8080/user/42

use std::sync::Arc;

use tern::person::PersonRepository;
use tern::{app, Server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let repo = Arc::new(PersonRepository::seeded());
    let routes = app::router(repo);

    let addr = std::env::var("TERN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    Server::bind(&addr).serve(routes).await.expect("server error");
}
