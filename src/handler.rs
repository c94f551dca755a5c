//! Handler trait and type erasure.
//!
//! The route table holds handlers of *different* concrete types in one
//! `Vec`, so registration erases each handler down to a shared closure:
//!
//! ```text
//! async fn hello(req: Request) -> Response { … }      ← user writes this
//!        ↓ router.route(pred, hello)
//! hello.into_boxed_handler()                          ← Handler blanket impl
//!        ↓
//! Arc<dyn Fn(Request) -> BoxFuture>                   ← BoxedHandler
//!        ↓
//! (handler)(req).await  at request time
//! ```
//!
//! There is no dispatch trait behind this — a boxed `Fn` returning a boxed
//! future is the whole mechanism. Per-request cost is one indirect call plus
//! the future allocation, noise next to the network I/O. Closures capturing
//! `Arc<State>` satisfy the bound, which is how handlers receive injected
//! dependencies (see `app::router`).

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future resolving to a [`Response`].
///
/// `Pin<Box<…>>` because the runtime polls the future in place; `Send +
/// 'static` so tokio may move it across worker threads.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A type-erased handler shared across concurrent requests. The router calls
/// it directly: `(handler)(req).await`.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// You never implement this yourself; it is automatically satisfied for any
/// `async fn name(req: Request) -> impl IntoResponse` and for closures with
/// the same shape. The trait is sealed so only the blanket impl below can
/// satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        // The IntoResponse conversion happens here, once, so the router only
        // ever sees futures that resolve to a concrete Response.
        Arc::new(move |req| {
            let fut = self(req);
            Box::pin(async move { fut.await.into_response() })
        })
    }
}
