//! Built-in health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |
//!
//! Both ship as ordinary handlers — register them like any other route and
//! replace `readiness` with your own handler if traffic should be gated on
//! dependency health.

use crate::request::Request;
use crate::response::Response;

/// Liveness probe handler.
///
/// Always `200 OK` with body `"ok"` — if the process answers HTTP at all it
/// is alive, so this handler intentionally has no dependencies.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// Readiness probe handler (default implementation).
///
/// Always `200 OK` with body `"ready"`.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
