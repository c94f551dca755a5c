//! Canned blog-post listing.

use serde::Serialize;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

#[derive(Serialize)]
struct BlogPosts {
    user: &'static str,
    posts: [&'static str; 2],
}

/// `GET /user/{id}` — the demonstration payload.
///
/// The `{id}` variable is deliberately never read: the sample this service
/// reproduces returns the same canned listing for every user, and that
/// behaviour is kept as-is.
pub async fn posts_for_user(_req: Request) -> Response {
    Json(BlogPosts { user: "Stephan", posts: ["Post1", "Post2"] }).into_response()
}
