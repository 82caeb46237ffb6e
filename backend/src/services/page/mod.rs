//! # Page Service Module
//!
//! Everything a browser user touches lives under `/`.
//!
//! ## Sub-modules:
//! - `index`: renders the form.
//! - `generate`: handles both form submissions.
//! - `view`: the HTML markup.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`** renders the two forms in the request's locale.
//!
//! *   **`POST /`** with a `multipart/form-data` body is the batch form (it may
//!     also carry `text_data`); any other `POST /` is treated as the urlencoded
//!     single form. Both share the same decision order: `text_data`, then
//!     `file_data`, then fall back to rendering the form.

mod generate;
mod index;
mod view;

use actix_web::guard::{self, GuardContext};
use actix_web::http::header;
use actix_web::web::{get, post, resource};
use actix_web::Resource;

const PAGE_PATH: &str = "/";

/// Configures and returns the Actix resource for the page routes.
pub fn configure_routes() -> Resource {
    resource(PAGE_PATH)
        .route(get().to(index::process))
        .route(post().guard(guard::fn_guard(is_multipart)).to(generate::upload))
        .route(post().to(generate::form))
}

fn is_multipart(ctx: &GuardContext) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}
