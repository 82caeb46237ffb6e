//! HTTP surface.
//!
//! - `page`: `GET /` and `POST /`, the HTML form and its single/batch downloads.
//! - `api`: `GET /api/generate`, the token-gated image endpoint.

pub mod api;
pub mod page;
