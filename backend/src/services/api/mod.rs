//! Machine-facing endpoints under `/api`.
//!
//! The provided routes are:
//! - `GET /api/generate?token=<secret>&data=<payload>`: returns the QR code of
//!   `data` as an inline PNG. The token is compared for exact equality with
//!   `AppConfig::api_token` before anything else is looked at.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod generate;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the API routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/generate", get().to(generate::process))
}
