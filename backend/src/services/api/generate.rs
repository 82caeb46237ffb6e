use crate::config::AppConfig;
use crate::error::QrGenError;
use crate::generator::encode::encode_png;
use crate::query::query_pairs;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::ApiGenerateQuery;
use log::{info, warn};

/// Actix web handler for `GET /api/generate`.
///
/// # Returns
/// - `200 OK` with an inline `image/png` body.
/// - `403 Forbidden` with an empty body when `token` is missing or wrong,
///   whether or not `data` is present.
/// - `400 Bad Request` with `{"error": "Missing 'data' parameter"}` when the
///   token is right but `data` is missing or empty.
/// - `500 Internal Server Error` with `{"error": ...}` when encoding fails.
///
/// Repeated parameters keep their first value.
pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, QrGenError> {
    let ApiGenerateQuery { token, data } = ApiGenerateQuery::from_pairs(&query_pairs(&req));

    if token.as_deref() != Some(config.api_token.as_str()) {
        warn!("Rejected API call with invalid or missing token");
        return Err(QrGenError::Unauthorized);
    }

    let data = data.filter(|d| !d.is_empty()).ok_or(QrGenError::MissingData)?;
    let png = web::block(move || encode_png(&data)).await??;
    info!("API generated QR code ({} bytes)", png.len());

    Ok(HttpResponse::Ok().content_type(ContentType::png()).body(png))
}
