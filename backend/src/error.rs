//! Request-level failures and how they surface over HTTP.
//!
//! The JSON API answers with [`ResponseError`]: a status code plus an
//! [`ApiError`] body, except 403 which carries no body at all. The HTML page
//! instead turns the same variants into a localized plain-text message through
//! [`QrGenError::page_message`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::i18n::StringTable;
use common::model::api_error::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum QrGenError {
    /// The payload does not fit in a QR symbol, or the PNG could not be written.
    #[error("QR encoding failed: {0}")]
    Encode(String),

    #[error("uploaded file is not valid UTF-8")]
    InvalidUtf8,

    #[error("batch contains no non-blank lines")]
    EmptyBatch,

    #[error("batch has {lines} lines, limit is {limit}")]
    TooManyLines { lines: usize, limit: usize },

    #[error("upload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("invalid API token")]
    Unauthorized,

    #[error("Missing 'data' parameter")]
    MissingData,

    #[error("archive write failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Stored as text: `MultipartError` wraps a non-`Send` actix error and this
    /// type crosses `web::block`.
    #[error("malformed upload: {0}")]
    Upload(String),

    #[error("worker pool unavailable: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl From<actix_multipart::MultipartError> for QrGenError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        QrGenError::Upload(e.to_string())
    }
}

impl QrGenError {
    /// User-facing message for the HTML page, in the request's locale.
    pub fn page_message(&self, t: &StringTable) -> String {
        match self {
            QrGenError::InvalidUtf8 => t.err_encoding.to_string(),
            QrGenError::EmptyBatch => t.err_empty.to_string(),
            QrGenError::TooManyLines { limit, .. } => format!("{} (max {limit})", t.err_too_many_lines),
            QrGenError::PayloadTooLarge { .. } => t.err_too_large.to_string(),
            QrGenError::Upload(_) => t.err_upload.to_string(),
            QrGenError::Encode(_)
            | QrGenError::Archive(_)
            | QrGenError::Blocking(_)
            | QrGenError::Unauthorized
            | QrGenError::MissingData => t.err_generation.to_string(),
        }
    }
}

impl ResponseError for QrGenError {
    fn status_code(&self) -> StatusCode {
        match self {
            QrGenError::Unauthorized => StatusCode::FORBIDDEN,
            QrGenError::InvalidUtf8
            | QrGenError::EmptyBatch
            | QrGenError::TooManyLines { .. }
            | QrGenError::MissingData
            | QrGenError::Upload(_) => StatusCode::BAD_REQUEST,
            QrGenError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            QrGenError::Encode(_) | QrGenError::Archive(_) | QrGenError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            QrGenError::Unauthorized => response.finish(),
            _ => response.json(ApiError::new(self.to_string())),
        }
    }
}
