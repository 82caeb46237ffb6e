//! # Form Submission Service
//!
//! Backend logic for `POST /`.
//!
//! ## Workflow
//!
//! 1.  **Field collection**: `form` reads the urlencoded single form; `upload`
//!     walks the multipart stream and keeps `text_data` and `file_data`
//!     (the latter only when the browser sent a non-empty filename). File
//!     content is capped at `AppConfig::max_upload_bytes`.
//!
//! 2.  **Single mode**: a non-empty `text_data` wins. The text is encoded once
//!     and returned as the attachment `qrcode.png`.
//!
//! 3.  **Batch mode**: the file must be UTF-8. It is split into lines and
//!     handed to `generator::archive::build` on the blocking pool. The ZIP is
//!     returned as the attachment `qrcodes_batch.zip`.
//!
//! 4.  **Fallback**: neither field populated renders the form again with
//!     `200 OK`, no error shown.
//!
//! Failures answer with the localized message from
//! `QrGenError::page_message`, using the error's HTTP status.

use super::index::form_page;
use crate::config::AppConfig;
use crate::error::QrGenError;
use crate::generator::archive::{self, split_lines};
use crate::generator::encode::encode_png;
use crate::locale::request_locale;
use actix_multipart::{Field, Multipart};
use actix_web::error::UrlencodedError;
use actix_web::http::header::{ContentDisposition, ContentType};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use common::i18n::StringTable;
use common::requests::SingleForm;
use futures_util::StreamExt;
use log::{info, warn};

const SINGLE_FILENAME: &str = "qrcode.png";
const BATCH_FILENAME: &str = "qrcodes_batch.zip";

/// Form fields relevant to generation, whatever the encoding of the body.
#[derive(Debug, Default)]
struct Submission {
    text_data: Option<String>,
    file_data: Option<Vec<u8>>,
}

/// Actix web handler for an urlencoded (or empty) `POST /`.
///
/// A body over the `FormConfig` limit is a 413; any other body that is not a
/// readable form counts as an empty submission.
pub async fn form(
    req: HttpRequest,
    payload: Result<web::Form<SingleForm>, actix_web::Error>,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    let text_data = match payload {
        Ok(form) => form.into_inner().text_data,
        Err(e) => match e.as_error::<UrlencodedError>() {
            Some(UrlencodedError::Overflow { limit, .. }) => {
                return page_error(&req, QrGenError::PayloadTooLarge { limit: *limit });
            }
            _ => None,
        },
    };

    let submission = Submission {
        text_data,
        file_data: None,
    };
    respond(&req, submission, &config).await
}

/// Actix web handler for a `multipart/form-data` `POST /`.
pub async fn upload(
    req: HttpRequest,
    payload: Multipart,
    config: web::Data<AppConfig>,
) -> HttpResponse {
    match read_submission(payload, config.max_upload_bytes).await {
        Ok(submission) => respond(&req, submission, &config).await,
        Err(e) => page_error(&req, e),
    }
}

async fn respond(req: &HttpRequest, submission: Submission, config: &AppConfig) -> HttpResponse {
    let locale = request_locale(req);

    let result = if let Some(text) = submission.text_data.filter(|t| !t.is_empty()) {
        generate_single(text).await
    } else if let Some(bytes) = submission.file_data {
        generate_batch(bytes, config.max_batch_lines).await
    } else {
        return form_page(locale);
    };

    result.unwrap_or_else(|e| page_error(req, e))
}

async fn generate_single(text: String) -> Result<HttpResponse, QrGenError> {
    let png = web::block(move || encode_png(&text)).await??;
    info!("Generated single QR code ({} bytes)", png.len());

    Ok(HttpResponse::Ok()
        .content_type(ContentType::png())
        .insert_header(ContentDisposition::attachment(SINGLE_FILENAME))
        .body(png))
}

async fn generate_batch(
    bytes: Vec<u8>,
    max_lines: Option<usize>,
) -> Result<HttpResponse, QrGenError> {
    let text = String::from_utf8(bytes).map_err(|_| QrGenError::InvalidUtf8)?;
    let archive = web::block(move || archive::build(&split_lines(&text), max_lines)).await??;
    info!(
        "Generated batch archive with {} QR codes ({} bytes)",
        archive.count(),
        archive.bytes.len()
    );

    Ok(HttpResponse::Ok()
        .content_type("application/zip")
        .insert_header(ContentDisposition::attachment(BATCH_FILENAME))
        .body(archive.bytes))
}

fn page_error(req: &HttpRequest, e: QrGenError) -> HttpResponse {
    let status = e.status_code();
    if status.is_server_error() {
        warn!("Form generation failed: {}", e);
    } else {
        info!("Rejected form submission: {}", e);
    }

    let strings: &StringTable = request_locale(req).strings();
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(e.page_message(strings))
}

async fn read_submission(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Submission, QrGenError> {
    let mut submission = Submission::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some("text_data") => {
                let bytes = read_field(&mut field, max_bytes).await?;
                submission.text_data = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            Some("file_data") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                let bytes = read_field(&mut field, max_bytes).await?;
                if !filename.is_empty() {
                    submission.file_data = Some(bytes);
                }
            }
            _ => {
                // Drain unknown parts so the stream can advance.
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    Ok(submission)
}

async fn read_field(field: &mut Field, max_bytes: usize) -> Result<Vec<u8>, QrGenError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > max_bytes {
            return Err(QrGenError::PayloadTooLarge { limit: max_bytes });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::services;
    use actix_web::http::header::{self, HeaderValue};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    const BOUNDARY: &str = "----qrgen-test-boundary";

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, filename, content) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: text/plain\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(content);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, parts: &[Part<'_>]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(parts))
    }

    fn test_config() -> AppConfig {
        AppConfig {
            api_token: "test-token".to_string(),
            port: 0,
            max_upload_bytes: 64 * 1024,
            max_batch_lines: Some(50),
        }
    }

    macro_rules! page_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .service(services::page::configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn get_renders_form_in_browser_language() {
        let app = page_app!(test_config());
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains(r#"<html lang="fr">"#));
    }

    #[actix_web::test]
    async fn single_text_downloads_png_attachment() {
        let app = page_app!(test_config());
        let req = test::TestRequest::post()
            .uri("/?lang=en")
            .insert_header(header::ContentType::form_url_encoded())
            .set_payload("text_data=https%3A%2F%2Fexample.com")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("image/png"))
        );
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        let disposition = disposition.to_str().unwrap();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("qrcode.png"));

        let body = test::read_body(resp).await;
        assert!(image::load_from_memory(&body).is_ok());
    }

    #[actix_web::test]
    async fn empty_post_falls_through_to_form() {
        let app = page_app!(test_config());
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(header::ContentType::form_url_encoded())
            .set_payload("text_data=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<form"));

        let req = test::TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn oversized_form_body_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::FormConfig::default().limit(16))
                .app_data(web::Data::new(test_config()))
                .service(services::page::configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/?lang=en")
            .insert_header(header::ContentType::form_url_encoded())
            .set_payload(format!("text_data={}", "a".repeat(100)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), "File is too large.");
    }

    #[actix_web::test]
    async fn batch_upload_returns_zip_named_by_line() {
        let app = page_app!(test_config());
        let req = multipart_request(
            "/?lang=en",
            &[Part::File("file_data", "codes.txt", b"first\n\n  third  \r\n")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/zip"))
        );
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().contains("qrcodes_batch.zip"));

        let body = test::read_body(resp).await;
        let mut archive = ZipArchive::new(Cursor::new(body.to_vec())).unwrap();
        assert_eq!(archive.len(), 2);
        let mut png = Vec::new();
        archive.by_name("qr_3.png").unwrap().read_to_end(&mut png).unwrap();
        assert!(image::load_from_memory(&png).is_ok());
        assert!(archive.by_name("qr_1.png").is_ok());
    }

    #[actix_web::test]
    async fn invalid_utf8_upload_is_a_localized_400() {
        let app = page_app!(test_config());
        let req = multipart_request(
            "/?lang=fr",
            &[Part::File("file_data", "codes.txt", b"ok\n\xc3\x28\n")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "Erreur d'encodage : le fichier doit être en UTF-8"
        );
    }

    #[actix_web::test]
    async fn blank_upload_is_an_empty_file_400() {
        let app = page_app!(test_config());
        let req = multipart_request(
            "/?lang=en",
            &[Part::File("file_data", "codes.txt", b"\n   \n\t\n")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), "File is empty.");
    }

    #[actix_web::test]
    async fn text_field_wins_over_file_in_multipart() {
        let app = page_app!(test_config());
        let req = multipart_request(
            "/",
            &[
                Part::Text("text_data", "hello"),
                Part::File("file_data", "codes.txt", b"a\nb\n"),
            ],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("image/png"))
        );
    }

    #[actix_web::test]
    async fn file_without_filename_falls_through_to_form() {
        let app = page_app!(test_config());
        let req = multipart_request("/", &[Part::File("file_data", "", b"a\n")]).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("<form"));
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected() {
        let config = AppConfig {
            max_upload_bytes: 8,
            ..test_config()
        };
        let app = page_app!(config);
        let req = multipart_request(
            "/?lang=en",
            &[Part::File("file_data", "codes.txt", b"0123456789abcdef")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), "File is too large.");
    }

    #[actix_web::test]
    async fn too_many_lines_is_rejected() {
        let config = AppConfig {
            max_batch_lines: Some(2),
            ..test_config()
        };
        let app = page_app!(config);
        let req = multipart_request(
            "/?lang=en",
            &[Part::File("file_data", "codes.txt", b"a\nb\nc\n")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
