use super::view;
use crate::locale::request_locale;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};
use common::i18n::Locale;

/// Actix web handler for `GET /`.
pub async fn process(req: HttpRequest) -> impl Responder {
    form_page(request_locale(&req))
}

/// `200 OK` with the form rendered in `locale`.
pub(super) fn form_page(locale: Locale) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(view::render_form(locale).into_string())
}
