use crate::query::query_pairs;
use actix_web::http::header;
use actix_web::HttpRequest;
use common::i18n::{resolve_locale, Locale};
use common::requests::LangQuery;

/// Locale of an incoming request: `?lang=` first, then `Accept-Language`.
pub fn request_locale(req: &HttpRequest) -> Locale {
    let lang = LangQuery::from_pairs(&query_pairs(req)).lang;
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    resolve_locale(lang.as_deref(), accept_language)
}
