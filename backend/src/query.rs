use actix_web::{web, HttpRequest};

/// Query string of `req` as ordered `(key, value)` pairs.
///
/// A query that cannot be decoded yields no pairs, so it reads as if every
/// parameter were missing.
pub fn query_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|query| query.into_inner())
        .unwrap_or_default()
}
