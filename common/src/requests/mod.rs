use serde::Deserialize;

/// Decoded query parameters in request order. Repeated keys keep their first
/// value, so `?token=a&token=b` reads as `token=a`.
pub type QueryPairs = [(String, String)];

fn first_value(pairs: &QueryPairs, key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Query string accepted by every page route. Only an exact `fr`/`en` value
/// has an effect; anything else is ignored by locale resolution.
#[derive(Debug, Default)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            lang: first_value(pairs, "lang"),
        }
    }
}

/// Query string of `GET /api/generate`.
/// Both fields are optional at the parsing level so that a missing token can be
/// answered with 403 before a missing `data` is reported.
#[derive(Debug, Default)]
pub struct ApiGenerateQuery {
    pub token: Option<String>,
    pub data: Option<String>,
}

impl ApiGenerateQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            token: first_value(pairs, "token"),
            data: first_value(pairs, "data"),
        }
    }
}

/// Urlencoded body of the single-generation form.
#[derive(Debug, Default, Deserialize)]
pub struct SingleForm {
    pub text_data: Option<String>,
}
