//! # Locale Selection
//!
//! The UI ships in exactly two languages. French is the primary locale and is
//! chosen whenever the browser mentions it; English is the fallback.
//!
//! Selection order, applied by [`resolve_locale`]:
//! 1. A `lang` query parameter that is exactly `fr` or `en`.
//! 2. A case-insensitive substring match for `fr` in `Accept-Language`.
//! 3. English.
//!
//! This is a heuristic, not RFC 4647 negotiation: `q` weights are ignored and a
//! header such as `en-US,fr;q=0.1` still selects French.

mod tables;

pub use tables::{StringTable, EN, FR};

/// Display language of the generated page and of user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Primary locale, picked up from `Accept-Language`.
    Fr,
    /// Secondary locale, used when nothing points at French.
    #[default]
    En,
}

impl Locale {
    const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Two-letter code used in `?lang=` and in `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Exact code lookup. `"FR"` or `"fr-FR"` are not codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// The locale offered by the language-switch link.
    pub fn other(self) -> Self {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }

    pub fn strings(self) -> &'static StringTable {
        match self {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }
}

/// Picks the locale for a request from the raw `lang` query value and the raw
/// `Accept-Language` header value.
pub fn resolve_locale(lang_param: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = lang_param.and_then(Locale::from_code) {
        return locale;
    }

    let header = accept_language.unwrap_or_default().to_lowercase();
    if header.contains(Locale::Fr.code()) {
        Locale::Fr
    } else {
        Locale::En
    }
}
