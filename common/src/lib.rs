//! Framework-free types shared by the QR generator server: the two UI string
//! tables, locale negotiation and the request/response payloads.

pub mod i18n;
pub mod model;
pub mod requests;
