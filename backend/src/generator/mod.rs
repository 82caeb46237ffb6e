//! QR image generation, independent of HTTP.
//!
//! - `encode`: one payload in, one PNG out.
//! - `archive`: many lines in, one ZIP of PNGs out.
//!
//! Both are synchronous and CPU-bound; handlers call them through
//! `web::block` so the async workers are not stalled by large batches.

pub mod archive;
pub mod encode;
