//! # Batch Archive Builder
//!
//! Turns the lines of an uploaded text file into a ZIP of QR images, entirely
//! in memory.
//!
//! ## Naming
//!
//! Entries are named `qr_<n>.png` where `n` is the 1-based position of the
//! line in the *original* file. Blank lines are skipped but still consume
//! their number, so `["a", "", "b"]` yields `qr_1.png` and `qr_3.png`. Names
//! are unique by construction.
//!
//! ## Failure modes
//!
//! - More lines than the configured cap: [`QrGenError::TooManyLines`], checked
//!   before anything is encoded.
//! - No non-blank line at all: [`QrGenError::EmptyBatch`]; no archive is
//!   returned.
//! - A line the encoder rejects aborts the whole batch with
//!   [`QrGenError::Encode`].

use crate::error::QrGenError;
use crate::generator::encode::encode_png;
use log::debug;
use std::io::{Cursor, Write};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A finished archive.
#[derive(Debug)]
pub struct ArchiveResult {
    /// The complete ZIP file.
    pub bytes: Vec<u8>,
    /// Entry names in write order.
    pub entries: Vec<String>,
}

impl ArchiveResult {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

pub fn entry_name(line_number: usize) -> String {
    format!("qr_{line_number}.png")
}

/// Characters that end a line, besides the `\r\n` pair.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into lines on `\r\n` and on every char of [`LINE_BREAKS`]:
/// the usual newlines, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators.
///
/// A trailing line terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((pos, c)) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Encodes every non-blank line and packs the PNGs into one ZIP.
///
/// `max_lines` caps the number of input lines, blank ones included.
pub fn build<S: AsRef<str>>(
    lines: &[S],
    max_lines: Option<usize>,
) -> Result<ArchiveResult, QrGenError> {
    if let Some(limit) = max_lines {
        if lines.len() > limit {
            return Err(QrGenError::TooManyLines {
                lines: lines.len(),
                limit,
            });
        }
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // PNG is already deflated.
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let mut entries = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let content = line.as_ref().trim();
        if content.is_empty() {
            continue;
        }

        let png = encode_png(content)?;
        let name = entry_name(index + 1);
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&png).map_err(ZipError::from)?;
        debug!("Added {} ({} bytes) to batch archive", name, png.len());
        entries.push(name);
    }

    if entries.is_empty() {
        return Err(QrGenError::EmptyBatch);
    }

    let bytes = zip.finish()?.into_inner();
    Ok(ArchiveResult { bytes, entries })
}
