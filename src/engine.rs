//! Sniffing fallback engine: offset-shifted re-detection and PDF trailer
//! recovery layered on top of a base signature detector.
//!
//! The engine only ever improves on what the base detector says. A confident
//! signature match passes through untouched; the extra work happens when the
//! base detector returns one of its two generic fallback types.

use memchr::memmem;

use crate::base::is_fallback_content_type;
use crate::result::{Detection, Origin};

/// MIME type returned by the trailer and hint overrides.
pub const PDF_MIME: &str = "application/pdf";

/// Content types treated as "plausibly PDF" by the hint pre-check.
pub const PDF_CONTENT_TYPES: [&str; 3] =
    ["application/x-pdf", "application/pdf", "x-application/apple-pdf"];

/// PDF trailer token searched for in tail fragments.
pub const PDF_EOF_MARKER: &[u8] = b"%%EOF";

/// UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Extra offsets tried past the first non-whitespace byte. Some PDF
/// generators prepend up to this many of their own bytes before the
/// signature.
const MAX_JUNK_BYTES: usize = 10;

/// True when `content_type` is one of the recognized PDF content types.
#[inline]
pub fn is_pdf_content_type(content_type: &str) -> bool {
    PDF_CONTENT_TYPES.contains(&content_type)
}

#[inline]
fn is_ws(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

#[inline]
fn has_eof_marker(end: Option<&[u8]>) -> bool {
    end.is_some_and(|data| memmem::find(data, PDF_EOF_MARKER).is_some())
}

/// Run the fallback engine with a caller-supplied base detector.
///
/// `base` must be a pure function from a byte prefix to a MIME type string,
/// returning [`crate::FALLBACK_BINARY`] or [`crate::FALLBACK_TEXT`] when no
/// signature rule matches. `hint` is an optional caller-asserted content type
/// (e.g. a declared upload MIME type); `end` is an optional tail fragment of
/// the same file.
///
/// Total over all inputs, including empty fragments: never panics, always
/// returns a non-empty type.
pub fn detect_detailed_with<F>(
    base: F,
    hint: Option<&str>,
    start: &[u8],
    end: Option<&[u8]>,
) -> Detection
where
    F: Fn(&[u8]) -> String,
{
    // A caller-asserted PDF-ish or generic type combined with a PDF trailer
    // decides the outcome before any signature detection runs. This takes
    // priority even when the start fragment would match a signature.
    if let Some(hint) = hint {
        if (is_pdf_content_type(hint) || is_fallback_content_type(hint)) && has_eof_marker(end) {
            return Detection {
                content_type: PDF_MIME.to_string(),
                origin: Origin::Hint,
            };
        }
    }

    // A UTF-8 BOM would defeat signature rules that expect content at byte 0.
    let mut data = start;
    if data.len() > 3 && data[..3] == UTF8_BOM {
        data = &data[3..];
    }

    let content_type = base(data);
    if !is_fallback_content_type(&content_type) {
        return Detection {
            content_type,
            origin: Origin::Signature,
        };
    }

    // Re-sniff at increasing offsets past any leading whitespace, to tolerate
    // junk bytes prepended before the real signature.
    let first_non_ws = data.iter().take_while(|&&b| is_ws(b)).count();
    let max_offset = first_non_ws + MAX_JUNK_BYTES;

    // Too little data left to usefully retry: skip straight to the trailer
    // check.
    if max_offset < data.len() {
        for offset in first_non_ws..=max_offset {
            let retried = base(&data[offset..]);
            if !is_fallback_content_type(&retried) {
                return Detection {
                    content_type: retried,
                    origin: Origin::OffsetRetry { offset },
                };
            }
        }
    }

    // A PDF's structural trailer is a strong positive signal even when the
    // header signature was obscured or absent.
    if has_eof_marker(end) {
        return Detection {
            content_type: PDF_MIME.to_string(),
            origin: Origin::Trailer,
        };
    }

    Detection {
        content_type,
        origin: Origin::Fallback,
    }
}

/// Like [`detect_detailed_with`], returning only the MIME type.
pub fn detect_content_type_with<F>(
    base: F,
    hint: Option<&str>,
    start: &[u8],
    end: Option<&[u8]>,
) -> String
where
    F: Fn(&[u8]) -> String,
{
    detect_detailed_with(base, hint, start, end).content_type
}
