//! Default base signature detector.
//!
//! The fallback engine treats the base detector as a black box with the
//! contract `detect(bytes) -> MIME string`: a specific type when a signature
//! matches, one of two generic fallback strings otherwise. This module
//! provides that detector backed by the `infer` signature table, plus the
//! predicates and literals describing the fallback contract. Callers with
//! their own sniffer can bypass it entirely via
//! [`crate::detect_content_type_with`].

/// Fallback returned for unrecognized binary data.
pub const FALLBACK_BINARY: &str = "application/octet-stream";

/// Fallback returned for unrecognized text data.
pub const FALLBACK_TEXT: &str = "text/plain; charset=utf-8";

/// Max leading bytes the default detector inspects.
const SNIFF_LEN: usize = 512;

/// True when `content_type` is one of the two generic fallback strings,
/// i.e. the base detector found no signature match.
#[inline]
pub fn is_fallback_content_type(content_type: &str) -> bool {
    content_type == FALLBACK_BINARY || content_type == FALLBACK_TEXT
}

/// Detect a MIME type from the leading bytes of `data`.
///
/// Signature matches come from the `infer` table. Unmatched input classifies
/// as [`FALLBACK_TEXT`] when the inspected prefix scans as plain text and
/// [`FALLBACK_BINARY`] otherwise. At most the first 512 bytes are examined.
pub fn sniff(data: &[u8]) -> String {
    let head = &data[..data.len().min(SNIFF_LEN)];
    if let Some(kind) = infer::get(head) {
        return kind.mime_type().to_string();
    }
    if head.iter().any(|&b| is_binary_byte(b)) {
        FALLBACK_BINARY.to_string()
    } else {
        FALLBACK_TEXT.to_string()
    }
}

/// Control bytes that do not occur in plain text (TAB, LF, FF, CR and
/// ESC are allowed).
#[inline]
fn is_binary_byte(b: u8) -> bool {
    b <= 0x08 || b == 0x0B || (0x0E..=0x1A).contains(&b) || (0x1C..=0x1F).contains(&b)
}
