//! # resniff
//!
//! Best-effort MIME content-type detection for byte buffers with unreliable
//! leading bytes, built as a fallback layer on top of a byte-signature
//! sniffer.
//!
//! Plain signature sniffing fails on real-world uploads more often than it
//! should: a UTF-8 BOM in front of the content, junk bytes some PDF
//! generators prepend before `%PDF`, or a PDF whose header is mangled but
//! whose trailer is intact. This crate wraps a base signature detector and
//! adds:
//!
//! - **BOM stripping** before the first detection attempt.
//! - **Bounded offset retry**: when the base detector only produces a generic
//!   fallback type, re-sniff at increasing offsets (leading whitespace plus up
//!   to 10 junk bytes) until a signature matches.
//! - **PDF trailer recovery**: if nothing matched and a tail fragment of the
//!   file contains `%%EOF`, classify as `application/pdf`.
//! - **Caller hint short-circuit**: an upstream-asserted PDF-ish or generic
//!   type combined with a `%%EOF` trailer resolves to `application/pdf`
//!   without running signature detection at all.
//!
//! The default base detector is backed by the `infer` signature table and
//! falls back to `application/octet-stream` / `text/plain; charset=utf-8`
//! like a browser sniffer would. Bring your own detector with
//! [`detect_content_type_with`].
//!
//! All functions are total: any input, including empty buffers, yields a
//! non-empty MIME string. No state is kept across calls, so everything here
//! is safe to use from multiple threads without coordination.
//!
//! ## Example
//!
//! ```
//! use resniff::detect_content_type;
//!
//! // Junk bytes before the signature: recovered by the offset retry.
//! let ct = detect_content_type(b"garbage %PDF-1.4 1 0 obj", None);
//! assert_eq!(ct, "application/pdf");
//!
//! // Obscured header, intact trailer: recovered from the tail fragment.
//! let tail = b"startxref\n123\n%%EOF\n";
//! let ct = detect_content_type(b"\x00\x01binary junk", Some(tail));
//! assert_eq!(ct, "application/pdf");
//! ```

pub mod base;
mod engine;
mod result;

pub use base::{is_fallback_content_type, sniff, FALLBACK_BINARY, FALLBACK_TEXT};
pub use engine::{
    detect_content_type_with, detect_detailed_with, is_pdf_content_type, PDF_CONTENT_TYPES,
    PDF_EOF_MARKER, PDF_MIME,
};
pub use result::{Detection, Origin};

/// Detect the content type of a buffer using the default base detector.
///
/// `start` is the beginning of the file; `end` is an optional tail fragment,
/// used only to look for the `%%EOF` PDF trailer.
#[inline]
pub fn detect_content_type(start: &[u8], end: Option<&[u8]>) -> String {
    engine::detect_content_type_with(base::sniff, None, start, end)
}

/// Like [`detect_content_type`], with a caller-asserted content type.
///
/// When `hint` is already a recognized PDF type or a generic fallback type
/// and `end` contains `%%EOF`, the engine short-circuits to
/// `application/pdf` before any signature detection runs.
#[inline]
pub fn detect_content_type_with_hint(hint: &str, start: &[u8], end: Option<&[u8]>) -> String {
    engine::detect_content_type_with(base::sniff, Some(hint), start, end)
}

/// Full detection result including provenance, using the default base
/// detector.
#[inline]
pub fn detect_detailed(hint: Option<&str>, start: &[u8], end: Option<&[u8]>) -> Detection {
    engine::detect_detailed_with(base::sniff, hint, start, end)
}

/// Result of detecting one item in a batch (path or index + detection).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchItem<T> {
    pub path_or_id: T,
    pub detection: Detection,
}

/// Detect many buffers in sequence. Each item is an id, a start fragment, and
/// an optional tail fragment.
pub fn detect_batch<I, B>(items: I) -> Vec<BatchItem<B>>
where
    I: IntoIterator<Item = (B, Vec<u8>, Option<Vec<u8>>)>,
{
    items
        .into_iter()
        .map(|(path_or_id, start, end)| BatchItem {
            path_or_id,
            detection: detect_detailed(None, &start, end.as_deref()),
        })
        .collect()
}

/// Detect many buffers in parallel on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn detect_batch_parallel<B>(items: &[(B, Vec<u8>, Option<Vec<u8>>)]) -> Vec<BatchItem<B>>
where
    B: Clone + Send + Sync,
{
    use rayon::prelude::*;

    items
        .par_iter()
        .map(|(path_or_id, start, end)| BatchItem {
            path_or_id: path_or_id.clone(),
            detection: detect_detailed(None, start, end.as_deref()),
        })
        .collect()
}
