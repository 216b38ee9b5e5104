//! Detection result types: the resolved content type plus which branch of the
//! engine produced it.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Which branch of the fallback engine resolved the content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Origin {
    /// Caller-asserted type plus a PDF trailer decided the outcome before any
    /// signature detection ran.
    Hint,
    /// The base detector matched a signature on the first attempt.
    Signature,
    /// A signature matched after re-sniffing at a shifted starting offset.
    OffsetRetry {
        /// Offset into the (BOM-stripped) start fragment where the match hit.
        offset: usize,
    },
    /// No signature matched, but the tail fragment contained the `%%EOF`
    /// PDF trailer.
    Trailer,
    /// Nothing matched; the base detector's generic fallback stands.
    Fallback,
}

impl Origin {
    /// Short label for display (e.g. "signature", "offset-retry").
    pub fn label(self) -> &'static str {
        match self {
            Origin::Hint => "hint",
            Origin::Signature => "signature",
            Origin::OffsetRetry { .. } => "offset-retry",
            Origin::Trailer => "trailer",
            Origin::Fallback => "fallback",
        }
    }
}

/// Result of one detection: the MIME type and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Detection {
    /// Resolved MIME type. Never empty: always a base-detector result or the
    /// literal `application/pdf` override.
    pub content_type: String,
    /// Which branch produced it.
    pub origin: Origin,
}
