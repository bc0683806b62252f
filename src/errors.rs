//! Error types for the placement engine.
//!
//! There are two tiers. Tree-level errors ([`OffsetInvariantViolation`])
//! mean the document cannot be trusted and abort the whole pass.
//! Per-finding failures ([`PlacementFailure`]) are recorded against the
//! individual finding and never interrupt the batch.

use thiserror::Error;

/// A run's recorded span disagrees with its own text.
///
/// Fatal for the whole document: offset bookkeeping downstream would
/// silently corrupt the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "run {child} of paragraph {paragraph} records a span of {recorded} chars but its text has {actual}"
)]
pub struct OffsetInvariantViolation {
    pub paragraph: usize,
    pub child: usize,
    pub recorded: usize,
    pub actual: usize,
}

/// Why a single finding could not be placed.
///
/// These are expected outcomes of a batch, reported per finding and
/// logged; the batch continues with the remaining findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementFailure {
    /// No single run fully contains the finding's span. Typical causes:
    /// the span crosses a run boundary, or addresses a non-text region.
    #[error("no single run contains the span {begin}..{end}")]
    NoPlacementTarget { begin: usize, end: usize },

    /// The document text at the finding's offsets is not the text the
    /// finding claims to cover; the offsets are stale.
    #[error("covered text mismatch at {begin}..{end}: expected {expected:?}, found {found:?}")]
    CoveredTextMismatch {
        begin: usize,
        end: usize,
        expected: String,
        found: String,
    },

    /// The span overlaps a span already annotated earlier in this batch.
    /// Overlap semantics are deliberately not defined; the later finding
    /// is skipped.
    #[error("span {begin}..{end} overlaps an annotation placed earlier in this batch")]
    OverlappingSpan { begin: usize, end: usize },
}
