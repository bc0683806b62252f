#![doc(
    html_logo_url = "https://raw.githubusercontent.com/redline-tools/redline/main/assets/redline.svg",
    issue_tracker_base_url = "https://github.com/redline-tools/redline/issues/"
)]

//! Annotation placement engine for readability review of structured
//! documents.
//!
//! A reviewed document is a tree: a [`Document`] of ordered [`Paragraph`]s
//! whose children are text [`Run`]s (each carrying an opaque formatting
//! token) and the markers of previously placed annotations. Findings from
//! an external detector address the flattened document text by character
//! offsets; this crate maps them back onto the tree, splits the minimal
//! run needed to bracket exactly the covered text, and maintains the
//! offset bookkeeping across the resulting mutations.
//!
//! ## Modules
//!
//! - [`document`] - The document tree and annotation store
//! - [`offset_index`] - Offset computation, validation and run lookup
//! - [`splitter`] - Splitting a run around an annotated span
//! - [`applier`] - Sequential batch application of findings
//! - [`finding`] - Finding, severity and category types
//! - [`fingerprint`] - Content-derived finding identity
//! - [`errors`] - Error taxonomy (fatal tree errors vs. per-finding skips)
//! - [`display`] - Debug rendering of an annotated document
//!
//! Reconciling fresh findings against the persisted outcome of earlier
//! passes lives in the companion crate `redline-reconcile`.

pub mod applier;
pub mod display;
pub mod document;
pub mod errors;
pub mod finding;
pub mod fingerprint;
pub mod offset_index;
pub mod splitter;

// Re-exports for convenient access to core types
pub use applier::{apply, AppliedReport, SkippedFinding};
pub use display::DocumentDisplay;
pub use document::{Annotation, Document, Paragraph, ParagraphChild, Run, RunFormat};
pub use errors::{OffsetInvariantViolation, PlacementFailure};
pub use finding::{Category, Finding, Severity};
pub use fingerprint::Fingerprint;
pub use offset_index::RunLocation;
pub use splitter::split_run;

#[cfg(test)]
mod tests;
