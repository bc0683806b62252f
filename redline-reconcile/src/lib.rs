#![doc(
    html_logo_url = "https://raw.githubusercontent.com/redline-tools/redline/main/assets/redline.svg",
    issue_tracker_base_url = "https://github.com/redline-tools/redline/issues/"
)]

//! Cross-pass reconciliation for redline.
//!
//! A document is analysed repeatedly while the author edits it. This
//! crate keeps the annotation feedback loop self-consistent across those
//! passes: freshly detected findings are classified against what earlier
//! passes applied, suppressed or saw the user reject, so the author is
//! never shown the same comment twice and fixed defects are recognized
//! as incorporated.
//!
//! ## Modules
//!
//! - [`engine`] - The reconciliation partition and next-state computation
//! - [`record`] - Persisted records and the three per-pass state lists
//! - [`distance`] - Character-level edit distance for fuzzy matching
//! - [`pass`] - One full pass: reconcile, apply, summarize
//! - [`errors`] - Error types

pub mod distance;
pub mod engine;
pub mod errors;
pub mod pass;
pub mod record;

pub use distance::levenshtein;
pub use engine::{Reconciliation, ReconciliationEngine, DEFAULT_FUZZY_DISTANCE};
pub use errors::PersistedStateUnreadable;
pub use pass::{run_pass, PassOutcome, PassSummary};
pub use record::{PersistedRecord, PersistedState};

#[cfg(test)]
mod tests;
