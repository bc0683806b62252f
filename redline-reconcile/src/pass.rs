//! One full analysis pass over a document.
//!
//! Glue for the executor: prefilter the detected findings, reconcile
//! them against the previous pass, apply the survivors to the tree, and
//! produce both the state for the next pass and the user-visible summary
//! counts. The document is mutated in place and stays exclusively owned
//! by the caller for the duration of the pass.

use tracing::info;

use redline::applier::apply;
use redline::{AppliedReport, Document, Finding, OffsetInvariantViolation};

use crate::engine::ReconciliationEngine;
use crate::record::{PersistedRecord, PersistedState};

/// Everything one pass produced.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    /// Applied and skipped findings, from the applier.
    pub report: AppliedReport,
    /// Findings classified as already annotated.
    pub redundant: Vec<PersistedRecord>,
    /// Findings suppressed as known false positives.
    pub false_positives: Vec<PersistedRecord>,
    /// State to persist for the next pass.
    pub next_state: PersistedState,
}

impl PassOutcome {
    pub fn summary(&self) -> PassSummary {
        PassSummary {
            applied: self.report.applied.len(),
            skipped: self.report.skipped.len(),
            redundant: self.redundant.len(),
            false_positives: self.false_positives.len(),
            incorporated: self.next_state.incorporated.len(),
        }
    }
}

/// The externally observable result of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub applied: usize,
    pub skipped: usize,
    pub redundant: usize,
    pub false_positives: usize,
    pub incorporated: usize,
}

impl std::fmt::Display for PassSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "applied {}, skipped {}, redundant {}, false positives {}, incorporated {}",
            self.applied, self.skipped, self.redundant, self.false_positives, self.incorporated
        )
    }
}

/// Run one pass: reconcile `detected` against `state`, annotate
/// `document`, and compute the next state.
///
/// The only fatal error is a document whose offsets cannot be
/// established; per-finding problems are reported in the outcome.
pub fn run_pass(
    document: &mut Document,
    detected: Vec<Finding>,
    state: &PersistedState,
    engine: &ReconciliationEngine,
) -> Result<PassOutcome, OffsetInvariantViolation> {
    document.build_offsets()?;

    let detected = engine.prefilter(detected);
    let reconciliation = engine.reconcile(state, detected);
    let report = apply(document, reconciliation.to_apply);
    let next_state = engine.next_state(
        state,
        &report.applied,
        &reconciliation.redundant,
        &reconciliation.false_positives,
    );

    let outcome = PassOutcome {
        report,
        redundant: reconciliation.redundant,
        false_positives: reconciliation.false_positives,
        next_state,
    };
    info!(summary = %outcome.summary(), "analysis pass finished");
    Ok(outcome)
}
