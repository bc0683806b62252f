//! Shared fixtures for the reconciliation tests.

use redline::{Category, Finding, Severity};

use crate::record::{PersistedRecord, PersistedState};

mod engine;
mod record;

pub(crate) fn finding(name: &str, sentence: &str, covered: &str, begin: usize, end: usize) -> Finding {
    Finding::new(
        name,
        Severity::Minor,
        Category::Readability,
        "explanation",
        sentence,
        covered,
        begin,
        end,
    )
}

pub(crate) fn record_of(finding: &Finding) -> PersistedRecord {
    PersistedRecord::from_finding(finding)
}

pub(crate) fn state_with_applied(applied: Vec<PersistedRecord>) -> PersistedState {
    PersistedState {
        previously_applied: applied,
        ..PersistedState::default()
    }
}
