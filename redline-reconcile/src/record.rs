//! Persisted per-pass analysis state.
//!
//! At the end of a pass the engine writes back three disjoint record
//! lists; the codec stores them in an opaque metadata blob next to the
//! document and hands them back, parsed, at the start of the next pass.
//! A [`PersistedRecord`] is a reduced finding: everything needed to
//! re-identify the defect, nothing needed to re-place it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use redline::{Category, Finding, Fingerprint, Severity};

use crate::errors::PersistedStateUnreadable;

/// A finding reduced to what the next pass needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub name: String,
    pub severity: Severity,
    pub category: Category,
    pub explanation: String,
    pub sentence: String,
    pub covered_text: String,
    #[serde(default)]
    pub violations: Vec<String>,
    pub begin: usize,
    pub end: usize,
    pub fingerprint: Fingerprint,
}

impl PersistedRecord {
    pub fn from_finding(finding: &Finding) -> Self {
        PersistedRecord {
            name: finding.name.clone(),
            severity: finding.severity,
            category: finding.category,
            explanation: finding.explanation.clone(),
            sentence: finding.sentence.clone(),
            covered_text: finding.covered_text.clone(),
            violations: finding.violations.clone(),
            begin: finding.begin,
            end: finding.end,
            fingerprint: Fingerprint::of(finding),
        }
    }
}

/// The three record lists carried from pass to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Findings annotated in the document after the previous pass.
    #[serde(default)]
    pub previously_applied: Vec<PersistedRecord>,
    /// Findings the user rejected; suppressed on rediscovery.
    #[serde(default)]
    pub false_positives: Vec<PersistedRecord>,
    /// Findings that disappeared from detection, i.e. were fixed.
    #[serde(default)]
    pub incorporated: Vec<PersistedRecord>,
}

impl PersistedState {
    pub fn is_empty(&self) -> bool {
        self.previously_applied.is_empty()
            && self.false_positives.is_empty()
            && self.incorporated.is_empty()
    }

    /// Parse a state blob serialized by [`PersistedState::to_ron`].
    pub fn from_ron(source: &str) -> Result<Self, PersistedStateUnreadable> {
        ron::from_str(source).map_err(|e| PersistedStateUnreadable {
            message: e.to_string(),
        })
    }

    /// Serialize for the codec's metadata blob.
    pub fn to_ron(&self) -> Result<String, PersistedStateUnreadable> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(|e| {
            PersistedStateUnreadable {
                message: e.to_string(),
            }
        })
    }

    /// Interpret a possibly-missing, possibly-corrupt state blob.
    ///
    /// A document that was never analysed has no blob, and a mangled blob
    /// is not worth failing a pass over: both simply mean "no history".
    pub fn load_or_empty(source: Option<&str>) -> Self {
        match source {
            None => PersistedState::default(),
            Some(source) => match PersistedState::from_ron(source) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "persisted state unreadable, starting with empty history");
                    PersistedState::default()
                }
            },
        }
    }
}
