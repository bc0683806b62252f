//! Findings: detected readability defects addressed by character offsets
//! into the flattened document text.

use serde::{Deserialize, Serialize};

/// How severe a broken rule is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Minor => write!(f, "Minor"),
            Severity::Major => write!(f, "Major"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

/// Coarse grouping of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Readability,
    Grammar,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Readability => write!(f, "Readability"),
            Category::Grammar => write!(f, "Grammar"),
        }
    }
}

/// A single defect reported by a detector collaborator.
///
/// `begin`/`end` address the flattened document text as it was when the
/// finding was produced; `covered_text` is the text the finding claims to
/// sit on, which the applier re-checks before mutating the tree. The
/// enclosing `sentence` is carried along because it is one of the three
/// identity components of the finding's fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule name, e.g. `"LongSentence"`.
    pub name: String,
    pub severity: Severity,
    pub category: Category,
    /// Explanatory text shown to the reader alongside the annotation.
    pub explanation: String,
    /// The sentence the defect occurs in.
    pub sentence: String,
    /// The exact text covered by `begin..end`.
    pub covered_text: String,
    /// Optional offending substrings, e.g. the individual filler words of
    /// a filler-sentence finding.
    #[serde(default)]
    pub violations: Vec<String>,
    pub begin: usize,
    pub end: usize,
}

impl Finding {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        severity: Severity,
        category: Category,
        explanation: impl Into<String>,
        sentence: impl Into<String>,
        covered_text: impl Into<String>,
        begin: usize,
        end: usize,
    ) -> Self {
        Finding {
            name: name.into(),
            severity,
            category,
            explanation: explanation.into(),
            sentence: sentence.into(),
            covered_text: covered_text.into(),
            violations: Vec::new(),
            begin,
            end,
        }
    }

    pub fn with_violations(mut self, violations: Vec<String>) -> Self {
        self.violations = violations;
        self
    }
}
