//! Quality gate evaluation.
//!
//! A pure function from readability scores and per-severity finding
//! counts to an explicit report; callers (report renderers, CI-style
//! executors) read the report, nobody accumulates pass/fail state on the
//! side.

use serde::{Deserialize, Serialize};

use redline::{Finding, Severity};
use redline_statistics::ReadabilityScores;

/// Outcome of a single gated measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateStatus {
    Pass,
    Warn,
    Fail,
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateStatus::Pass => write!(f, "pass"),
            GateStatus::Warn => write!(f, "warn"),
            GateStatus::Fail => write!(f, "fail"),
        }
    }
}

/// Thresholds for a score where high means "too easy" and low means
/// "too hard", like the Flesch family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub easy_warning: f64,
    pub hard_warning: f64,
    pub easy_error: f64,
    pub hard_error: f64,
}

impl ScoreThresholds {
    fn classify(&self, score: f64) -> GateStatus {
        if score >= self.easy_error || score <= self.hard_error {
            GateStatus::Fail
        } else if score >= self.easy_warning || score <= self.hard_warning {
            GateStatus::Warn
        } else {
            GateStatus::Pass
        }
    }
}

/// Count thresholds for findings of one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountThresholds {
    pub warning: usize,
    pub error: usize,
}

impl CountThresholds {
    fn classify(&self, count: usize) -> GateStatus {
        if count >= self.error {
            GateStatus::Fail
        } else if count >= self.warning {
            GateStatus::Warn
        } else {
            GateStatus::Pass
        }
    }
}

/// The whole gate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityGateConfig {
    /// Flesch-Amstad reading ease bounds.
    pub reading_ease: ScoreThresholds,
    pub minor: CountThresholds,
    pub major: CountThresholds,
    pub critical: CountThresholds,
}

impl Default for QualityGateConfig {
    fn default() -> Self {
        QualityGateConfig {
            reading_ease: ScoreThresholds {
                easy_warning: 85.0,
                hard_warning: 30.0,
                easy_error: 95.0,
                hard_error: 15.0,
            },
            minor: CountThresholds {
                warning: 25,
                error: 50,
            },
            major: CountThresholds {
                warning: 10,
                error: 25,
            },
            critical: CountThresholds {
                warning: 3,
                error: 10,
            },
        }
    }
}

/// Findings per severity, the count side of the gate's input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub minor: usize,
    pub major: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn tally<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = SeverityCounts::default();
        for finding in findings {
            match finding.severity {
                Severity::Minor => counts.minor += 1,
                Severity::Major => counts.major += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

/// One gated measurement in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateMeasurement {
    pub name: String,
    pub value: f64,
    pub status: GateStatus,
}

/// The gate's verdict: one entry per measurement plus the worst overall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateReport {
    pub measurements: Vec<GateMeasurement>,
}

impl GateReport {
    pub fn overall(&self) -> GateStatus {
        self.measurements
            .iter()
            .map(|m| m.status)
            .max()
            .unwrap_or(GateStatus::Pass)
    }

    pub fn passed(&self) -> bool {
        self.overall() != GateStatus::Fail
    }
}

/// Evaluate the gate. Pure: same inputs, same report.
pub fn evaluate(
    config: &QualityGateConfig,
    scores: &ReadabilityScores,
    counts: &SeverityCounts,
) -> GateReport {
    let measurements = vec![
        GateMeasurement {
            name: "flesch-reading-ease-amstad".to_string(),
            value: scores.flesch_reading_ease_amstad,
            status: config
                .reading_ease
                .classify(scores.flesch_reading_ease_amstad),
        },
        GateMeasurement {
            name: "minor-findings".to_string(),
            value: counts.minor as f64,
            status: config.minor.classify(counts.minor),
        },
        GateMeasurement {
            name: "major-findings".to_string(),
            value: counts.major as f64,
            status: config.major.classify(counts.major),
        },
        GateMeasurement {
            name: "critical-findings".to_string(),
            value: counts.critical as f64,
            status: config.critical.classify(counts.critical),
        },
    ];

    GateReport { measurements }
}
