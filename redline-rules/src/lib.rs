#![doc(
    html_logo_url = "https://raw.githubusercontent.com/redline-tools/redline/main/assets/redline.svg",
    issue_tracker_base_url = "https://github.com/redline-tools/redline/issues/"
)]

//! Rule catalog, configuration and quality gate for redline.
//!
//! Detector collaborators look up how each rule is configured (severity,
//! threshold, enabled) in the [`Registry`]; projects override the
//! defaults with a small TOML file; and the quality gate condenses a
//! finished pass into a pass/warn/fail verdict per measurement.
//!
//! ## Modules
//!
//! - [`registry`] - Built-in rule catalog and lookup
//! - [`config`] - TOML overrides on top of the catalog
//! - [`gate`] - Pure quality gate evaluation

pub mod config;
pub mod gate;
pub mod registry;

pub use config::{ConfigError, RuleOverride, RulesFile};
pub use gate::{
    evaluate, CountThresholds, GateMeasurement, GateReport, GateStatus, QualityGateConfig,
    ScoreThresholds, SeverityCounts,
};
pub use registry::{Registry, RuleConfig, RuleLookup};
