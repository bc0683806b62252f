//! The built-in rule catalog.
//!
//! Every detector rule is described by a [`RuleConfig`]: its category,
//! default severity, optional numeric threshold and the explanation shown
//! to the reader. Detectors resolve their configuration through
//! [`RuleLookup::rule`]; nothing dispatches on the rule itself, so adding
//! a rule is one table entry.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use redline::{Category, Finding, Severity};

/// Configuration of one detector rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub category: Category,
    pub severity: Severity,
    /// Numeric trigger for rules that count something (words in a
    /// sentence, syllables in a word); `None` for match-based rules.
    pub threshold: Option<u32>,
    pub enabled: bool,
    pub explanation: String,
}

impl RuleConfig {
    fn new(
        name: &str,
        category: Category,
        severity: Severity,
        threshold: Option<u32>,
        explanation: &str,
    ) -> Self {
        RuleConfig {
            name: name.to_string(),
            category,
            severity,
            threshold,
            enabled: true,
            explanation: explanation.to_string(),
        }
    }

    /// Build a finding for this rule at a concrete location.
    ///
    /// Detector collaborators use this so findings carry the catalog's
    /// severity, category and explanation without copying them around.
    pub fn finding_at(
        &self,
        sentence: impl Into<String>,
        covered_text: impl Into<String>,
        begin: usize,
        end: usize,
    ) -> Finding {
        Finding::new(
            self.name.clone(),
            self.severity,
            self.category,
            self.explanation.clone(),
            sentence,
            covered_text,
            begin,
            end,
        )
    }
}

/// Resolution of a rule name to its configuration.
pub trait RuleLookup {
    fn rule(&self, name: &str) -> Option<&RuleConfig>;
}

/// A set of rule configurations, keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    rules: BTreeMap<String, RuleConfig>,
}

impl RuleLookup for Registry {
    fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }
}

impl Registry {
    /// The built-in catalog with default severities and thresholds.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: Lazy<Registry> = Lazy::new(|| {
            use Category::{Grammar, Readability};
            use Severity::{Critical, Major, Minor};

            let table = [
                RuleConfig::new(
                    "AdjectiveStyle",
                    Readability,
                    Minor,
                    Some(3),
                    "Too many adjectives in one sentence dilute the statement.",
                ),
                RuleConfig::new(
                    "AmbiguousAdjectivesAndAdverbs",
                    Readability,
                    Minor,
                    None,
                    "Vague qualifiers leave the reader guessing at the measure.",
                ),
                RuleConfig::new(
                    "ConsecutiveFillers",
                    Readability,
                    Major,
                    None,
                    "Several filler words in a row carry no content.",
                ),
                RuleConfig::new(
                    "ConsecutivePrepositions",
                    Readability,
                    Minor,
                    None,
                    "Chained prepositions make the phrase hard to parse.",
                ),
                RuleConfig::new(
                    "DoubleNegative",
                    Grammar,
                    Major,
                    Some(2),
                    "A double negative obscures what is being asserted.",
                ),
                RuleConfig::new(
                    "Filler",
                    Readability,
                    Minor,
                    None,
                    "Filler words weaken the sentence; drop them.",
                ),
                RuleConfig::new(
                    "FillerSentence",
                    Readability,
                    Major,
                    Some(3),
                    "This sentence leans on filler words throughout.",
                ),
                RuleConfig::new(
                    "IndirectSpeech",
                    Grammar,
                    Minor,
                    None,
                    "Indirect speech distances the reader; quote directly.",
                ),
                RuleConfig::new(
                    "LeadingAttributes",
                    Readability,
                    Major,
                    Some(3),
                    "A long attribute chain before the noun delays the point.",
                ),
                RuleConfig::new(
                    "LongSentence",
                    Readability,
                    Critical,
                    Some(40),
                    "This sentence is too long to follow in one reading.",
                ),
                RuleConfig::new(
                    "LongWord",
                    Readability,
                    Minor,
                    Some(6),
                    "Words with this many syllables slow the reader down.",
                ),
                RuleConfig::new(
                    "ModalVerb",
                    Readability,
                    Minor,
                    None,
                    "Modal verbs soften the statement; say what is the case.",
                ),
                RuleConfig::new(
                    "ModalVerbSentence",
                    Readability,
                    Major,
                    Some(3),
                    "Stacked modal verbs make the sentence non-committal.",
                ),
                RuleConfig::new(
                    "NestedSentence",
                    Readability,
                    Major,
                    Some(3),
                    "Deep nesting forces the reader to keep too much in mind.",
                ),
                RuleConfig::new(
                    "NestedSentenceConjunction",
                    Readability,
                    Major,
                    Some(3),
                    "Too many conjunctions chain clauses past comprehension.",
                ),
                RuleConfig::new(
                    "NominalStyle",
                    Readability,
                    Minor,
                    Some(4),
                    "Nominalizations hide the action; prefer verbs.",
                ),
                RuleConfig::new(
                    "PassiveVoice",
                    Readability,
                    Minor,
                    None,
                    "Passive voice hides who acts; name the actor.",
                ),
                RuleConfig::new(
                    "SentencesStartWithSameWord",
                    Readability,
                    Minor,
                    Some(3),
                    "Consecutive sentences open identically; vary the openings.",
                ),
                RuleConfig::new(
                    "UnnecessarySyllables",
                    Readability,
                    Minor,
                    None,
                    "A shorter form of this word says the same thing.",
                ),
            ];

            Registry {
                rules: table
                    .into_iter()
                    .map(|rule| (rule.name.clone(), rule))
                    .collect(),
            }
        });
        &BUILTIN
    }

    /// Iterate all rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleConfig> {
        self.rules.values()
    }

    /// Rules that are currently enabled, in name order.
    pub fn enabled(&self) -> impl Iterator<Item = &RuleConfig> {
        self.rules.values().filter(|rule| rule.enabled)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn insert(&mut self, rule: RuleConfig) {
        self.rules.insert(rule.name.clone(), rule);
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut RuleConfig> {
        self.rules.get_mut(name)
    }
}
