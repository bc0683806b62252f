//! Content-derived finding identity.
//!
//! A fingerprint is the stable identity of a finding across analysis
//! passes: the same defect, rediscovered after unrelated edits shifted
//! its offsets, must hash to the same value. It is therefore derived
//! exclusively from content (enclosing sentence, covered text, rule name)
//! and never from positions.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::finding::Finding;

/// Stable 64-bit identity of a finding.
///
/// Used purely as an equality key; xxh3 gives process- and
/// platform-independent values without cryptographic cost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Fingerprint a finding from its identity components.
    ///
    /// Each component is length-prefixed before hashing so that moving a
    /// boundary between sentence and covered text cannot produce the same
    /// byte stream.
    pub fn of(finding: &Finding) -> Self {
        Fingerprint::from_parts(&finding.sentence, &finding.covered_text, &finding.name)
    }

    /// Fingerprint from raw identity components, for callers that hold a
    /// reduced record rather than a full finding.
    pub fn from_parts(sentence: &str, covered_text: &str, name: &str) -> Self {
        let mut bytes =
            Vec::with_capacity(sentence.len() + covered_text.len() + name.len() + 24);
        for part in [sentence, covered_text, name] {
            bytes.extend_from_slice(&(part.len() as u64).to_le_bytes());
            bytes.extend_from_slice(part.as_bytes());
        }
        Fingerprint(xxh3_64(&bytes))
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
