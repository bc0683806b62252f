//! Applying a batch of findings to the document tree.
//!
//! Application is strictly sequential in the given finding order: every
//! successful placement rewrites run offsets in its paragraph, so each
//! finding is located only after the refresh triggered by the one before
//! it. Per-finding failures are recorded and skipped; they never abort
//! the batch.

use tracing::debug;

use crate::document::{Annotation, Document, ParagraphChild};
use crate::errors::PlacementFailure;
use crate::fingerprint::Fingerprint;
use crate::finding::Finding;
use crate::splitter::split_run;

/// A finding that could not be placed, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFinding {
    pub finding: Finding,
    pub failure: PlacementFailure,
}

/// Outcome of one application batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedReport {
    /// Findings that were fully placed, in application order.
    pub applied: Vec<Finding>,
    /// Findings that could not be placed, with their failure.
    pub skipped: Vec<SkippedFinding>,
}

impl AppliedReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Apply `findings` to `document` in order, splicing a marker pair and an
/// annotation store entry for each successful placement.
///
/// Annotation ids are allocated from `max_annotation_id() + 1`, read once
/// at the start of the batch and incremented per placement; re-reading
/// the mutated tree mid-batch would hand out ids of in-flight insertions.
///
/// Either a finding is fully placed (both markers, the reference token
/// and the store entry) or the tree is untouched for it; no partial
/// placement is ever left behind.
pub fn apply(document: &mut Document, findings: Vec<Finding>) -> AppliedReport {
    let mut report = AppliedReport::default();
    let mut next_id = document.max_annotation_id() + 1;
    let mut placed_spans: Vec<(usize, usize)> = Vec::new();

    for finding in findings {
        if let Some(failure) = try_place(document, &finding, next_id, &placed_spans) {
            debug!(
                rule = finding.name.as_str(),
                begin = finding.begin,
                end = finding.end,
                %failure,
                "finding skipped"
            );
            report.skipped.push(SkippedFinding { finding, failure });
            continue;
        }

        placed_spans.push((finding.begin, finding.end));
        next_id += 1;
        report.applied.push(finding);
    }

    debug!(
        applied = report.applied_count(),
        skipped = report.skipped_count(),
        "annotation batch done"
    );
    report
}

/// Attempt a single placement. Returns the failure on a skip, `None` on
/// success (in which case the tree has been mutated and refreshed).
fn try_place(
    document: &mut Document,
    finding: &Finding,
    id: u32,
    placed_spans: &[(usize, usize)],
) -> Option<PlacementFailure> {
    let overlapping = placed_spans
        .iter()
        .any(|&(begin, end)| finding.begin < end && begin < finding.end);
    if overlapping {
        return Some(PlacementFailure::OverlappingSpan {
            begin: finding.begin,
            end: finding.end,
        });
    }

    let location = match document.locate(finding.begin, finding.end) {
        Some(location) => location,
        None => {
            return Some(PlacementFailure::NoPlacementTarget {
                begin: finding.begin,
                end: finding.end,
            });
        }
    };

    let paragraph = &document.paragraphs[location.paragraph];
    let run = paragraph.children[location.child]
        .as_run()
        .expect("locate returns run positions");

    let replacement = match split_run(
        run,
        finding.begin - run.begin,
        finding.end - run.begin,
        &finding.covered_text,
        id,
    ) {
        Ok(replacement) => replacement,
        Err(failure) => return Some(failure),
    };

    document.annotations.push(Annotation {
        id,
        name: finding.name.clone(),
        severity: finding.severity,
        explanation: finding.explanation.clone(),
        fingerprint: Fingerprint::of(finding),
    });

    let paragraph = &mut document.paragraphs[location.paragraph];
    paragraph
        .children
        .splice(location.child..=location.child, replacement);
    document.refresh_offsets(location.paragraph);

    None
}

/// Marker ids present in the paragraph content, in document order.
///
/// Exposed for consistency checks: every id seen here should resolve in
/// the annotation store.
pub fn marker_ids(document: &Document) -> Vec<u32> {
    let mut ids = Vec::new();
    for paragraph in &document.paragraphs {
        for child in &paragraph.children {
            if let ParagraphChild::MarkerStart(id) = child {
                ids.push(*id);
            }
        }
    }
    ids
}
