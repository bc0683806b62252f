//! Offset bookkeeping for the document tree.
//!
//! Offsets are computed bottom-up from run text lengths: runs within a
//! paragraph are contiguous, and paragraphs within a document are
//! contiguous. [`Document::build_offsets`] establishes (and validates) the
//! offsets after construction; [`Document::refresh_offsets`] re-establishes
//! them for one paragraph and everything after it following a mutation.
//!
//! Lookups go the other way: [`Document::locate`] finds the unique run
//! whose range fully contains a query span. A query that straddles a run
//! boundary has no single containing run and yields `None`; callers treat
//! that as "this finding cannot be placed", not as an error.

use crate::document::{Document, ParagraphChild};
use crate::errors::OffsetInvariantViolation;

/// Position of a run within the document tree, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLocation {
    /// Index of the paragraph in `document.paragraphs`.
    pub paragraph: usize,
    /// Index of the run in that paragraph's `children`.
    pub child: usize,
}

impl Document {
    /// Compute offsets bottom-up over all runs, in one pass.
    ///
    /// Every run's recorded span length is checked against its text; a
    /// disagreement means the tree handed over by the codec cannot be
    /// trusted, and the whole pass must be aborted.
    pub fn build_offsets(&mut self) -> Result<(), OffsetInvariantViolation> {
        for (paragraph_idx, paragraph) in self.paragraphs.iter().enumerate() {
            for (child_idx, child) in paragraph.children.iter().enumerate() {
                if let ParagraphChild::Run(run) = child {
                    let recorded = run.end.saturating_sub(run.begin);
                    let actual = run.len();
                    if recorded != actual {
                        return Err(OffsetInvariantViolation {
                            paragraph: paragraph_idx,
                            child: child_idx,
                            recorded,
                            actual,
                        });
                    }
                }
            }
        }

        self.assign_offsets_from(0, 0);
        Ok(())
    }

    /// Recompute offsets for `paragraph` and every paragraph after it.
    ///
    /// Must be called after each mutation of a paragraph's children. The
    /// paragraphs before `paragraph` are untouched; the ones after shift
    /// by whatever length delta the mutation introduced.
    pub fn refresh_offsets(&mut self, paragraph: usize) {
        let start = self
            .paragraphs
            .get(paragraph)
            .map(|p| p.begin)
            .unwrap_or(0);
        self.assign_offsets_from(paragraph, start);
    }

    fn assign_offsets_from(&mut self, paragraph: usize, start: usize) {
        let mut position = start;
        for p in self.paragraphs.iter_mut().skip(paragraph) {
            p.begin = position;
            for child in p.children.iter_mut() {
                if let ParagraphChild::Run(run) = child {
                    run.begin = position;
                    position += run.len();
                    run.end = position;
                }
            }
            p.end = position;
        }
    }

    /// Find the unique run whose range fully contains `[begin, end)`.
    ///
    /// Returns `None` for an empty query, for a span outside the document,
    /// and for a span that crosses a run boundary. All of these are normal
    /// outcomes: not every finding can be placed.
    pub fn locate(&self, begin: usize, end: usize) -> Option<RunLocation> {
        if begin >= end {
            return None;
        }

        for (paragraph_idx, paragraph) in self.paragraphs.iter().enumerate() {
            if begin < paragraph.begin || end > paragraph.end {
                continue;
            }
            for (child_idx, child) in paragraph.children.iter().enumerate() {
                if let ParagraphChild::Run(run) = child {
                    if begin >= run.begin && end <= run.end {
                        return Some(RunLocation {
                            paragraph: paragraph_idx,
                            child: child_idx,
                        });
                    }
                }
            }
            return None;
        }

        None
    }
}
