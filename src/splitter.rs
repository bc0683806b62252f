//! Splitting a run around an annotated span.
//!
//! An annotation is anchored by bracketing exactly the covered text with a
//! marker pair. When the covered span is only part of a run, the run has
//! to be split so that the markers enclose nothing but the match; the
//! front and back remainders keep the original formatting token, so the
//! visible document is unchanged apart from the annotation itself.

use crate::document::{slice_chars, ParagraphChild, Run};
use crate::errors::PlacementFailure;

/// Produce the replacement sequence for `run` with the span
/// `[begin, end)` (run-relative, in characters) bracketed by the marker
/// pair for annotation `id`.
///
/// Four structural cases, depending on where the span falls:
///
/// 1. interior - `[front, start, match, end, ref, back]`
/// 2. suffix - `[front, start, match, end, ref]`
/// 3. prefix - `[start, match, end, ref, back]`
/// 4. exact - `[start, match, end, ref]`
///
/// The caller has already translated the finding's offsets to be
/// run-relative; `covered_text` is re-checked against the run text here,
/// immediately before the only place the tree is rewritten. On a mismatch
/// nothing is emitted and the finding must be skipped.
pub fn split_run(
    run: &Run,
    begin: usize,
    end: usize,
    covered_text: &str,
    id: u32,
) -> Result<Vec<ParagraphChild>, PlacementFailure> {
    debug_assert!(begin < end && end <= run.len());

    let matched = slice_chars(&run.text, begin, end);
    if matched != covered_text {
        return Err(PlacementFailure::CoveredTextMismatch {
            begin: run.begin + begin,
            end: run.begin + end,
            expected: covered_text.to_string(),
            found: matched.to_string(),
        });
    }

    let front = slice_chars(&run.text, 0, begin);
    let back = slice_chars(&run.text, end, run.len());

    let mut replacement = Vec::with_capacity(6);
    if !front.is_empty() {
        replacement.push(ParagraphChild::Run(Run::new(front, run.format.clone())));
    }
    replacement.push(ParagraphChild::MarkerStart(id));
    replacement.push(ParagraphChild::Run(Run::new(matched, run.format.clone())));
    replacement.push(ParagraphChild::MarkerEnd(id));
    replacement.push(ParagraphChild::MarkerRef(id));
    if !back.is_empty() {
        replacement.push(ParagraphChild::Run(Run::new(back, run.format.clone())));
    }

    Ok(replacement)
}
