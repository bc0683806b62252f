//! Shared fixtures for the engine tests.

use crate::document::{slice_chars, Document, Paragraph, Run, RunFormat};
use crate::finding::{Category, Finding, Severity};

mod offset_index;

/// Two-paragraph document used throughout the tests.
///
/// ```text
/// paragraph 0: "The weather " (plain)  + "is nice." ("i")   -> 0..20
/// paragraph 1: "It rains "    ("b")    + "today."  (plain)  -> 20..35
/// ```
pub(crate) fn sample_document() -> Document {
    let mut document = Document::new(vec![
        Paragraph::new(vec![
            Run::new("The weather ", RunFormat::none()),
            Run::new("is nice.", RunFormat::token("i")),
        ]),
        Paragraph::new(vec![
            Run::new("It rains ", RunFormat::token("b")),
            Run::new("today.", RunFormat::none()),
        ]),
    ]);
    document.build_offsets().unwrap();
    document
}

pub(crate) fn finding(name: &str, covered: &str, begin: usize, end: usize) -> Finding {
    Finding::new(
        name,
        Severity::Minor,
        Category::Readability,
        "explanation",
        "The weather is nice.",
        covered,
        begin,
        end,
    )
}

/// After any mutation, every run's recorded span must still address its
/// own text within the flattened document.
pub(crate) fn assert_run_invariant(document: &Document) {
    let text = document.text();
    for paragraph in &document.paragraphs {
        for run in paragraph.runs() {
            assert_eq!(
                slice_chars(&text, run.begin, run.end),
                run.text,
                "run span {}..{} out of sync",
                run.begin,
                run.end
            );
        }
    }
}
