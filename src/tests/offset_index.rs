use super::{assert_run_invariant, sample_document};
use crate::document::{Document, Paragraph, ParagraphChild, Run, RunFormat};

#[test]
fn test_build_assigns_contiguous_offsets() {
    let document = sample_document();

    let spans: Vec<(usize, usize)> = document
        .paragraphs
        .iter()
        .flat_map(|p| p.runs().map(|r| (r.begin, r.end)))
        .collect();
    assert_eq!(spans, vec![(0, 12), (12, 20), (20, 29), (29, 35)]);

    assert_eq!(document.paragraphs[0].begin, 0);
    assert_eq!(document.paragraphs[0].end, 20);
    assert_eq!(document.paragraphs[1].begin, 20);
    assert_eq!(document.paragraphs[1].end, 35);
    assert_eq!(document.begin(), 0);
    assert_eq!(document.end(), 35);
    assert_eq!(document.text(), "The weather is nice.It rains today.");
    assert_run_invariant(&document);
}

#[test]
fn test_build_rejects_span_length_disagreement() {
    let mut document = Document::new(vec![Paragraph::new(vec![Run::spanned(
        "abc",
        RunFormat::none(),
        0,
        5,
    )])]);

    let err = document.build_offsets().unwrap_err();
    assert_eq!(err.paragraph, 0);
    assert_eq!(err.child, 0);
    assert_eq!(err.recorded, 5);
    assert_eq!(err.actual, 3);
}

#[test]
fn test_build_normalizes_codec_positions() {
    // Lengths agree but positions are garbage; build re-anchors them.
    let mut document = Document::new(vec![Paragraph::new(vec![
        Run::spanned("ab", RunFormat::none(), 100, 102),
        Run::spanned("cd", RunFormat::none(), 7, 9),
    ])]);

    document.build_offsets().unwrap();
    let spans: Vec<(usize, usize)> = document.paragraphs[0]
        .runs()
        .map(|r| (r.begin, r.end))
        .collect();
    assert_eq!(spans, vec![(0, 2), (2, 4)]);
}

#[test]
fn test_locate_contained_spans() {
    let document = sample_document();

    // Interior of the first run.
    let location = document.locate(4, 11).unwrap();
    assert_eq!((location.paragraph, location.child), (0, 0));

    // Exactly the second run.
    let location = document.locate(12, 20).unwrap();
    assert_eq!((location.paragraph, location.child), (0, 1));

    // Second paragraph.
    let location = document.locate(23, 28).unwrap();
    assert_eq!((location.paragraph, location.child), (1, 0));
}

#[test]
fn test_locate_straddling_span_is_none() {
    let document = sample_document();
    // "r is" crosses the boundary between the first two runs.
    assert!(document.locate(10, 14).is_none());
    // Crossing the paragraph boundary.
    assert!(document.locate(18, 23).is_none());
}

#[test]
fn test_locate_degenerate_queries() {
    let document = sample_document();
    assert!(document.locate(4, 4).is_none());
    assert!(document.locate(30, 80).is_none());
    assert!(document.locate(35, 36).is_none());
}

#[test]
fn test_refresh_shifts_following_paragraphs() {
    let mut document = sample_document();

    // Simulate a mutation that grows the first paragraph.
    document.paragraphs[0]
        .children
        .push(ParagraphChild::Run(Run::new(" Truly.", RunFormat::none())));
    document.refresh_offsets(0);

    assert_eq!(document.paragraphs[0].end, 27);
    assert_eq!(document.paragraphs[1].begin, 27);
    assert_eq!(document.paragraphs[1].end, 42);
    assert_run_invariant(&document);
}
