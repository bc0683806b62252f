//! In-memory representation of a structured rich-text document.
//!
//! A [`Document`] owns an ordered sequence of [`Paragraph`]s, each of which
//! owns an ordered sequence of children: text-bearing [`Run`]s interleaved
//! with annotation markers placed by the applier. The flattened document
//! text is the concatenation of all run texts in order, and every node
//! tracks its character-offset range within that flattened text.
//!
//! Offsets are character offsets (not byte offsets), so findings produced
//! against the flattened text address the same positions regardless of
//! UTF-8 encoding width.

use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::finding::Severity;

/// Opaque formatting token carried by a [`Run`].
///
/// The engine never interprets this value; it is round-tripped unchanged
/// so that splitting a run does not disturb the surrounding formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat(Option<String>);

impl RunFormat {
    /// A run with no explicit formatting.
    pub fn none() -> Self {
        RunFormat(None)
    }

    /// A run carrying the given formatting token.
    pub fn token(token: impl Into<String>) -> Self {
        RunFormat(Some(token.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// A text-bearing leaf node.
///
/// `begin`/`end` are character offsets into the flattened document text.
/// They are maintained by the offset index (see [`Document::build_offsets`])
/// and must satisfy `end - begin == text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub format: RunFormat,
    pub begin: usize,
    pub end: usize,
}

impl Run {
    /// Create a run positioned at offset zero; [`Document::build_offsets`]
    /// assigns the real position.
    pub fn new(text: impl Into<String>, format: RunFormat) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Run {
            text,
            format,
            begin: 0,
            end: len,
        }
    }

    /// Create a run with an explicit recorded span, as handed over by a
    /// document codec that tracked offsets during import.
    pub fn spanned(text: impl Into<String>, format: RunFormat, begin: usize, end: usize) -> Self {
        Run {
            text: text.into(),
            format,
            begin,
            end,
        }
    }

    /// Character length of the run text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One element of a paragraph's content sequence.
///
/// Besides text runs, a paragraph carries the structural elements of placed
/// annotations: a range-start/range-end pair bracketing the annotated run,
/// and a back-reference token linking to the entry in the document's
/// annotation store. Markers carry no text and do not participate in
/// offset bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParagraphChild {
    Run(Run),
    MarkerStart(u32),
    MarkerEnd(u32),
    MarkerRef(u32),
}

impl ParagraphChild {
    pub fn as_run(&self) -> Option<&Run> {
        match self {
            ParagraphChild::Run(run) => Some(run),
            _ => None,
        }
    }

    pub fn as_run_mut(&mut self) -> Option<&mut Run> {
        match self {
            ParagraphChild::Run(run) => Some(run),
            _ => None,
        }
    }
}

/// An ordered sequence of runs and markers, owned exclusively by a
/// [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<ParagraphChild>,
    /// Offset of the first run's first character in the document text.
    pub begin: usize,
    /// Offset one past the last run's last character.
    pub end: usize,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Paragraph {
            children: runs.into_iter().map(ParagraphChild::Run).collect(),
            begin: 0,
            end: 0,
        }
    }

    /// The paragraph's flattened text: all run texts in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let ParagraphChild::Run(run) = child {
                out.push_str(&run.text);
            }
        }
        out
    }

    /// Iterate the text runs of this paragraph in order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.children.iter().filter_map(ParagraphChild::as_run)
    }
}

/// An entry in the document's annotation store.
///
/// The store plays the role of the comment table in annotation-capable
/// document formats: markers in the paragraph content reference entries
/// here by id. Ids are unique within a document and strictly increasing
/// across passes; the codec persists the store alongside the tree so the
/// maximum id survives restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u32,
    pub name: String,
    pub severity: Severity,
    pub explanation: String,
    pub fingerprint: Fingerprint,
}

/// The document tree: ordered paragraphs plus the annotation store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub annotations: Vec<Annotation>,
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Document {
            paragraphs,
            annotations: Vec::new(),
        }
    }

    /// The flattened document text: concatenation of all paragraph texts.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for paragraph in &self.paragraphs {
            for child in &paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    out.push_str(&run.text);
                }
            }
        }
        out
    }

    /// Offset of the start of the document text. Zero by construction.
    pub fn begin(&self) -> usize {
        self.paragraphs.first().map(|p| p.begin).unwrap_or(0)
    }

    /// Offset one past the end of the document text.
    pub fn end(&self) -> usize {
        self.paragraphs.last().map(|p| p.end).unwrap_or(0)
    }

    /// The highest annotation id present in the document, or 0 if the
    /// document has never been annotated.
    ///
    /// The applier allocates new ids starting from this value; the codec
    /// exposes it so id allocation is consistent across process restarts.
    pub fn max_annotation_id(&self) -> u32 {
        self.annotations.iter().map(|a| a.id).max().unwrap_or(0)
    }

    /// Look up an annotation store entry by id.
    pub fn annotation(&self, id: u32) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }
}

/// Slice a string by character offsets.
///
/// `begin`/`end` are character positions, clamped to the string's length.
pub(crate) fn slice_chars(text: &str, begin: usize, end: usize) -> &str {
    let mut byte_begin = text.len();
    let mut byte_end = text.len();
    let positions = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    for (pos, byte) in positions.enumerate() {
        if pos == begin {
            byte_begin = byte;
        }
        if pos == end {
            byte_end = byte;
            break;
        }
    }
    &text[byte_begin..byte_end]
}
