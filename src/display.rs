//! Debug rendering of an annotated document.
//!
//! One line per paragraph; placed annotations render as `«id:…»` around
//! the covered text. Reference tokens are invisible, like in the real
//! document. Used by snapshot tests and handy in debugging sessions.

use crate::document::{Document, ParagraphChild};

pub struct DocumentDisplay<'a> {
    document: &'a Document,
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(document: &'a Document) -> Self {
        DocumentDisplay { document }
    }
}

impl std::fmt::Display for DocumentDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, paragraph) in self.document.paragraphs.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for child in &paragraph.children {
                match child {
                    ParagraphChild::Run(run) => write!(f, "{}", run.text)?,
                    ParagraphChild::MarkerStart(id) => write!(f, "«{}:", id)?,
                    ParagraphChild::MarkerEnd(_) => write!(f, "»")?,
                    ParagraphChild::MarkerRef(_) => {}
                }
            }
        }
        Ok(())
    }
}
