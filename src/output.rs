//! Output types: extraction results and their provenance tags.

use crate::pipeline::segment::Sections;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extraction strategy produced a result.
///
/// Purely diagnostic: callers log or persist the tag to audit how a given
/// resume was read, but nothing downstream branches on it. The serialized
/// string values are stable and part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Engine {
    /// Structural extraction straight from the PDF content streams.
    #[serde(rename = "pdf:fast")]
    PdfFast,
    /// Layout-aware extraction with spacing reconstructed from glyph
    /// positions.
    #[serde(rename = "pdf:layout")]
    PdfLayout,
    /// Optical recognition over rasterised pages — the unconditional floor.
    #[serde(rename = "pdf:ocr")]
    PdfOcr,
    /// Direct paragraph extraction from a word-processor document.
    #[serde(rename = "docx")]
    Docx,
}

impl Engine {
    /// Stable string form, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::PdfFast => "pdf:fast",
            Engine::PdfLayout => "pdf:layout",
            Engine::PdfOcr => "pdf:ocr",
            Engine::Docx => "docx",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text recovered from a document, plus which strategy produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted text, untouched by the cleaner. May be empty: the OCR floor
    /// returns whatever it found, and the "too short to use" policy belongs
    /// to the caller.
    pub text: String,
    /// Strategy that produced `text`.
    pub engine: Engine,
}

/// The fully processed form of one resume: cleaned text plus its canonical
/// section mapping. This is what a caller persists or feeds to evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Strategy that recovered the underlying text.
    pub engine: Engine,
    /// Cleaned full text (see [`crate::pipeline::clean`]).
    pub text: String,
    /// Canonical six-section mapping of `text`.
    pub sections: Sections,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_tags_are_stable() {
        assert_eq!(Engine::PdfFast.as_str(), "pdf:fast");
        assert_eq!(Engine::PdfLayout.as_str(), "pdf:layout");
        assert_eq!(Engine::PdfOcr.as_str(), "pdf:ocr");
        assert_eq!(Engine::Docx.as_str(), "docx");
    }

    #[test]
    fn engine_serialises_to_tag_string() {
        assert_eq!(serde_json::to_string(&Engine::PdfOcr).unwrap(), "\"pdf:ocr\"");
        let back: Engine = serde_json::from_str("\"pdf:layout\"").unwrap();
        assert_eq!(back, Engine::PdfLayout);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Engine::Docx.to_string(), "docx");
    }
}
