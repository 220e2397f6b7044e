//! Pipeline stages for resume text extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the OCR backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ pdf / docx ──▶ clean ──▶ segment
//! (detect)   (cascade or    (normalise)  (six canonical
//!             paragraphs)                 sections)
//! ```
//!
//! 1. [`input`]   — detect the format from the declared filename and
//!    validate the on-disk file
//! 2. [`pdf`]     — the extraction cascade: fast structural, layout-aware,
//!    then the OCR floor; gated by [`quality`]
//! 3. [`quality`] — the shattered-text heuristic that decides when a cheap
//!    extraction pass has produced garbage
//! 4. [`ocr`]     — rasterise pages via pdfium and run Tesseract on each;
//!    the guaranteed-fallback path
//! 5. [`docx`]    — direct paragraph extraction from `word/document.xml`;
//!    no fallback exists for this format
//! 6. [`clean`]   — deterministic whitespace/bullet/hyphen normalisation
//! 7. [`segment`] — heading-driven split into the six canonical sections

pub mod clean;
pub mod docx;
pub mod input;
pub mod ocr;
pub mod pdf;
pub mod quality;
pub mod segment;
