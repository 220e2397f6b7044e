//! Error types for the resume2text library.
//!
//! One deliberate asymmetry runs through this taxonomy: a *strategy* failing
//! inside the PDF cascade is not an error. The cheap extraction passes are
//! allowed to produce garbage or fail outright — the next strategy simply
//! takes over, and only the floor recognition step reports failure. The
//! variants below therefore describe the situations where the pipeline as a
//! whole cannot continue:
//!
//! * bad input (missing file, unknown extension, unreadable document)
//! * the recognition engine cannot run (missing binary, failed render)
//!
//! Everything the caller can fix is spelled out in the message, including
//! the fix. "Result too short to be useful" is intentionally absent: the
//! core returns whatever text it recovered, even an empty string, and leaves
//! that judgment to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the resume2text library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The declared filename carries an extension outside the supported set.
    #[error("Unsupported file type '.{extension}'. Upload a PDF or DOCX resume.")]
    UnsupportedFormat { extension: String },

    /// Input file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Document errors ───────────────────────────────────────────────────
    /// The document parser cannot read the file at all (corrupt container,
    /// truncated content, wrong magic bytes).
    #[error("Document '{path}' could not be parsed: {detail}")]
    CorruptDocument { path: PathBuf, detail: String },

    /// pdfium returned an error while rendering a specific page for OCR.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    // ── Recognition errors ────────────────────────────────────────────────
    /// The OCR binary could not be launched at all.
    #[error(
        "OCR engine '{cmd}' could not be launched: {detail}\n\
         Install tesseract (e.g. `apt install tesseract-ocr`) or point\n\
         ExtractionConfig::tesseract_cmd at the binary."
    )]
    OcrUnavailable { cmd: String, detail: String },

    /// The OCR binary ran but exited with a failure status.
    #[error("OCR failed on page {page}: {detail}")]
    OcrFailed { page: usize, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
