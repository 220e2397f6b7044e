//! # resume2text
//!
//! Extract, clean, and segment resume text from PDF and DOCX files.
//!
//! ## Why this crate?
//!
//! Resumes arrive as hostile input: PDFs with broken font encodings that
//! extract into confetti ("Applic at ion"), scans with no text layer at all,
//! Word exports full of tab runs and glued-on bullets. No single extraction
//! backend handles all of them, so this crate layers three — structural,
//! layout-aware, and OCR — behind a statistical garbage detector, then
//! normalises the text and splits it into six canonical sections a
//! downstream evaluator can rely on.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume file
//!  │
//!  ├─ 1. Detect   route by declared filename extension (pdf / docx)
//!  ├─ 2. Extract  PDF: structural → layout-aware → OCR cascade,
//!  │              gated by the shattered-text heuristic
//!  │              DOCX: direct paragraph extraction
//!  ├─ 3. Clean    whitespace, bullets, pipes, hyphen line-wraps
//!  └─ 4. Segment  heading-driven split into six canonical sections
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume2text::{parse, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     let resume = parse("uploads/3f2a.pdf", "jane_doe.pdf", &config)?;
//!     println!("read via {}", resume.engine);
//!     println!("skills: {}", resume.sections.skills);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume2text` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume2text = { version = "0.2", default-features = false }
//! ```
//!
//! ## Runtime requirements
//!
//! The OCR fallback shells out to the `tesseract` binary and renders pages
//! through the system pdfium library. Documents whose cheap extraction
//! passes succeed never touch either.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ExtractionConfig, ExtractionConfigBuilder, QualityThresholds, DEFAULT_MIN_TOKENS,
    DEFAULT_OCR_DPI, DEFAULT_SHORT_TOKEN_RATIO,
};
pub use error::ExtractError;
pub use extract::{clean, extract, parse, segment};
pub use output::{Engine, ExtractionResult, ParsedResume};
pub use pipeline::input::DocumentFormat;
pub use pipeline::segment::{SectionKey, Sections};
