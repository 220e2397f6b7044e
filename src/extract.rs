//! Top-level extraction entry points.
//!
//! Two calls matter to most users: [`extract`] recovers raw text plus a
//! provenance tag, and [`parse`] chains the full pipeline —
//! extract → clean → segment — into one [`ParsedResume`].
//!
//! The file on disk and the *declared* filename are separate arguments on
//! purpose: upload handlers stage files under generated temp names, so the
//! user's extension only survives in the original filename. The caller owns
//! the file's lifetime on every exit path — this module never deletes
//! anything.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::{Engine, ExtractionResult, ParsedResume};
use crate::pipeline::input::{resolve_local, DocumentFormat};
use crate::pipeline::{clean, docx, pdf, segment};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Extract raw text from a resume document.
///
/// Routes by the declared filename's extension: `.pdf` goes through the
/// extraction cascade, `.docx`/`.doc` through direct paragraph extraction.
///
/// # Errors
/// * [`ExtractError::UnsupportedFormat`] — extension outside {pdf, docx, doc}
/// * [`ExtractError::FileNotFound`] / [`ExtractError::PermissionDenied`] —
///   the staged file is unusable
/// * document/recognition errors when every applicable strategy fails
pub fn extract(
    path: impl AsRef<Path>,
    filename: &str,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    let path = path.as_ref();
    let start = Instant::now();

    let format = DocumentFormat::from_filename(filename)?;
    resolve_local(path, format)?;

    debug!("extracting {} as {:?}", filename, format);

    let result = match format {
        DocumentFormat::Pdf => pdf::extract_pdf(path, config)?,
        DocumentFormat::Docx => ExtractionResult {
            text: docx::extract_docx(path)?,
            engine: Engine::Docx,
        },
    };

    info!(
        "extracted '{}' via {} in {}ms ({} bytes)",
        filename,
        result.engine,
        start.elapsed().as_millis(),
        result.text.len()
    );

    Ok(result)
}

/// Normalise raw extracted text. Re-exported here so the three pipeline
/// operations live on one surface; see [`crate::pipeline::clean`] for the
/// rule list.
pub fn clean(text: &str) -> String {
    clean::clean_text(text)
}

/// Split cleaned text into the six canonical sections; see
/// [`crate::pipeline::segment`].
pub fn segment(cleaned: &str) -> segment::Sections {
    segment::split_sections(cleaned)
}

/// Run the full pipeline: extract, clean, and segment one resume.
///
/// This is what a request handler calls per upload. The result carries the
/// engine tag for auditing, the cleaned full text, and the section mapping.
/// An empty or near-empty `text` is not an error here — rejecting results
/// below a useful length is the caller's policy.
pub fn parse(
    path: impl AsRef<Path>,
    filename: &str,
    config: &ExtractionConfig,
) -> Result<ParsedResume, ExtractError> {
    let raw = extract(path, filename, config)?;
    let text = clean(&raw.text);
    let sections = segment(&text);

    Ok(ParsedResume {
        engine: raw.engine,
        text,
        sections,
    })
}
