//! The PDF extraction cascade.
//!
//! ## Why a cascade?
//!
//! PDF text extraction cannot be trusted blindly. A document with intact
//! font metadata yields clean text from a structural read in milliseconds; a
//! document with a broken glyph map yields text that *parses* but reads as
//! confetti ("Applic at ion"); a scanned document yields nothing at all.
//! The strategies are therefore ordered cheapest-first and each result is
//! put through the shattered-text heuristic before being accepted:
//!
//! 1. **Structural** — read text straight from the content streams
//!    (`pdf-extract`). Fast, right most of the time.
//! 2. **Layout-aware** — re-extract via pdfium, which reconstructs spacing
//!    from glyph positions. Slower, survives some encodings the structural
//!    pass mangles.
//! 3. **Recognition** — rasterise and OCR every page. Expensive, but works
//!    on anything that renders; accepted unconditionally as the floor.
//!
//! A strategy that errors is treated exactly like one that returned
//! unusable text: logged and silently superseded by the next. Only the
//! floor's failure is the document's failure.

use crate::config::{ExtractionConfig, QualityThresholds};
use crate::error::ExtractError;
use crate::output::{Engine, ExtractionResult};
use crate::pipeline::{ocr, quality};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Extract the best-available text from a PDF.
pub fn extract_pdf(
    path: &Path,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    let strategies: Vec<(Engine, Strategy<'_>)> = vec![
        (Engine::PdfFast, Box::new(|| structural_text(path))),
        (Engine::PdfLayout, Box::new(|| layout_text(path))),
    ];

    if let Some((text, engine)) = first_legible(strategies, &config.quality) {
        info!("accepted {} extraction ({} bytes)", engine, text.len());
        return Ok(ExtractionResult { text, engine });
    }

    // Floor: whatever recognition produces is final, even empty text.
    let text = ocr::recognize_pdf(path, config)?;
    info!("accepted {} extraction ({} bytes)", Engine::PdfOcr, text.len());
    Ok(ExtractionResult {
        text,
        engine: Engine::PdfOcr,
    })
}

/// A deferred extraction attempt. Boxed so the cascade stays a plain ordered
/// list and later strategies are never evaluated once an earlier one is
/// accepted.
type Strategy<'a> = Box<dyn FnOnce() -> Result<String, ExtractError> + 'a>;

/// Run strategies in order; the first non-empty result that passes the
/// legibility check wins. `None` when every strategy errored or produced
/// empty/shattered text.
fn first_legible(
    strategies: Vec<(Engine, Strategy<'_>)>,
    thresholds: &QualityThresholds,
) -> Option<(String, Engine)> {
    for (engine, strategy) in strategies {
        match strategy() {
            Ok(text) if !text.is_empty() && !quality::looks_shattered(&text, thresholds) => {
                return Some((text, engine));
            }
            Ok(_) => {
                debug!("{engine} produced empty or shattered text, trying next strategy");
            }
            Err(e) => {
                warn!("{engine} failed ({e}), trying next strategy");
            }
        }
    }
    None
}

/// Per-page join shared by every strategy: trim each page, drop empty
/// pages, separate the rest with one blank line.
fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .filter_map(|page| {
            let trimmed = page.as_ref().trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Strategy 1: structural extraction from the content streams.
fn structural_text(path: &Path) -> Result<String, ExtractError> {
    let pages =
        pdf_extract::extract_text_by_pages(path).map_err(|e| ExtractError::CorruptDocument {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    Ok(join_pages(pages))
}

/// Strategy 2: layout-aware extraction via pdfium (spacing reconstructed
/// from glyph positions).
fn layout_text(path: &Path) -> Result<String, ExtractError> {
    let pdfium = Pdfium::default();
    let document =
        pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractError::CorruptDocument {
                path: path.to_path_buf(),
                detail: format!("{e:?}"),
            })?;

    let mut pages_text = Vec::new();
    for page in document.pages().iter() {
        let text = page
            .text()
            .map_err(|e| ExtractError::CorruptDocument {
                path: path.to_path_buf(),
                detail: format!("{e:?}"),
            })?
            .all();
        pages_text.push(text);
    }

    Ok(join_pages(pages_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn thresholds() -> QualityThresholds {
        QualityThresholds::default()
    }

    fn legible() -> String {
        "Seasoned backend engineer with a decade of experience building \
         resilient ingestion pipelines, search services, and storage layers \
         for document heavy products across several industries and teams"
            .to_string()
    }

    fn shattered() -> String {
        "Ap pl ic at io n F as t tr ac k ".repeat(8)
    }

    #[test]
    fn first_legible_short_circuits() {
        let second_ran = Cell::new(false);
        let strategies: Vec<(Engine, Strategy<'_>)> = vec![
            (Engine::PdfFast, Box::new(|| Ok(legible()))),
            (
                Engine::PdfLayout,
                Box::new(|| {
                    second_ran.set(true);
                    Ok(legible())
                }),
            ),
        ];

        let (text, engine) = first_legible(strategies, &thresholds()).unwrap();
        assert_eq!(engine, Engine::PdfFast);
        assert_eq!(text, legible());
        assert!(!second_ran.get(), "later strategy must not be invoked");
    }

    #[test]
    fn shattered_text_falls_through() {
        let strategies: Vec<(Engine, Strategy<'_>)> = vec![
            (Engine::PdfFast, Box::new(|| Ok(shattered()))),
            (Engine::PdfLayout, Box::new(|| Ok(legible()))),
        ];

        let (_, engine) = first_legible(strategies, &thresholds()).unwrap();
        assert_eq!(engine, Engine::PdfLayout);
    }

    #[test]
    fn empty_text_falls_through() {
        let strategies: Vec<(Engine, Strategy<'_>)> = vec![
            (Engine::PdfFast, Box::new(|| Ok(String::new()))),
            (Engine::PdfLayout, Box::new(|| Ok(legible()))),
        ];

        let (_, engine) = first_legible(strategies, &thresholds()).unwrap();
        assert_eq!(engine, Engine::PdfLayout);
    }

    #[test]
    fn strategy_error_falls_through() {
        let strategies: Vec<(Engine, Strategy<'_>)> = vec![
            (
                Engine::PdfFast,
                Box::new(|| {
                    Err(ExtractError::Internal("simulated parser crash".into()))
                }),
            ),
            (Engine::PdfLayout, Box::new(|| Ok(legible()))),
        ];

        let (_, engine) = first_legible(strategies, &thresholds()).unwrap();
        assert_eq!(engine, Engine::PdfLayout);
    }

    #[test]
    fn exhausted_cascade_is_none() {
        let strategies: Vec<(Engine, Strategy<'_>)> = vec![
            (Engine::PdfFast, Box::new(|| Ok(shattered()))),
            (Engine::PdfLayout, Box::new(|| Ok(String::new()))),
        ];

        assert!(first_legible(strategies, &thresholds()).is_none());
    }

    #[test]
    fn join_pages_trims_and_separates() {
        let joined = join_pages(["  page one  ", "", "   ", "page two"]);
        assert_eq!(joined, "page one\n\npage two");
    }

    #[test]
    fn join_pages_of_nothing_is_empty() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
        assert_eq!(join_pages(["", "  "]), "");
    }
}
