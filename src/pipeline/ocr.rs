//! OCR fallback: rasterise PDF pages via pdfium and recognise them with
//! Tesseract.
//!
//! ## Why an external binary?
//!
//! Tesseract's C API bindings drag a native build dependency into every
//! consumer; the CLI is installed everywhere the engine is, takes a PNG path
//! and writes plain text to stdout, and isolates crashes in a child process.
//! The binary location is a config field, not an environment lookup, so
//! tests and multi-tenant callers can pin their own.
//!
//! ## Failure policy
//!
//! This module is the cascade's floor. Its output is accepted however poor,
//! and its *failures* are never caught: if the renderer or the engine cannot
//! run, there is nothing left to fall back to, so the error propagates to
//! the caller as-is.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use pdfium_render::prelude::*;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Base resolution of PDF user space, in points per inch.
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Recognise the text of a PDF by rendering each page and running OCR.
///
/// Pages are processed sequentially. Each page is rendered at
/// `config.dpi / 72` scale into an RGB raster, written as a PNG into a
/// scratch directory, and fed to Tesseract. Per-page output is trimmed,
/// empty pages are skipped, and the non-empty results are joined with one
/// blank line. Honors `config.max_pages` as a hard page cap.
pub fn recognize_pdf(path: &Path, config: &ExtractionConfig) -> Result<String, ExtractError> {
    let pdfium = Pdfium::default();

    let document =
        pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractError::CorruptDocument {
                path: path.to_path_buf(),
                detail: format!("{e:?}"),
            })?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    let page_count = config
        .max_pages
        .map_or(total_pages, |cap| cap.min(total_pages));

    let scale = config.dpi as f32 / PDF_POINTS_PER_INCH;
    let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);

    let scratch = tempfile::tempdir()
        .map_err(|e| ExtractError::Internal(format!("scratch dir: {e}")))?;

    info!(
        "OCR fallback: {} of {} pages at {} dpi",
        page_count, total_pages, config.dpi
    );

    let mut parts: Vec<String> = Vec::with_capacity(page_count);

    for index in 0..page_count {
        let page_num = index + 1;

        let page = pages
            .get(index as u16)
            .map_err(|e| ExtractError::RasterisationFailed {
                page: page_num,
                detail: format!("{e:?}"),
            })?;

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| ExtractError::RasterisationFailed {
                    page: page_num,
                    detail: format!("{e:?}"),
                })?;

        let raster = bitmap.as_image().to_rgb8();
        let png_path = scratch.path().join(format!("page-{page_num:04}.png"));
        raster
            .save(&png_path)
            .map_err(|e| ExtractError::RasterisationFailed {
                page: page_num,
                detail: format!("PNG encoding failed: {e}"),
            })?;

        debug!(
            "page {}: rendered {}x{} px",
            page_num,
            raster.width(),
            raster.height()
        );

        let text = run_tesseract(&png_path, page_num, config)?;
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
    }

    Ok(parts.join("\n\n"))
}

/// Run the Tesseract binary on one page image and capture its stdout.
fn run_tesseract(
    image_path: &Path,
    page_num: usize,
    config: &ExtractionConfig,
) -> Result<String, ExtractError> {
    let cmd = config
        .tesseract_cmd
        .as_deref()
        .unwrap_or_else(|| Path::new("tesseract"));

    let output = Command::new(cmd)
        .arg(image_path)
        .arg("stdout")
        .arg("-l")
        .arg(&config.tesseract_lang)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractError::OcrUnavailable {
                    cmd: cmd.display().to_string(),
                    detail: e.to_string(),
                }
            } else {
                ExtractError::OcrFailed {
                    page: page_num,
                    detail: e.to_string(),
                }
            }
        })?;

    if !output.status.success() {
        return Err(ExtractError::OcrFailed {
            page: page_num,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
