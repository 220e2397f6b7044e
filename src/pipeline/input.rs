//! Input handling: format detection and local-file validation.
//!
//! Format is decided by the *declared* filename, not the on-disk path: the
//! calling layer stages uploads under generated temp names, so the original
//! filename is the only place the user's extension survives. Detection is
//! pure; the I/O checks live in [`resolve_local`] so the dispatcher can give
//! a precise error (missing vs. unreadable vs. wrong magic) before any
//! parser touches the file.

use crate::error::ExtractError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Supported document formats, keyed by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.pdf` — goes through the extraction cascade.
    Pdf,
    /// `.docx` or legacy `.doc` — direct paragraph extraction.
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a filename's extension, case-insensitively.
    ///
    /// Anything outside `{pdf, docx, doc}` is an [`ExtractError::UnsupportedFormat`]
    /// naming the offending extension. No side effects.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = filename
            .rsplit('.')
            .next()
            .filter(|ext| !ext.is_empty() && *ext != filename)
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat { extension }),
        }
    }
}

/// Validate that `path` exists and is readable, and that a PDF actually
/// starts with the `%PDF` magic bytes.
///
/// The magic check catches the common case of an arbitrary file renamed to
/// `.pdf` — without it, pdfium fails later with a far less useful message.
pub fn resolve_local(path: &Path, format: DocumentFormat) -> Result<(), ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            if format == DocumentFormat::Pdf {
                let mut magic = [0u8; 4];
                if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                    return Err(ExtractError::CorruptDocument {
                        path: path.to_path_buf(),
                        detail: format!("not a PDF, first bytes: {magic:?}"),
                    });
                }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ExtractError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("resolved local document: {}", path.display());
    Ok(())
}
