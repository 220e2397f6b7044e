//! Configuration types for resume text extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`], built
//! via its [`ExtractionConfigBuilder`]. Every knob that the original
//! deployment read from ambient environment variables (OCR binary location,
//! heuristic thresholds) is an explicit field here, so tests can probe
//! boundary values without mutating the process environment and two runs can
//! be diffed by diffing their configs.
//!
//! The heuristic magic numbers live in named constants next to the fields
//! they default — never inlined at the call sites.

use crate::error::ExtractError;
use std::fmt;
use std::path::PathBuf;

/// Default rendering resolution for the OCR fallback, in DPI.
///
/// 220 DPI is high enough for Tesseract to read the 9–11 pt body text that
/// resumes are typically set in, without ballooning render time the way
/// 300+ DPI does on multi-page documents.
pub const DEFAULT_OCR_DPI: u32 = 220;

/// Minimum token count before the shattered-text heuristic will reject text.
///
/// Below this floor there is too little signal to judge: a short resume with
/// a handful of tokens must not be bounced to OCR just because half of them
/// are initials or state codes.
pub const DEFAULT_MIN_TOKENS: usize = 40;

/// Fraction of short tokens at or above which extracted text counts as
/// shattered.
pub const DEFAULT_SHORT_TOKEN_RATIO: f64 = 0.35;

/// Thresholds for the shattered-text quality heuristic.
///
/// Kept as its own struct so the heuristic function can be exercised in
/// isolation, and so a caller tuning one threshold does not need to thread
/// the whole [`ExtractionConfig`] through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityThresholds {
    /// Token count below which text is always judged legible.
    pub min_tokens: usize,
    /// Short-token fraction at or above which text is judged shattered.
    pub short_token_ratio: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_tokens: DEFAULT_MIN_TOKENS,
            short_token_ratio: DEFAULT_SHORT_TOKEN_RATIO,
        }
    }
}

/// Configuration for a resume extraction run.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use resume2text::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .dpi(300)
///     .max_pages(4)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Rendering DPI for the OCR fallback. Range: 72–600. Default: 220.
    ///
    /// Pages are rendered at `scale = dpi / 72` relative to their PDF point
    /// size. Raise this for resumes exported with very small fonts; lower it
    /// when OCR latency matters more than accuracy.
    pub dpi: u32,

    /// Cap on the number of pages the OCR fallback will process.
    /// `None` (default) processes every page.
    ///
    /// OCR is the one genuinely slow stage — seconds per page at high DPI —
    /// and a resume past page 3 rarely changes the outcome. Callers wanting
    /// bounded latency set this instead of racing the call against a timer.
    pub max_pages: Option<usize>,

    /// Path to the Tesseract binary. `None` (default) uses `tesseract`
    /// from `PATH`.
    pub tesseract_cmd: Option<PathBuf>,

    /// Language pack passed to Tesseract via `-l`. Default: `"eng"`.
    pub tesseract_lang: String,

    /// Thresholds for the shattered-text heuristic that gates the cascade.
    pub quality: QualityThresholds,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_OCR_DPI,
            max_pages: None,
            tesseract_cmd: None,
            tesseract_lang: "eng".to_string(),
            quality: QualityThresholds::default(),
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("dpi", &self.dpi)
            .field("max_pages", &self.max_pages)
            .field("tesseract_cmd", &self.tesseract_cmd)
            .field("tesseract_lang", &self.tesseract_lang)
            .field("quality", &self.quality)
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn max_pages(mut self, pages: usize) -> Self {
        self.config.max_pages = Some(pages.max(1));
        self
    }

    pub fn tesseract_cmd(mut self, cmd: impl Into<PathBuf>) -> Self {
        self.config.tesseract_cmd = Some(cmd.into());
        self
    }

    pub fn tesseract_lang(mut self, lang: impl Into<String>) -> Self {
        self.config.tesseract_lang = lang.into();
        self
    }

    pub fn min_tokens(mut self, floor: usize) -> Self {
        self.config.quality.min_tokens = floor;
        self
    }

    pub fn short_token_ratio(mut self, ratio: f64) -> Self {
        self.config.quality.short_token_ratio = ratio;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(ExtractError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if !(0.0..=1.0).contains(&c.quality.short_token_ratio) {
            return Err(ExtractError::InvalidConfig(format!(
                "short_token_ratio must be within 0.0–1.0, got {}",
                c.quality.short_token_ratio
            )));
        }
        if c.tesseract_lang.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "tesseract_lang must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
