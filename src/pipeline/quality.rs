//! The shattered-text heuristic that gates the PDF cascade.
//!
//! ## What "shattered" means
//!
//! A PDF with a broken font program can extract into text that *looks* valid
//! but is fragmented mid-word — "Applic at ion", "F as t" — because the
//! glyph-to-character mapping is inconsistent. Spell-checking or dictionary
//! lookups would be overkill; the give-away is purely statistical: shattered
//! text has an implausible share of very short tokens.
//!
//! ## The rule
//!
//! Tokenise on whitespace (newlines count as spaces). With fewer than
//! [`QualityThresholds::min_tokens`] tokens there is too little signal to
//! judge, so the text passes — rejecting a four-line resume because its
//! tokens happen to be short would send perfectly good text to OCR for
//! nothing. Otherwise the text is shattered when the fraction of tokens of
//! at most [`SHORT_TOKEN_LEN`] characters reaches
//! [`QualityThresholds::short_token_ratio`].
//!
//! Empty or whitespace-only input is always shattered: it forces the
//! cascade onward to a strategy that may actually find something.

use crate::config::QualityThresholds;

/// Token length at or below which a token counts as "short".
///
/// Two characters covers the fragments a broken cmap typically produces
/// ("at", "F", "as") while leaving common English stop words ("the", "and")
/// on the legible side.
pub const SHORT_TOKEN_LEN: usize = 2;

/// Judge whether extracted text looks shattered (over-tokenised).
///
/// Returns `true` when the text should be rejected and the next extraction
/// strategy tried.
pub fn looks_shattered(text: &str, thresholds: &QualityThresholds) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < thresholds.min_tokens {
        return false;
    }

    let short = tokens
        .iter()
        .filter(|t| t.chars().count() <= SHORT_TOKEN_LEN)
        .count();
    let ratio = short as f64 / tokens.len() as f64;

    ratio >= thresholds.short_token_ratio
}
