//! Text normalisation: deterministic cleanup of extracted resume text.
//!
//! ## Why is cleaning necessary?
//!
//! Every extraction backend leaves its own residue. Structural PDF
//! extraction emits stray control bytes and non-breaking spaces; OCR output
//! arrives with ragged line endings and re-hyphenated words
//! ("frame-\nworks"); word-processor exports love tab runs and `•` bullets
//! glued to the preceding sentence. The segmenter downstream matches heading
//! *lines*, so it needs text in one canonical whitespace form first.
//!
//! This module applies cheap, deterministic regex/string rules that fix
//! extraction residue without touching content. Each rule is a pure
//! function (`&str → String`) and independently testable.
//!
//! ## Rule Order
//!
//! The order is load-bearing. Per-line trimming must run *before* the
//! hyphen-rejoin and blank-line passes: trimming a trailing space can expose
//! a fresh `-\n` seam or turn a line of spaces into a new blank line, and
//! running the later rules first would leave those seams for a second
//! cleaning pass to find. With this order the whole function is idempotent —
//! `clean(clean(s)) == clean(s)` — which the tests assert directly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all normalisation rules to raw extracted text.
///
/// Total function: no failure mode, empty input yields an empty string.
///
/// Rules (applied in order):
/// 1. Carriage returns → newline; tabs → single space
/// 2. Drop characters that are neither printable nor newline
/// 3. Normalise pipe separators (`a|b`, `a | b`) to a single `" | "`
/// 4. Normalise `•` bullets so each starts a fresh line as `"• "`
/// 5. Collapse runs of space / non-breaking space into one space
/// 6. Trim every line
/// 7. Rejoin hyphenated line-wraps (`frame-\nworks` → `frameworks`)
/// 8. Collapse 3+ consecutive newlines down to 2
/// 9. Trim the whole text
pub fn clean_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let s = normalise_line_endings(input);
    let s = strip_nonprintable(&s);
    let s = normalise_pipes(&s);
    let s = normalise_bullets(&s);
    let s = collapse_spaces(&s);
    let s = trim_lines(&s);
    let s = rejoin_hyphen_wraps(&s);
    let s = collapse_blank_lines(&s);
    s.trim().to_string()
}

// ── Rule 1: Line endings and tabs ────────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', " ")
}

// ── Rule 2: Strip non-printable characters ───────────────────────────────────
//
// Scanned PDFs leak control bytes into the text layer, and exports sprinkle
// zero-width joiners, soft hyphens, and BOMs. Everything that is neither
// visible nor a newline goes; the soft hyphen in particular must go before
// the hyphen-rejoin rule or it would hide real wrap seams.

const INVISIBLES: [char; 6] = [
    '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}',
];

fn strip_nonprintable(input: &str) -> String {
    input
        .chars()
        .filter(|&ch| (ch == '\n' || !ch.is_control()) && !INVISIBLES.contains(&ch))
        .collect()
}

// ── Rule 3: Pipe separators ──────────────────────────────────────────────────
//
// Resumes use pipes as field separators ("Boston | Remote | 2022"); the
// extractors emit them with anything from zero to a newline of surrounding
// whitespace. One canonical " | " keeps the segments readable and stable.
// Runs before the space-collapse pass: back-to-back pipes ("a||b") expand to
// overlapping " | " insertions whose doubled spaces the collapse then folds.

static RE_PIPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").expect("pipe pattern compiles"));

fn normalise_pipes(input: &str) -> String {
    RE_PIPE.replace_all(input, " | ").into_owned()
}

// ── Rule 4: Bullets ──────────────────────────────────────────────────────────

static RE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*•\s*").expect("bullet pattern compiles"));

fn normalise_bullets(input: &str) -> String {
    RE_BULLET.replace_all(input, "\n• ").into_owned()
}

// ── Rule 5: Collapse space runs ──────────────────────────────────────────────

static RE_SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \u{00A0}]+").expect("space-run pattern compiles"));

fn collapse_spaces(input: &str) -> String {
    RE_SPACE_RUN.replace_all(input, " ").into_owned()
}

// ── Rule 6: Trim every line ──────────────────────────────────────────────────

fn trim_lines(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Rule 7: Rejoin hyphenated line-wraps ─────────────────────────────────────
//
// Only single-letter-bounded breaks qualify: "frame-\nworks" is a wrap,
// "well - known" is prose and must survive untouched. Runs to a fixed point:
// a rejoined line can end in a fresh wrap ("multi-\nline-\nword"), and one
// replace_all pass cannot see a seam whose left letter it just consumed.

static RE_HYPHEN_WRAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)-\n(\w)").expect("hyphen-wrap pattern compiles"));

fn rejoin_hyphen_wraps(input: &str) -> String {
    let mut text = input.to_string();
    loop {
        let next = RE_HYPHEN_WRAP.replace_all(&text, "${1}${2}").into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

// ── Rule 8: Collapse blank-line runs ─────────────────────────────────────────

static RE_BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-run pattern compiles"));

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_RUN.replace_all(input, "\n\n").into_owned()
}

// ── Tests ────────────────────────────────────────────────────────────────────
