//! CLI binary for resume2text.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use resume2text::{parse, ExtractionConfig, SectionKey};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Segment a resume and print the sections
  resume2text jane_doe.pdf

  # Machine-readable output for a pipeline
  resume2text --json jane_doe.pdf > parsed.json

  # Staged upload: the on-disk name and the declared name differ
  resume2text uploads/3f2a91 --filename jane_doe.docx

  # Bound OCR latency on scanned documents
  resume2text scan.pdf --max-pages 3 --dpi 150

  # Point at a non-PATH tesseract build
  TESSERACT_CMD=/opt/tesseract/bin/tesseract resume2text scan.pdf

ENGINE TAGS (printed with --verbose or in --json output):
  pdf:fast     structural extraction from the content streams
  pdf:layout   layout-aware extraction (glyph positions)
  pdf:ocr      rendered pages + Tesseract — the fallback of last resort
  docx         direct paragraph extraction

SETUP:
  OCR fallback needs the tesseract binary (apt install tesseract-ocr)
  and a pdfium shared library visible to the loader. Resumes that extract
  cleanly never touch either.
"#;

/// Extract, clean, and segment resume text from PDF and DOCX files.
#[derive(Parser, Debug)]
#[command(
    name = "resume2text",
    version,
    about = "Extract, clean, and segment resume text from PDF and DOCX files",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the resume file.
    input: PathBuf,

    /// Declared original filename, when it differs from the on-disk name
    /// (staged uploads). Defaults to the input path's filename.
    #[arg(long)]
    filename: Option<String>,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "RESUME2TEXT_OUTPUT")]
    output: Option<PathBuf>,

    /// OCR rendering DPI (72–600).
    #[arg(long, env = "RESUME2TEXT_DPI", default_value_t = 220,
          value_parser = clap::value_parser!(u32).range(72..=600))]
    dpi: u32,

    /// Cap the number of pages the OCR fallback processes.
    #[arg(long, env = "RESUME2TEXT_MAX_PAGES")]
    max_pages: Option<usize>,

    /// Path to the tesseract binary (default: `tesseract` on PATH).
    #[arg(long, env = "TESSERACT_CMD")]
    tesseract_cmd: Option<PathBuf>,

    /// Tesseract language pack.
    #[arg(long, env = "RESUME2TEXT_LANG", default_value = "eng")]
    lang: String,

    /// Token floor below which the quality heuristic never rejects text.
    #[arg(long, env = "RESUME2TEXT_MIN_TOKENS", default_value_t = 40)]
    min_tokens: usize,

    /// Short-token fraction at which extracted text counts as shattered.
    #[arg(long, env = "RESUME2TEXT_SHORT_TOKEN_RATIO", default_value_t = 0.35)]
    short_token_ratio: f64,

    /// Output the parsed resume as JSON instead of labelled sections.
    #[arg(long, env = "RESUME2TEXT_JSON")]
    json: bool,

    /// Print the cleaned full text instead of sections.
    #[arg(long)]
    full_text: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "RESUME2TEXT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "RESUME2TEXT_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Config ───────────────────────────────────────────────────────────
    let mut builder = ExtractionConfig::builder()
        .dpi(cli.dpi)
        .tesseract_lang(cli.lang.as_str())
        .min_tokens(cli.min_tokens)
        .short_token_ratio(cli.short_token_ratio);
    if let Some(pages) = cli.max_pages {
        builder = builder.max_pages(pages);
    }
    if let Some(ref cmd) = cli.tesseract_cmd {
        builder = builder.tesseract_cmd(cmd);
    }
    let config = builder.build().context("invalid configuration")?;

    // ── Run the pipeline ─────────────────────────────────────────────────
    let filename = match cli.filename {
        Some(ref name) => name.clone(),
        None => cli
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("cannot derive a filename from {:?}", cli.input))?,
    };

    let resume = parse(&cli.input, &filename, &config)
        .with_context(|| format!("failed to parse '{filename}'"))?;

    // ── Render output ────────────────────────────────────────────────────
    let rendered = if cli.json {
        serde_json::to_string_pretty(&resume).context("serialising result")?
    } else if cli.full_text {
        resume.text.clone()
    } else {
        render_sections(&resume)
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
    }

    Ok(())
}

/// Human-readable section listing: upper-case header per canonical key,
/// "(empty)" for sections the resume did not fill.
fn render_sections(resume: &resume2text::ParsedResume) -> String {
    let mut out = String::new();
    out.push_str(&format!("# engine: {}\n", resume.engine));
    for key in SectionKey::ALL {
        let block = resume.sections.get(key);
        out.push_str(&format!("\n== {} ==\n", key.as_str().to_uppercase()));
        if block.is_empty() {
            out.push_str("(empty)\n");
        } else {
            out.push_str(block);
            out.push('\n');
        }
    }
    out
}
