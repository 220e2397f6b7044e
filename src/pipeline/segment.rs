//! Heading-driven segmentation of cleaned resume text.
//!
//! ## Approach
//!
//! No semantic understanding — a line is a heading if, once trimmed, its
//! entire content is one of the known synonyms, optionally followed by a
//! single colon or dash. Candidates embedded mid-sentence ("my skills
//! include…") never match because the pattern is anchored to the whole line.
//!
//! All synonym groups are compiled into one alternation so the scan is a
//! single pass; a per-group second pass then resolves each matched heading
//! to its canonical key. The groups are disjoint by construction and the
//! tests assert it: no line may resolve to two keys.
//!
//! ## Assignment
//!
//! Text before the first heading is treated as `summary` — resumes open with
//! a name/contact block and often an unlabelled pitch paragraph, and losing
//! that content would be worse than misfiling it. Each heading then owns the
//! text up to the next heading. A canonical key seen twice (two "PROJECTS"
//! blocks) appends on a new line in document order rather than overwriting.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six canonical resume sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Summary,
    Experience,
    Skills,
    Projects,
    Certifications,
    Education,
}

impl SectionKey {
    /// All keys in canonical order.
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Certifications,
        SectionKey::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
            SectionKey::Education => "education",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heading synonyms per canonical key.
///
/// Order matters twice over: it fixes both the alternation order inside the
/// combined pattern and the canonical iteration order of [`Sections`].
const SYNONYMS: [(SectionKey, &str); 6] = [
    (
        SectionKey::Summary,
        r"summary|professional\s+summary|profile|about|objective",
    ),
    (
        SectionKey::Experience,
        r"experience|work\s+experience|employment|professional\s+experience|internships?",
    ),
    (
        SectionKey::Skills,
        r"skills|technical\s+skills|technologies|tech\s+stack|tools|tools\s*&\s*technologies",
    ),
    (
        SectionKey::Projects,
        r"projects?|project\s+experience|key\s+projects|selected\s+projects|personal\s+projects|academic\s+projects",
    ),
    (
        SectionKey::Certifications,
        r"certifications?|certificates?|licenses?",
    ),
    (
        SectionKey::Education,
        r"education|academics|academic\s+background|qualifications?",
    ),
];

/// One combined pattern matching any known heading as an entire line,
/// optionally followed by a single colon or dash.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = SYNONYMS
        .iter()
        .map(|(_, pattern)| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?im)^(?P<h>{alternation})\s*[:-]?\s*$"))
        .expect("combined heading pattern compiles")
});

/// Per-key anchored patterns for resolving a matched heading to its key.
static KEY_PATTERNS: Lazy<Vec<(SectionKey, Regex)>> = Lazy::new(|| {
    SYNONYMS
        .iter()
        .map(|(key, pattern)| {
            let re = Regex::new(&format!(r"(?i)^(?:{pattern})$"))
                .expect("per-key heading pattern compiles");
            (*key, re)
        })
        .collect()
});

/// The canonical section mapping: all six keys always present, each a
/// (possibly empty, never absent) text block. Serialises with the canonical
/// key names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub summary: String,
    pub experience: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
    pub education: String,
}

impl Sections {
    /// Borrow the block for one canonical key.
    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Summary => &self.summary,
            SectionKey::Experience => &self.experience,
            SectionKey::Skills => &self.skills,
            SectionKey::Projects => &self.projects,
            SectionKey::Certifications => &self.certifications,
            SectionKey::Education => &self.education,
        }
    }

    fn get_mut(&mut self, key: SectionKey) -> &mut String {
        match key {
            SectionKey::Summary => &mut self.summary,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Projects => &mut self.projects,
            SectionKey::Certifications => &mut self.certifications,
            SectionKey::Education => &mut self.education,
        }
    }

    /// Iterate `(key, block)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        SectionKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Append a block to a key, separating from existing content with a
    /// newline (repeated headings merge in document order).
    fn append(&mut self, key: SectionKey, block: &str) {
        if block.is_empty() {
            return;
        }
        let slot = self.get_mut(key);
        if !slot.is_empty() {
            slot.push('\n');
        }
        slot.push_str(block);
    }
}

/// Resolve a matched heading string to its canonical key.
///
/// The combined pattern only matches known synonyms, so this cannot miss —
/// but a future edit to one pattern table and not the other should degrade
/// to `summary` rather than drop content.
fn canonical_key(heading: &str) -> SectionKey {
    let trimmed = heading.trim();
    for (key, re) in KEY_PATTERNS.iter() {
        if re.is_match(trimmed) {
            return *key;
        }
    }
    SectionKey::Summary
}

/// Split cleaned text into the six canonical sections.
///
/// Total function: always returns all six keys. With no recognised heading
/// in `text`, the entire (trimmed) text lands in `summary` and every other
/// key is empty.
pub fn split_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let text = text.trim();
    if text.is_empty() {
        return sections;
    }

    struct HeadingMatch {
        key: SectionKey,
        start: usize,
        end: usize,
    }

    let matches: Vec<HeadingMatch> = HEADING_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("match group 0 always present");
            let heading = caps.name("h").expect("named group always present");
            HeadingMatch {
                key: canonical_key(heading.as_str()),
                start: whole.start(),
                end: whole.end(),
            }
        })
        .collect();

    if matches.is_empty() {
        sections.summary = text.to_string();
        return sections;
    }

    // Content before the first heading: name, contact block, unlabelled pitch.
    let preamble = text[..matches[0].start].trim();
    sections.append(SectionKey::Summary, preamble);

    for (i, m) in matches.iter().enumerate() {
        let end = matches.get(i + 1).map_or(text.len(), |next| next.start);
        let block = text[m.end..end].trim();
        sections.append(m.key, block);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_all_empty_keys() {
        let s = split_sections("");
        for (_, block) in s.iter() {
            assert_eq!(block, "");
        }
    }

    #[test]
    fn no_heading_falls_back_to_summary() {
        let text = "Jane Doe\njane@example.com\nTen years of plumbing.";
        let s = split_sections(text);
        assert_eq!(s.summary, text);
        assert_eq!(s.experience, "");
        assert_eq!(s.skills, "");
        assert_eq!(s.projects, "");
        assert_eq!(s.certifications, "");
        assert_eq!(s.education, "");
    }

    #[test]
    fn heading_case_and_suffix_tolerance() {
        for heading in ["PROJECTS", "Projects:", "projects -", "Projects :"] {
            let text = format!("{heading}\nBuilt X.");
            let s = split_sections(&text);
            assert_eq!(s.projects, "Built X.", "failed for heading {heading:?}");
        }
    }

    #[test]
    fn embedded_synonym_is_not_a_heading() {
        let text = "I have many skills to offer.\nAlso projects galore.";
        let s = split_sections(text);
        assert_eq!(s.summary, text);
        assert_eq!(s.skills, "");
        assert_eq!(s.projects, "");
    }

    #[test]
    fn multi_word_synonyms_resolve() {
        let text = "WORK EXPERIENCE\nAcme Corp.\nTECH STACK\nRust, SQL.\nACADEMIC BACKGROUND\nB.Sc.";
        let s = split_sections(text);
        assert_eq!(s.experience, "Acme Corp.");
        assert_eq!(s.skills, "Rust, SQL.");
        assert_eq!(s.education, "B.Sc.");
    }

    #[test]
    fn repeated_headings_merge_in_document_order() {
        let text = "PROJECTS\nFirst block.\nEDUCATION\nB.Tech\nPROJECTS\nSecond block.";
        let s = split_sections(text);
        assert_eq!(s.projects, "First block.\nSecond block.");
        assert_eq!(s.education, "B.Tech");
    }

    #[test]
    fn preamble_folds_into_summary_before_summary_heading_content() {
        let text = "Jane Doe\nSUMMARY\nBuilt backend systems.\nPROJECTS\nBuilt X.\nEDUCATION\nB.Tech 2022";
        let s = split_sections(text);
        assert_eq!(s.summary, "Jane Doe\nBuilt backend systems.");
        assert_eq!(s.experience, "");
        assert_eq!(s.skills, "");
        assert_eq!(s.projects, "Built X.");
        assert_eq!(s.certifications, "");
        assert_eq!(s.education, "B.Tech 2022");
    }

    #[test]
    fn headings_are_consumed_not_retained() {
        let text = "SKILLS\nRust\nEDUCATION\nMIT";
        let s = split_sections(text);
        for (_, block) in s.iter() {
            assert!(!block.to_lowercase().contains("skills"));
            assert!(!block.to_lowercase().contains("education"));
        }
    }

    #[test]
    fn adjacent_headings_leave_earlier_key_empty() {
        let text = "EXPERIENCE\nSKILLS\nRust";
        let s = split_sections(text);
        assert_eq!(s.experience, "");
        assert_eq!(s.skills, "Rust");
    }

    #[test]
    fn certification_singular_and_plural() {
        for heading in ["CERTIFICATION", "Certifications", "Licenses", "certificates:"] {
            let text = format!("{heading}\nAWS SAA");
            let s = split_sections(&text);
            assert_eq!(s.certifications, "AWS SAA", "failed for {heading:?}");
        }
    }

    #[test]
    fn summary_synonyms_resolve() {
        for heading in ["Objective", "PROFILE", "About", "Professional Summary"] {
            let text = format!("{heading}\nSeasoned engineer.");
            let s = split_sections(&text);
            assert_eq!(s.summary, "Seasoned engineer.", "failed for {heading:?}");
        }
    }

    #[test]
    fn experience_synonyms_resolve() {
        for heading in ["Employment", "INTERNSHIPS", "Internship", "Professional Experience"] {
            let text = format!("{heading}\nAcme Corp 2020-2023");
            let s = split_sections(&text);
            assert_eq!(s.experience, "Acme Corp 2020-2023", "failed for {heading:?}");
        }
    }

    #[test]
    fn synonym_groups_are_disjoint() {
        // Every synonym line must resolve to exactly one canonical key.
        let samples = [
            "summary", "professional summary", "profile", "about", "objective",
            "experience", "work experience", "employment", "professional experience",
            "internship", "internships",
            "skills", "technical skills", "technologies", "tech stack", "tools",
            "tools & technologies",
            "project", "projects", "project experience", "key projects",
            "selected projects", "personal projects", "academic projects",
            "certification", "certifications", "certificate", "certificates",
            "license", "licenses",
            "education", "academics", "academic background", "qualification",
            "qualifications",
        ];
        for sample in samples {
            let hits = KEY_PATTERNS
                .iter()
                .filter(|(_, re)| re.is_match(sample))
                .count();
            assert_eq!(hits, 1, "{sample:?} matched {hits} synonym groups");
        }
    }

    #[test]
    fn totality_all_keys_always_present() {
        for text in ["", "no headings here", "SKILLS\nRust", "EDUCATION\n"] {
            let s = split_sections(text);
            assert_eq!(s.iter().count(), 6);
        }
    }

    #[test]
    fn serialises_with_canonical_key_names() {
        let s = split_sections("SKILLS\nRust");
        let json = serde_json::to_string(&s).unwrap();
        for key in SectionKey::ALL {
            assert!(json.contains(&format!("\"{}\"", key.as_str())), "missing {key}");
        }
    }
}
