//! Direct paragraph extraction from word-processor documents.
//!
//! A `.docx` file is a ZIP archive whose main body lives in
//! `word/document.xml`. Text content sits in `<w:t>` runs grouped under
//! `<w:p>` paragraph elements; everything else (styles, tables-of-authorities
//! plumbing, revision marks) is noise for plain-text purposes. Streaming the
//! XML keeps memory flat even for long documents and avoids committing to a
//! full WordprocessingML object model for what is a read-only, text-only
//! pass.
//!
//! There is no fallback for this format: a corrupt container or malformed
//! XML fails the call outright, unlike the PDF cascade.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Extract paragraph text from a DOCX file.
///
/// Paragraphs are trimmed, blank ones discarded, and the remainder joined
/// with single newlines.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let file = std::fs::File::open(path).map_err(|e| ExtractError::CorruptDocument {
        path: path.to_path_buf(),
        detail: format!("open failed: {e}"),
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| ExtractError::CorruptDocument {
        path: path.to_path_buf(),
        detail: format!("not a DOCX (ZIP) container: {e}"),
    })?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| ExtractError::CorruptDocument {
            path: path.to_path_buf(),
            detail: "missing word/document.xml".to_string(),
        })?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::CorruptDocument {
            path: path.to_path_buf(),
            detail: format!("reading word/document.xml: {e}"),
        })?;

    let paragraphs = paragraphs_from_xml(&document_xml).map_err(|detail| {
        ExtractError::CorruptDocument {
            path: path.to_path_buf(),
            detail,
        }
    })?;

    debug!("docx: {} non-empty paragraphs", paragraphs.len());
    Ok(paragraphs.join("\n"))
}

/// Collect the non-empty, trimmed paragraphs of a WordprocessingML body.
///
/// Tabs and explicit line/page breaks inside a paragraph become whitespace;
/// paragraph boundaries become the join points.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    let paragraph = current.trim();
                    if !paragraph.is_empty() {
                        paragraphs.push(paragraph.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| format!("XML entity error: {e}"))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML parse error: {e}")),
            Ok(_) => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn body(paragraph_xml: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{paragraph_xml}</w:body></w:document>"#
        )
    }

    #[test]
    fn paragraphs_are_joined_with_newlines() {
        let xml = body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Backend engineer</w:t></w:r></w:p>",
        );
        assert_eq!(
            paragraphs_from_xml(&xml).unwrap(),
            vec!["Jane Doe", "Backend engineer"]
        );
    }

    #[test]
    fn blank_paragraphs_are_discarded() {
        let xml = body(
            "<w:p><w:r><w:t>first</w:t></w:r></w:p>\
             <w:p></w:p>\
             <w:p><w:r><w:t>   </w:t></w:r></w:p>\
             <w:p><w:r><w:t>second</w:t></w:r></w:p>",
        );
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn runs_within_a_paragraph_concatenate() {
        let xml = body(
            "<w:p><w:r><w:t>Built </w:t></w:r><w:r><w:t>backend systems</w:t></w:r></w:p>",
        );
        assert_eq!(
            paragraphs_from_xml(&xml).unwrap(),
            vec!["Built backend systems"]
        );
    }

    #[test]
    fn paragraph_text_is_trimmed() {
        let xml = body("<w:p><w:r><w:t>  padded  </w:t></w:r></w:p>");
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), vec!["padded"]);
    }

    #[test]
    fn tabs_and_breaks_become_whitespace() {
        let xml = body(
            "<w:p><w:r><w:t>Acme</w:t><w:tab/><w:t>2020</w:t><w:br/><w:t>Lead</w:t></w:r></w:p>",
        );
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), vec!["Acme\t2020\nLead"]);
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = body("<w:p><w:r><w:t>Tools &amp; Technologies</w:t></w:r></w:p>");
        assert_eq!(
            paragraphs_from_xml(&xml).unwrap(),
            vec!["Tools & Technologies"]
        );
    }

    #[test]
    fn text_outside_runs_is_ignored() {
        // Whitespace and stray text between elements must not leak into
        // paragraphs.
        let xml = body("<w:p>\n  <w:r>\n    <w:t>only this</w:t>\n  </w:r>\n</w:p>");
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), vec!["only this"]);
    }

    #[test]
    fn malformed_xml_is_an_error() {
        // Mismatched closing tag.
        assert!(paragraphs_from_xml("<w:p><w:t>text</w:x></w:p>").is_err());
    }

    #[test]
    fn extract_from_generated_archive() {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer
                .write_all(
                    body(
                        "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
                         <w:p><w:r><w:t>SKILLS</w:t></w:r></w:p>\
                         <w:p><w:r><w:t>Rust, SQL</w:t></w:r></w:p>",
                    )
                    .as_bytes(),
                )
                .unwrap();
            writer.finish().unwrap();
        }

        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&buf).unwrap();

        let text = extract_docx(file.path()).unwrap();
        assert_eq!(text, "Jane Doe\nSKILLS\nRust, SQL");
    }

    #[test]
    fn non_zip_file_is_corrupt() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();
        let err = extract_docx(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::CorruptDocument { .. }));
    }

    #[test]
    fn zip_without_document_xml_is_corrupt() {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("unrelated.txt", options).unwrap();
            writer.write_all(b"hello").unwrap();
            writer.finish().unwrap();
        }
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&buf).unwrap();

        let err = extract_docx(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::CorruptDocument { ref detail, .. } if detail.contains("document.xml")
        ));
    }
}
