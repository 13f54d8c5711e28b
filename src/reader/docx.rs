//! DOCX text extraction.
//!
//! A .docx file is a ZIP archive whose body text lives in
//! `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::Read;
use zip::ZipArchive;

/// Extract the body text of a DOCX file, one line per paragraph.
pub fn extract_docx_text(file_path: &str) -> Result<String> {
    let file =
        File::open(file_path).with_context(|| format!("failed to open DOCX '{}'", file_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read DOCX '{}' as a ZIP archive", file_path))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| anyhow!("invalid DOCX '{}': word/document.xml not found", file_path))?
        .read_to_string(&mut xml)
        .with_context(|| format!("failed to read document body of '{}'", file_path))?;

    Ok(document_xml_to_text(&xml))
}

/// Collect the text of `<w:t>` runs, emitting a newline for each closed
/// paragraph. Attributes on `<w:t>` (e.g. `xml:space="preserve"`) are
/// tolerated; every other tag is skipped.
fn document_xml_to_text(xml: &str) -> String {
    let mut out = String::new();
    let mut i = 0;

    while let Some(open) = xml[i..].find('<') {
        let start = i + open;
        let Some(close) = xml[start..].find('>') else {
            break;
        };
        let end = start + close;
        let tag = &xml[start + 1..end];

        if tag == "w:t" || tag.starts_with("w:t ") {
            if let Some(len) = xml[end + 1..].find("</w:t>") {
                out.push_str(&unescape_entities(&xml[end + 1..end + 1 + len]));
                i = end + 1 + len;
                continue;
            }
        } else if tag == "/w:p" && !out.ends_with('\n') && !out.is_empty() {
            out.push('\n');
        }
        i = end + 1;
    }

    out.trim_end().to_string()
}

fn unescape_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
