//! Resume file reading: dispatches by extension to PDF, DOCX, or plain text.

pub mod docx;
pub mod pdf;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Read a resume file and return its text content.
///
/// `.pdf` and `.docx` (case-insensitive) go through the format extractors;
/// every other path is read directly as UTF-8 text.
pub fn read_resume(file_path: &str) -> Result<String> {
    let path = Path::new(file_path);

    if !path.exists() {
        bail!("resume file '{}' does not exist", file_path);
    }
    if !path.is_file() {
        bail!("'{}' is not a file", file_path);
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => pdf::extract_pdf_text(file_path),
        "docx" => docx::extract_docx_text(file_path),
        _ => fs::read_to_string(path)
            .with_context(|| format!("failed to read resume file '{}'", file_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_an_error() {
        let result = read_resume("no-such-resume.txt");
        assert!(result.is_err());
    }

    #[test]
    fn directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_resume(dir.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn plain_text_file_reads_directly() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Name: Jane Doe\nSkills: Rust").unwrap();
        let text = read_resume(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "Name: Jane Doe\nSkills: Rust");
    }

    #[test]
    fn unknown_extension_falls_back_to_utf8() {
        let mut file = tempfile::Builder::new().suffix(".resume").tempfile().unwrap();
        write!(file, "plain content").unwrap();
        let text = read_resume(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "plain content");
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        // A text file mislabeled .PDF must be routed to the PDF extractor,
        // which rejects it.
        let mut file = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        write!(file, "not a pdf").unwrap();
        let result = read_resume(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
