//! resume-extract: pull labeled sections out of a resume file with one LLM
//! completion call.
//!
//! Pipeline: read the file (PDF, DOCX, or plain text), send the text to a
//! completion endpoint with a fixed extraction prompt, then partition the
//! completion line-by-line into the seven fixed sections.

pub mod config;
pub mod llm;
pub mod reader;
pub mod sections;

use anyhow::Result;

use crate::llm::CompletionClient;
use crate::sections::ResumeSections;

/// Run the full pipeline for one resume file. Steps run strictly in
/// sequence; any failure aborts the whole operation with no partial result.
pub async fn parse_resume(file_path: &str, client: &CompletionClient) -> Result<ResumeSections> {
    let resume_text = reader::read_resume(file_path)?;
    let completion = client.complete(&llm::extraction_prompt(&resume_text)).await?;
    Ok(sections::extract_sections(&completion))
}
