use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "resume-extract", about = "Extract labeled sections from a resume via an LLM", version)]
pub struct Cli {
    /// Path to the resume file (.pdf, .docx, or plain text).
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Completion model to use.
    #[arg(long)]
    pub model: Option<String>,

    /// Print the extracted sections as pretty JSON instead of labeled text.
    #[arg(long)]
    pub json: bool,
}
