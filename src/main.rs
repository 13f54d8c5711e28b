mod cli;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use resume_extract::config::Config;
use resume_extract::llm::CompletionClient;
use resume_extract::parse_resume;
use resume_extract::sections::Section;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let cfg = Config::load();

    // Resolve model: CLI overrides config; fall back to davinci-002
    let effective_model = args
        .model
        .clone()
        .or_else(|| cfg.get("DEFAULT_MODEL"))
        .unwrap_or_else(|| "davinci-002".to_string());

    let client = CompletionClient::from_config(&cfg, &effective_model)?;
    let sections = parse_resume(&args.file, &client).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for section in Section::ALL {
        println!("{}", section.label().cyan().bold());
        let text = sections.get(section);
        if text.is_empty() {
            println!("(none)");
        } else {
            println!("{}", text);
        }
        println!();
    }
    Ok(())
}
