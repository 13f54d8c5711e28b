//! Reqwest-based client for an OpenAI-compatible legacy Completions API.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Fixed output cap for the extraction call.
const MAX_TOKENS: u32 = 500;

const EXTRACTION_INSTRUCTION: &str = "Extract the following information from the resume: \
name, contact information, skills, education, work experience, certifications, languages.";

/// Build the fixed extraction prompt around the raw resume text.
pub fn extraction_prompt(resume_text: &str) -> String {
    format!("{}\n\nResume:\n{}", EXTRACTION_INSTRUCTION, resume_text)
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Single point of contact with the completion endpoint. The credential and
/// base URL are injected at construction so tests can point it at a mock.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        Self::with_timeout(base_url, api_key, model, 60)
    }

    pub fn from_config(cfg: &Config, model: &str) -> Result<Self> {
        let timeout = cfg
            .get("REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        let api_base_url = cfg.get("API_BASE_URL").unwrap_or_else(|| "default".into());
        let mut base_url = if api_base_url == "default" {
            "https://api.openai.com/v1".to_string()
        } else {
            api_base_url
        };
        let trimmed = base_url.trim_end_matches('/');
        if !trimmed.ends_with("/v1") && !trimmed.contains("/v1/") {
            base_url = format!("{}/v1", trimmed);
        } else {
            base_url = trimmed.to_string();
        }

        Self::with_timeout(base_url, cfg.get("OPENAI_API_KEY"), model, timeout)
    }

    fn with_timeout(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
        })
    }

    /// Send one completion request and return the first choice's text
    /// verbatim. Error bodies are logged to stderr before the error
    /// propagates; there is no retry.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/completions", self.base_url.trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.api_key {
            let hv = HeaderValue::from_str(&format!("Bearer {}", key))?;
            headers.insert(AUTHORIZATION, hv);
        }

        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: MAX_TOKENS,
        };

        let resp = match self.http.post(url).headers(headers).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                eprintln!("completion request failed: {}", e);
                return Err(e).context("failed to send completion request");
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            eprintln!("completion API returned {}: {}", status, detail);
            bail!("completion API returned {}", status);
        }

        let parsed: CompletionResponse = resp
            .json()
            .await
            .context("failed to parse completion response body")?;
        let first = parsed
            .choices
            .into_iter()
            .next()
            .context("completion response contained no choices")?;
        Ok(first.text)
    }
}
