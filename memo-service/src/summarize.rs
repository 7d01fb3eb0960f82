//! Gemini-backed memo summarization.
//!
//! One-shot proxy: fixed prompt template in, free-text summary out. No
//! retries, no streaming, no caching of repeated requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const GEMINI_MODEL: &str = "gemini-2.0-flash-001";
const MAX_OUTPUT_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.3;

/// Generation API seam, doubled in tests.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, title: Option<&str>, content: &str) -> Result<String, String>;
}

/// Fixed Korean summarization prompt; the title line is included only when
/// a title was supplied.
pub fn build_prompt(title: Option<&str>, content: &str) -> String {
    let mut lines = vec![
        "당신은 한국어 요약가입니다.".to_string(),
        "다음 메모를 5줄 이내 핵심 bullet로 간결하게 요약하세요.".to_string(),
        "가능하면 태그/카테고리 뉘앙스도 반영하되 과장하지 마세요.".to_string(),
    ];
    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        lines.push(format!("제목: {}", title));
    }
    lines.push("본문:\n".to_string());
    lines.push(content.to_string());
    lines.join("\n")
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, title: Option<&str>, content: &str) -> Result<String, String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            GEMINI_MODEL
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(title, content),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Generation API request failed: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read generation response: {}", e))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| body.trim().to_string());
            return Err(format!("Generation API error ({}): {}", status, detail));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| format!("Unexpected generation response shape: {}", e))?;

        // An empty or filtered response becomes an empty summary, not an error.
        let summary = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(summary)
    }
}
