//! Motivation provider: one short AI-generated focus sentence, with local
//! fallback strings so a missing key or a failed request never surfaces as
//! an error.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shown when no API key is configured
pub const FALLBACK_UNCONFIGURED: &str = "Focus on the process, not the outcome.";
/// Shown when the service answers with empty text
pub const FALLBACK_EMPTY: &str = "Stay present.";
/// Shown when the request fails
pub const FALLBACK_ERROR: &str = "One step at a time.";

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const MODEL: &str = "gemini-3-flash-preview";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const PROMPT: &str = "Give me a single, short, powerful sentence to motivate someone \
                      to focus on their work. Do not use quotes or attribution, just \
                      the raw advice.";
const SYSTEM_INSTRUCTION: &str = "You are a stoic productivity coach. Keep it under 15 words.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Fetch a motivation sentence. Blocking; run on a background thread.
/// Always returns displayable text, never an error.
pub fn fetch() -> String {
    let key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => return FALLBACK_UNCONFIGURED.to_string(),
    };

    match request(&key) {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => FALLBACK_EMPTY.to_string(),
        Err(e) => {
            log::warn!("motivation fetch failed: {:#}", e);
            FALLBACK_ERROR.to_string()
        }
    }
}

fn request(key: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: PROMPT.to_string(),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GenerationConfig { temperature: 0.7 },
    };

    let response: GenerateResponse = client
        .post(format!("{}/{}:generateContent", ENDPOINT, MODEL))
        .header("x-goog-api-key", key)
        .json(&body)
        .send()?
        .error_for_status()?
        .json()?;

    extract_text(response)
}

fn extract_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text.trim().to_string())
        .ok_or_else(|| anyhow!("response contained no candidates"))?;
    Ok(text)
}
