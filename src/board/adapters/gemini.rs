//! Hosted description enhancer backed by the Gemini `generateContent` API.

use crate::board::{
    config::EnhancerConfig,
    ports::{DescriptionEnhancer, EnhancerError, EnhancerResult},
};
use async_trait::async_trait;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

const PROMPT_TEMPLATE: &str = "Enhance this task description to be more professional and clear for a productivity app.
Task Title: \"{{ title }}\"
Current Description: \"{{ description }}\"
Keep it brief (1-2 sentences). Return ONLY the enhanced text.";

/// Renders the fixed enhancement instruction for one task.
///
/// A blank description is rendered as `None`.
///
/// # Errors
///
/// Returns [`EnhancerError::Prompt`] when template rendering fails.
pub fn render_prompt(title: &str, current_description: &str) -> EnhancerResult<String> {
    let description = if current_description.trim().is_empty() {
        "None"
    } else {
        current_description
    };
    Environment::new()
        .render_str(PROMPT_TEMPLATE, context! { title => title, description => description })
        .map_err(|err| EnhancerError::Prompt(err.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn request_body(prompt: String, config: &EnhancerConfig) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: Some(prompt) }],
        }],
        generation_config: GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        },
    }
}

/// Concatenates the text parts of the first candidate.
///
/// A response without candidates or text yields an empty string.
fn response_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Parses a raw `generateContent` response body into its text.
///
/// # Errors
///
/// Returns [`EnhancerError::MalformedResponse`] when the body is not a
/// `generateContent` response.
pub fn parse_response(body: &str) -> EnhancerResult<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| EnhancerError::MalformedResponse(err.to_string()))?;
    Ok(response_text(response))
}

/// Description enhancer calling the hosted Gemini API over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiDescriptionEnhancer {
    client: reqwest::Client,
    config: EnhancerConfig,
}

impl GeminiDescriptionEnhancer {
    /// Creates an enhancer with a default HTTP client.
    #[must_use]
    pub fn new(config: EnhancerConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates an enhancer using an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: EnhancerConfig) -> Self {
        Self { client, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl DescriptionEnhancer for GeminiDescriptionEnhancer {
    async fn enhance(&self, title: &str, current_description: &str) -> EnhancerResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EnhancerError::MissingCredential)?;
        let prompt = render_prompt(title, current_description)?;

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt, &self.config))
            .send()
            .await
            .map_err(EnhancerError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnhancerError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(EnhancerError::transport)?;
        parse_response(&body)
    }
}
