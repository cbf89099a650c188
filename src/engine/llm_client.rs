use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::error::GenerationError;
use crate::ui::settings::LlmSettings;

/// Something that turns a prompt into free text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct ChatCompletionClient {
    http: Client,
    settings: LlmSettings,
    api_key: Option<String>,
}

impl ChatCompletionClient {
    /// Reads the API key from the environment variable named in the settings.
    /// A missing key is reported on the first request, not here.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&settings.api_key_env).ok();
        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(
        settings: &LlmSettings,
        api_key: Option<String>,
    ) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            settings: settings.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }
}

impl TextGenerator for ChatCompletionClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey(self.settings.api_key_env.clone()))?;

        let req = ChatCompletionRequest {
            model: &self.settings.model,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} (model {})", self.endpoint(), self.settings.model);

        let resp = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&req)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);

            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let resp: ChatCompletionResponse = resp
            .json()
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        resp.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("no choices in response".into()))
    }
}
