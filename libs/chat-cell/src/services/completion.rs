use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{ChatMessage, ChatReply};

pub const FALLBACK_MESSAGE: &str =
    "Ne pare rău, asistentul nu este disponibil momentan. Vă rugăm să încercați din nou mai târziu.";

const TEMPERATURE: f64 = 0.7;

pub struct ChatService {
    api_key: String,
    completion_url: String,
    model: String,
    http_client: Client,
}

impl ChatService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.chat_timeout_secs))
            .build()?;

        Ok(Self {
            api_key: config.openai_api_key.clone(),
            completion_url: config.chat_completion_url.clone(),
            model: config.chat_model.clone(),
            http_client,
        })
    }

    /// Forward the conversation and return the assistant's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        if messages.is_empty() {
            return Err(anyhow!("At least one message is required"));
        }
        if self.api_key.is_empty() {
            return Err(anyhow!("OPENAI_API_KEY is not configured"));
        }

        debug!("Sending {} chat messages to {}", messages.len(), self.completion_url);

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
        });

        let response = self
            .http_client
            .post(&self.completion_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Chat completion API error {}: {}", status, error_text));
        }

        let completion: Value = response.json().await?;
        completion["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Invalid chat completion response format"))
    }

    /// Like [`ChatService::complete`], but any failure becomes the fallback reply.
    pub async fn reply(&self, messages: &[ChatMessage]) -> ChatReply {
        match self.complete(messages).await {
            Ok(content) => ChatReply {
                content,
                fallback: false,
            },
            Err(e) => {
                warn!("Chat completion failed, using fallback: {}", e);
                ChatReply {
                    content: FALLBACK_MESSAGE.to_string(),
                    fallback: true,
                }
            }
        }
    }
}
