use anyhow::{Result, anyhow, Context};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::error;

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct Ollama {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the server, including scheme and port
    base_url: String,
}

/// Additional model parameters for a chat request
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatOptions {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to predict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat request for the Ollama API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// Model name to use for generation
    model: String,
    /// Messages of the conversation
    messages: Vec<ChatMessage>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<ChatOptions>,
    /// Whether to stream the response
    stream: bool,
}

/// Chat response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Model name
    pub model: String,
    /// Response message
    pub message: ChatMessage,
    /// Whether the generation is complete
    pub done: bool,
    /// Number of prompt tokens
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    /// Number of generated tokens
    #[serde(default)]
    pub eval_count: Option<u64>,
}

impl ChatRequest {
    /// Create a new non-streaming chat request
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            options: None,
            stream: false,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        match &mut self.options {
            Some(options) => options.temperature = Some(temperature),
            None => {
                self.options = Some(ChatOptions {
                    temperature: Some(temperature),
                    num_predict: None,
                });
            }
        }
        self
    }

    /// Set the maximum number of tokens to predict
    pub fn num_predict(mut self, num_predict: u32) -> Self {
        match &mut self.options {
            Some(options) => options.num_predict = Some(num_predict),
            None => {
                self.options = Some(ChatOptions {
                    temperature: None,
                    num_predict: Some(num_predict),
                });
            }
        }
        self
    }
}

impl Ollama {
    /// Create a new Ollama client from host, port and request timeout
    pub fn new(host: impl Into<String>, port: u16, timeout_secs: u64) -> Self {
        let host = host.into();

        // Construct a proper URL with scheme and port
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            if host.rsplit("://").next().is_some_and(|h| h.contains(':')) {
                host
            } else {
                format!("{}:{}", host, port)
            }
        } else {
            format!("http://{}:{}", host, port)
        };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url,
        }
    }

    /// Send a chat request and return the complete response
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let api_url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send request to Ollama API: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(anyhow!("Ollama API error ({}): {}", status, error_text));
        }

        let chat_response = response.json::<ChatResponse>().await
            .map_err(|e| anyhow!("Failed to parse Ollama API response: {}", e))?;

        Ok(chat_response)
    }

    /// Query the server version, used as a connection test
    pub async fn version(&self) -> Result<String> {
        let api_url = format!("{}/api/version", self.base_url.trim_end_matches('/'));

        #[derive(Deserialize)]
        struct VersionResponse {
            version: String,
        }

        let response = self.client.get(&api_url)
            .send()
            .await
            .context("Failed to reach Ollama server")?;

        let version = response.json::<VersionResponse>().await
            .context("Failed to parse Ollama version response")?;

        Ok(version.version)
    }
}
