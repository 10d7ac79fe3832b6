/*!
 * Lemmatizer client.
 *
 * Sends one word or phrase at a time to a text-generation service with a
 * fixed schema instruction and parses the reply into a `LexemeRecord` or the
 * invalidity signal. The `Lemmatizer` trait is the seam the ingestion
 * pipeline depends on; `LemmatizerService` is the HTTP-backed implementation
 * dispatching to the configured provider.
 */

use anyhow::{Result, Context};
use async_trait::async_trait;
use url::Url;

use crate::app_config::{Config, LemmatizerCommonConfig, LemmatizerProvider};
use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{ChatMessage, ChatRequest, Ollama};
use crate::providers::openai::{OpenAI, OpenAIRequest};

pub mod prompt;
pub mod response;

pub use response::{Normalization, parse_response};

/// Interface the ingestion pipeline depends on
#[async_trait]
pub trait Lemmatizer: Send + Sync {
    /// Normalize a raw token to its dictionary form
    ///
    /// Returns `Invalid` when the service flags the input as not a word, and
    /// an error for transport failures and malformed responses. Callers
    /// processing batches absorb errors per token instead of aborting.
    async fn normalize(&self, token: &str) -> Result<Normalization, ProviderError>;

    /// Probe the backing service without normalizing anything
    ///
    /// Transport-free implementations keep the default no-op.
    async fn test_connection(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Active provider client
enum LemmatizerProviderImpl {
    Ollama { client: Ollama },
    OpenAI { client: OpenAI },
    Anthropic { client: Anthropic },
}

/// HTTP-backed lemmatizer dispatching to the configured provider
pub struct LemmatizerService {
    /// Active provider client
    provider: LemmatizerProviderImpl,
    /// Model name for requests
    model: String,
    /// Common generation settings
    common: LemmatizerCommonConfig,
    /// Rendered system instruction
    system_prompt: String,
}

// @parses: Endpoint string into host and port
// @returns: Tuple of (host, port)
fn parse_endpoint(endpoint: &str) -> Result<(String, u16)> {
    // If it doesn't start with http/https, assume it's just host:port
    let url_str = if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        format!("http://{}", endpoint)
    } else {
        endpoint.to_string()
    };

    let url = Url::parse(&url_str)
        .context(format!("Failed to parse endpoint URL: {}", endpoint))?;

    let host = format!(
        "{}://{}",
        url.scheme(),
        url.host_str().unwrap_or("localhost")
    );

    let port = url.port().unwrap_or(11434);

    Ok((host, port))
}

impl LemmatizerService {
    /// Create a new lemmatizer service from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let source_name = language_utils::get_language_name(&config.source_language)?;
        let target_name = language_utils::get_language_name(&config.target_language)?;

        let system_prompt = prompt::render_system_prompt(
            &config.lemmatizer.common.system_prompt,
            &source_name,
            &target_name,
        );

        let timeout_secs = config.lemmatizer.get_timeout_secs();
        let provider = match config.lemmatizer.provider {
            LemmatizerProvider::Ollama => {
                let (host, port) = parse_endpoint(&config.lemmatizer.get_endpoint())?;
                LemmatizerProviderImpl::Ollama {
                    client: Ollama::new(host, port, timeout_secs),
                }
            },
            LemmatizerProvider::OpenAI | LemmatizerProvider::LMStudio => {
                // LM Studio speaks the OpenAI chat API
                LemmatizerProviderImpl::OpenAI {
                    client: OpenAI::new(
                        config.lemmatizer.get_api_key(),
                        config.lemmatizer.get_endpoint(),
                        timeout_secs,
                    ),
                }
            },
            LemmatizerProvider::Anthropic => {
                LemmatizerProviderImpl::Anthropic {
                    client: Anthropic::new(
                        config.lemmatizer.get_api_key(),
                        config.lemmatizer.get_endpoint(),
                        timeout_secs,
                    ),
                }
            },
        };

        Ok(Self {
            provider,
            model: config.lemmatizer.get_model(),
            common: config.lemmatizer.common.clone(),
            system_prompt,
        })
    }

    /// Issue one completion request and return the raw response text
    async fn complete_raw(&self, token: &str) -> Result<String, ProviderError> {
        let user_message = prompt::render_user_message(token);

        match &self.provider {
            LemmatizerProviderImpl::Ollama { client } => {
                let messages = vec![
                    ChatMessage {
                        role: "system".to_string(),
                        content: self.system_prompt.clone(),
                    },
                    ChatMessage {
                        role: "user".to_string(),
                        content: user_message,
                    },
                ];
                let request = ChatRequest::new(self.model.clone(), messages)
                    .temperature(self.common.temperature)
                    .num_predict(self.common.max_tokens);

                let response = client.chat(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
                Ok(response.message.content)
            },
            LemmatizerProviderImpl::OpenAI { client } => {
                let request = OpenAIRequest::new(self.model.clone())
                    .temperature(self.common.temperature)
                    .max_tokens(self.common.max_tokens)
                    .add_message("system", self.system_prompt.clone())
                    .add_message("user", user_message);

                let response = client.complete(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
                Ok(OpenAI::extract_text_from_response(&response))
            },
            LemmatizerProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(self.model.clone(), self.common.max_tokens)
                    .system(self.system_prompt.clone())
                    .temperature(self.common.temperature)
                    .add_message("user", user_message);

                let response = client.complete(request).await
                    .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
                Ok(Anthropic::extract_text_from_response(&response))
            },
        }
    }
}

#[async_trait]
impl Lemmatizer for LemmatizerService {
    async fn normalize(&self, token: &str) -> Result<Normalization, ProviderError> {
        let raw = self.complete_raw(token).await?;
        parse_response(&raw)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            LemmatizerProviderImpl::Ollama { client } => {
                client.version().await
                    .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;
                Ok(())
            },
            LemmatizerProviderImpl::OpenAI { client } => {
                client.test_connection(&self.model).await
                    .map_err(|e| ProviderError::ConnectionError(e.to_string()))
            },
            LemmatizerProviderImpl::Anthropic { client } => {
                client.test_connection(&self.model).await
                    .map_err(|e| ProviderError::ConnectionError(e.to_string()))
            },
        }
    }
}
