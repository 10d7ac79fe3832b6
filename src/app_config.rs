use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), the language being learned
    pub source_language: String,

    /// Target language code (ISO), the language translations are given in
    pub target_language: String,

    /// Vocabulary store config
    #[serde(default)]
    pub store: StoreConfig,

    /// Lemmatizer config
    pub lemmatizer: LemmatizerConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Lemmatizer provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerProvider {
    // @provider: Ollama
    #[default]
    Ollama,
    // @provider: OpenAI
    OpenAI,
    // @provider: Anthropic
    Anthropic,
    // @provider: LM Studio (OpenAI-compatible local server)
    LMStudio,
}

impl LemmatizerProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Ollama => "Ollama",
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::LMStudio => "LM Studio",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Ollama => "ollama".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Anthropic => "anthropic".to_string(),
            Self::LMStudio => "lmstudio".to_string(),
        }
    }
}

// Implement Display trait for LemmatizerProvider
impl std::fmt::Display for LemmatizerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for LemmatizerProvider
impl std::str::FromStr for LemmatizerProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "lmstudio" => Ok(Self::LMStudio),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Vocabulary store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the backing sheet file
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "String::new")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: LemmatizerProvider) -> Self {
        match provider_type {
            LemmatizerProvider::Ollama => Self {
                provider_type: "ollama".to_string(),
                model: default_ollama_model(),
                api_key: String::new(),
                endpoint: default_ollama_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            LemmatizerProvider::OpenAI => Self {
                provider_type: "openai".to_string(),
                model: default_openai_model(),
                api_key: String::new(),
                endpoint: default_openai_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            LemmatizerProvider::Anthropic => Self {
                provider_type: "anthropic".to_string(),
                model: default_anthropic_model(),
                api_key: String::new(),
                endpoint: default_anthropic_endpoint(),
                timeout_secs: default_anthropic_timeout_secs(),
            },
            LemmatizerProvider::LMStudio => Self {
                provider_type: "lmstudio".to_string(),
                model: default_lmstudio_model(),
                api_key: String::new(),
                endpoint: default_lmstudio_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Lemmatizer service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LemmatizerConfig {
    /// Lemmatizer provider to use
    #[serde(default)]
    pub provider: LemmatizerProvider,

    /// Available lemmatizer providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,

    /// Common lemmatizer settings
    #[serde(default)]
    pub common: LemmatizerCommonConfig,
}

/// Common lemmatizer settings applicable to all providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LemmatizerCommonConfig {
    /// System prompt template for lemmatization
    /// Placeholders: {source_language}, {target_language}
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Temperature parameter for text generation (0.0 to 1.0)
    /// Lemmatization wants deterministic output, so this defaults to 0
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum number of tokens to generate per response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LemmatizerCommonConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_store_path() -> String {
    "vocab.tsv".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_anthropic_timeout_secs() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_tokens() -> u32 {
    512
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_lmstudio_endpoint() -> String {
    // LM Studio default server (OpenAI compatible) runs on port 1234 under /v1
    "http://localhost:1234/v1".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-haiku".to_string()
}

fn default_lmstudio_model() -> String {
    // Placeholder; users should set to the loaded model name in LM Studio
    "local-model".to_string()
}

fn default_system_prompt() -> String {
    "You are a {source_language} dictionary database.\n\
     TASK: Convert the user input to its dictionary root form (lemma).\n\
     RULES:\n\
     1. NOUNS: return the singular nominative form plus its article (der/die/das).\n\
     2. VERBS: return the infinitive. Article is '-'.\n\
     3. ADJECTIVES: return the positive form. Article is '-'.\n\
     4. If the input is not a valid {source_language} word, return \"INVALID\".\n\
     OUTPUT FORMAT (data only, NO header):\n\
     Article | Word | Plural | {target_language} | {source_language} Sentence | {target_language} Sentence"
        .to_string()
}

impl Config {

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.store.path.trim().is_empty() {
            return Err(anyhow!("Store path must not be empty"));
        }

        // Validate API key for all providers except the local ones
        match self.lemmatizer.provider {
            LemmatizerProvider::OpenAI => {
                let api_key = self.lemmatizer.get_api_key();
                if api_key.is_empty() {
                    return Err(anyhow!("Lemmatizer API key is required for OpenAI provider"));
                }
            },
            LemmatizerProvider::Anthropic => {
                let api_key = self.lemmatizer.get_api_key();
                if api_key.is_empty() {
                    return Err(anyhow!("Lemmatizer API key is required for Anthropic provider"));
                }
            },
            _ => {}
        }

        Ok(())
    }

}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "de".to_string(),
            target_language: "hu".to_string(),
            store: StoreConfig::default(),
            lemmatizer: LemmatizerConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl LemmatizerConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers.iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a specific provider configuration by type
    pub fn get_provider_config(&self, provider_type: &LemmatizerProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers.iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the model for the active provider
    pub fn get_model(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.model.is_empty() {
                return provider_config.model.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            LemmatizerProvider::Ollama => default_ollama_model(),
            LemmatizerProvider::OpenAI => default_openai_model(),
            LemmatizerProvider::Anthropic => default_anthropic_model(),
            LemmatizerProvider::LMStudio => default_lmstudio_model(),
        }
    }

    /// Get the API key for the active provider
    pub fn get_api_key(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.api_key.is_empty() {
                return provider_config.api_key.clone();
            }
        }

        // Default fallback - local providers don't use API keys
        String::new()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            LemmatizerProvider::Ollama => default_ollama_endpoint(),
            LemmatizerProvider::OpenAI => default_openai_endpoint(),
            LemmatizerProvider::Anthropic => default_anthropic_endpoint(),
            LemmatizerProvider::LMStudio => default_lmstudio_endpoint(),
        }
    }

    /// Get the request timeout for the active provider
    pub fn get_timeout_secs(&self) -> u64 {
        if let Some(provider_config) = self.get_active_provider_config() {
            if provider_config.timeout_secs > 0 {
                return provider_config.timeout_secs;
            }
        }

        // Default fallback
        default_timeout_secs()
    }
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: LemmatizerProvider::default(),
            available_providers: Vec::new(),
            common: LemmatizerCommonConfig::default(),
        };

        // Add default providers
        config.available_providers.push(ProviderConfig::new(LemmatizerProvider::Ollama));
        config.available_providers.push(ProviderConfig::new(LemmatizerProvider::OpenAI));
        config.available_providers.push(ProviderConfig::new(LemmatizerProvider::Anthropic));
        config.available_providers.push(ProviderConfig::new(LemmatizerProvider::LMStudio));

        config
    }
}
