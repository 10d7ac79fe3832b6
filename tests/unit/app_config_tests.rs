/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use wortschatz::app_config::{Config, LemmatizerProvider, ProviderConfig};

#[test]
fn test_default_config_shouldUseGermanToHungarian() {
    let config = Config::default();
    assert_eq!(config.source_language, "de");
    assert_eq!(config.target_language, "hu");
    assert_eq!(config.store.path, "vocab.tsv");
    assert_eq!(config.lemmatizer.provider, LemmatizerProvider::Ollama);
}

#[test]
fn test_default_config_shouldValidate() {
    // Ollama is the default provider and needs no API key
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_withOpenAIAndNoApiKey_shouldFail() {
    let mut config = Config::default();
    config.lemmatizer.provider = LemmatizerProvider::OpenAI;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withOpenAIAndApiKey_shouldSucceed() {
    let mut config = Config::default();
    config.lemmatizer.provider = LemmatizerProvider::OpenAI;
    if let Some(provider) = config.lemmatizer.available_providers.iter_mut()
        .find(|p| p.provider_type == "openai") {
        provider.api_key = "test-api-key".to_string();
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withBadLanguageCode_shouldFail() {
    let mut config = Config::default();
    config.source_language = "zz".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyStorePath_shouldFail() {
    let mut config = Config::default();
    config.store.path = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_provider_from_str_shouldParseKnownProviders() {
    assert_eq!(LemmatizerProvider::from_str("ollama").unwrap(), LemmatizerProvider::Ollama);
    assert_eq!(LemmatizerProvider::from_str("OpenAI").unwrap(), LemmatizerProvider::OpenAI);
    assert_eq!(LemmatizerProvider::from_str("ANTHROPIC").unwrap(), LemmatizerProvider::Anthropic);
    assert_eq!(LemmatizerProvider::from_str("lmstudio").unwrap(), LemmatizerProvider::LMStudio);
    assert!(LemmatizerProvider::from_str("bard").is_err());
}

#[test]
fn test_get_model_withConfiguredProvider_shouldReturnConfiguredModel() {
    let mut config = Config::default();
    config.lemmatizer.provider = LemmatizerProvider::OpenAI;
    if let Some(provider) = config.lemmatizer.available_providers.iter_mut()
        .find(|p| p.provider_type == "openai") {
        provider.model = "gpt-4o".to_string();
    }
    assert_eq!(config.lemmatizer.get_model(), "gpt-4o");
}

#[test]
fn test_get_model_withEmptyProviderList_shouldFallBackToDefault() {
    let mut config = Config::default();
    config.lemmatizer.available_providers.clear();
    config.lemmatizer.provider = LemmatizerProvider::OpenAI;
    assert_eq!(config.lemmatizer.get_model(), "gpt-4o-mini");
}

#[test]
fn test_get_endpoint_withCustomEndpoint_shouldReturnIt() {
    let mut config = Config::default();
    config.lemmatizer.available_providers = vec![ProviderConfig {
        provider_type: "ollama".to_string(),
        model: "llama3.2:3b".to_string(),
        api_key: String::new(),
        endpoint: "http://remote:11434".to_string(),
        timeout_secs: 30,
    }];
    assert_eq!(config.lemmatizer.get_endpoint(), "http://remote:11434");
}

#[test]
fn test_get_timeout_secs_withConfiguredProvider_shouldReturnIt() {
    let mut config = Config::default();
    if let Some(provider) = config.lemmatizer.available_providers.iter_mut()
        .find(|p| p.provider_type == "ollama") {
        provider.timeout_secs = 5;
    }
    assert_eq!(config.lemmatizer.get_timeout_secs(), 5);
}

#[test]
fn test_get_timeout_secs_withZeroValue_shouldFallBackToDefault() {
    let mut config = Config::default();
    if let Some(provider) = config.lemmatizer.available_providers.iter_mut()
        .find(|p| p.provider_type == "ollama") {
        provider.timeout_secs = 0;
    }
    assert_eq!(config.lemmatizer.get_timeout_secs(), 30);
}

#[test]
fn test_system_prompt_default_shouldCarryPlaceholdersAndInvalidRule() {
    let config = Config::default();
    let prompt = &config.lemmatizer.common.system_prompt;
    assert!(prompt.contains("{source_language}"));
    assert!(prompt.contains("{target_language}"));
    assert!(prompt.contains("INVALID"));
    assert!(prompt.contains("der/die/das"));
}

#[test]
fn test_config_json_roundtrip_shouldPreserveSettings() {
    let mut config = Config::default();
    config.lemmatizer.provider = LemmatizerProvider::Anthropic;
    config.target_language = "en".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.lemmatizer.provider, LemmatizerProvider::Anthropic);
    assert_eq!(parsed.target_language, "en");
    assert_eq!(parsed.store.path, config.store.path);
}

#[test]
fn test_temperature_default_shouldBeDeterministic() {
    let config = Config::default();
    assert_eq!(config.lemmatizer.common.temperature, 0.0);
}
