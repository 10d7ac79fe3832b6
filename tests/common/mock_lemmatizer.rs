/*!
 * Mock lemmatizer for testing
 *
 * Provides a scripted implementation of the Lemmatizer trait so pipeline
 * tests run without external API calls. Every call is recorded, which lets
 * tests assert that duplicates never reach the service.
 */

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use wortschatz::errors::ProviderError;
use wortschatz::lemmatizer::{Lemmatizer, Normalization};
use wortschatz::lexeme::LexemeRecord;

/// Scripted reply for one token
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Normalize to this record
    Record(LexemeRecord),
    /// The service flags the token as invalid
    Invalid,
    /// The transport fails
    Fail,
}

/// Mock implementation of the Lemmatizer trait
#[derive(Debug, Default)]
pub struct MockLemmatizer {
    /// Scripted replies keyed by token
    replies: Mutex<HashMap<String, ScriptedReply>>,
    /// Tokens the mock was called with, in call order
    calls: Mutex<Vec<String>>,
    /// Scripted connection-check failure message, None for a healthy service
    connection_error: Mutex<Option<String>>,
    /// Number of connection checks made
    connection_checks: Mutex<usize>,
}

impl MockLemmatizer {
    /// Create a mock with no scripted replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a record reply for a token
    pub fn with_record(self, token: &str, record: LexemeRecord) -> Self {
        self.replies.lock().unwrap()
            .insert(token.to_string(), ScriptedReply::Record(record));
        self
    }

    /// Script an invalid-word reply for a token
    pub fn with_invalid(self, token: &str) -> Self {
        self.replies.lock().unwrap()
            .insert(token.to_string(), ScriptedReply::Invalid);
        self
    }

    /// Script a transport failure for a token
    pub fn with_failure(self, token: &str) -> Self {
        self.replies.lock().unwrap()
            .insert(token.to_string(), ScriptedReply::Fail);
        self
    }

    /// Script a failing connection check
    pub fn with_connection_failure(self, message: &str) -> Self {
        *self.connection_error.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Number of normalize calls made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of connection checks made
    pub fn connection_check_count(&self) -> usize {
        *self.connection_checks.lock().unwrap()
    }

    /// Tokens the mock was called with, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Lemmatizer for MockLemmatizer {
    async fn normalize(&self, token: &str) -> Result<Normalization, ProviderError> {
        self.calls.lock().unwrap().push(token.to_string());

        let reply = self.replies.lock().unwrap().get(token).cloned();
        match reply {
            Some(ScriptedReply::Record(record)) => Ok(Normalization::Valid(record)),
            Some(ScriptedReply::Invalid) | None => Ok(Normalization::Invalid),
            Some(ScriptedReply::Fail) => Err(ProviderError::ConnectionError(
                "scripted transport failure".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        *self.connection_checks.lock().unwrap() += 1;

        match self.connection_error.lock().unwrap().clone() {
            Some(message) => Err(ProviderError::ConnectionError(message)),
            None => Ok(()),
        }
    }
}
