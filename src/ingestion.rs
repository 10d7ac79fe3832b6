/*!
 * Ingestion pipeline.
 *
 * Takes raw user-entered tokens, deduplicates them against the store,
 * normalizes each one through the lemmatizer and persists accepted records.
 * Batches run strictly in input order, one token at a time: the duplicate
 * set grows with every accepted record, so later tokens in the same batch
 * are checked against earlier in-batch additions.
 */

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lemmatizer::{Lemmatizer, Normalization};
use crate::lexeme::LexemeRecord;
use crate::store::VocabStore;

/// Outcome of ingesting one token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOutcome {
    /// The token was normalized and persisted
    Accepted(LexemeRecord),

    /// The token (or its normalized form) already exists in the store
    SkippedDuplicate {
        /// The raw token as entered
        token: String,
        /// The normalized word that collided, when the collision was only
        /// detected after lemmatization
        resolved_as: Option<String>,
    },

    /// The service flagged the token as invalid, or its response was unusable
    RejectedInvalid {
        /// The raw token as entered
        token: String,
    },
}

impl TokenOutcome {
    /// Whether this outcome persisted a record
    pub fn is_accepted(&self) -> bool {
        matches!(self, TokenOutcome::Accepted(_))
    }
}

/// Result of a bulk ingestion call
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Number of accepted (persisted) records
    pub accepted: usize,
    /// Per-token outcomes, in input order, one per input token
    pub outcomes: Vec<TokenOutcome>,
}

/// The ingestion pipeline over a store and a lemmatizer
///
/// Holds no state across invocations; the duplicate set lives only for the
/// duration of a single batch call.
pub struct IngestionPipeline<'a> {
    store: &'a dyn VocabStore,
    lemmatizer: &'a dyn Lemmatizer,
}

impl<'a> IngestionPipeline<'a> {
    /// Create a pipeline over the given collaborators
    pub fn new(store: &'a dyn VocabStore, lemmatizer: &'a dyn Lemmatizer) -> Self {
        Self { store, lemmatizer }
    }

    /// Ingest a single token
    pub async fn ingest(&self, token: &str) -> Result<TokenOutcome> {
        let tokens = [token.to_string()];
        let mut report = self.ingest_batch(&tokens).await?;
        report.outcomes.pop()
            .ok_or_else(|| anyhow::anyhow!("Batch of one token produced no outcome"))
    }

    /// Ingest a batch of tokens in input order
    pub async fn ingest_batch(&self, tokens: &[String]) -> Result<BatchReport> {
        self.ingest_batch_with_progress(tokens, |_, _| {}).await
    }

    /// Ingest a batch of tokens, reporting each outcome as it is produced
    ///
    /// Store failures (unreadable snapshot, failed append) abort the batch;
    /// lemmatizer failures never do - they become per-token rejections.
    pub async fn ingest_batch_with_progress<F>(
        &self,
        tokens: &[String],
        mut on_outcome: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(usize, &TokenOutcome),
    {
        // One probe per batch; an unreachable service only warns here, the
        // per-token calls surface their own failures as rejections
        if let Err(e) = self.lemmatizer.test_connection().await {
            warn!("Provider connection check failed: {}", e);
        }

        // One snapshot per batch; only our own accepted words extend it
        let snapshot = self.store.read_all()
            .context("Failed to read the vocabulary store")?;
        let mut existing_words: HashSet<String> =
            snapshot.iter().map(|r| r.word_key()).collect();

        let mut outcomes = Vec::with_capacity(tokens.len());
        let mut accepted = 0;

        for (index, token) in tokens.iter().enumerate() {
            let outcome = self.ingest_one(token, &mut existing_words).await?;
            if outcome.is_accepted() {
                accepted += 1;
            }
            on_outcome(index, &outcome);
            outcomes.push(outcome);
        }

        Ok(BatchReport { accepted, outcomes })
    }

    /// Process one token against the growing duplicate set
    async fn ingest_one(
        &self,
        token: &str,
        existing_words: &mut HashSet<String>,
    ) -> Result<TokenOutcome> {
        let token = token.trim();

        // Pre-lemmatization check: a known word never reaches the service
        if existing_words.contains(&token.to_lowercase()) {
            debug!("'{}' is already in the store, skipping", token);
            return Ok(TokenOutcome::SkippedDuplicate {
                token: token.to_string(),
                resolved_as: None,
            });
        }

        let record = match self.lemmatizer.normalize(token).await {
            Ok(Normalization::Valid(record)) => record,
            Ok(Normalization::Invalid) => {
                debug!("Service flagged '{}' as invalid", token);
                return Ok(TokenOutcome::RejectedInvalid {
                    token: token.to_string(),
                });
            },
            Err(e) => {
                // A single failed normalization never aborts the batch
                warn!("Normalization of '{}' failed: {}", token, e);
                return Ok(TokenOutcome::RejectedInvalid {
                    token: token.to_string(),
                });
            },
        };

        // Post-lemmatization check: a different surface form may have
        // collapsed onto a word that is already stored
        let word_key = record.word_key();
        if existing_words.contains(&word_key) {
            debug!("'{}' normalized to existing word '{}', skipping", token, record.word);
            return Ok(TokenOutcome::SkippedDuplicate {
                token: token.to_string(),
                resolved_as: Some(record.word),
            });
        }

        self.store.append(&record)
            .context(format!("Failed to persist '{}'", record.word))?;
        existing_words.insert(word_key);

        Ok(TokenOutcome::Accepted(record))
    }
}

/// Separators between tokens in a word-list file
static TOKEN_SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,;\r\n]+").expect("token separator pattern is valid")
});

/// Split word-list text into raw tokens
///
/// Tokens are separated by commas, semicolons or line breaks; whitespace
/// inside a token is kept so multi-word phrases survive.
pub fn split_tokens(text: &str) -> Vec<String> {
    TOKEN_SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
