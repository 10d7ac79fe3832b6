use anyhow::{Result, Context};
use log::{warn, info};
use std::fs;
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::export::{self, CardLabels};
use crate::ingestion::{split_tokens, IngestionPipeline, TokenOutcome};
use crate::lemmatizer::LemmatizerService;
use crate::lexeme::LexemeRecord;
use crate::store::{SheetStore, VocabStore};

// @module: Application controller for vocabulary acquisition

/// Main application controller wiring store and lemmatizer
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Vocabulary store
    store: SheetStore,
    // @field: Lemmatizer service
    lemmatizer: LemmatizerService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let store = SheetStore::new(&config.store.path);
        let lemmatizer = LemmatizerService::new(&config)
            .context("Failed to create lemmatizer service")?;

        Ok(Self {
            config,
            store,
            lemmatizer,
        })
    }

    /// Ingest one or more words given on the command line
    pub async fn run_add(&self, words: &[String]) -> Result<()> {
        let pipeline = IngestionPipeline::new(&self.store, &self.lemmatizer);

        for word in words {
            info!("🤖 Analyzing '{}'...", word);
            let outcome = pipeline.ingest(word).await?;
            log_outcome(&outcome);
        }

        Ok(())
    }

    /// Ingest a word-list file with a progress bar
    pub async fn run_batch(&self, input_file: &Path) -> Result<()> {
        let text = fs::read_to_string(input_file)
            .context(format!("Failed to read word list: {:?}", input_file))?;

        let tokens = split_tokens(&text);
        if tokens.is_empty() {
            warn!("No tokens found in {:?}", input_file);
            return Ok(());
        }

        info!("Ingesting {} tokens from {:?}", tokens.len(), input_file);

        let progress = ProgressBar::new(tokens.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let pipeline = IngestionPipeline::new(&self.store, &self.lemmatizer);
        let report = pipeline
            .ingest_batch_with_progress(&tokens, |_, outcome| {
                let label = match outcome {
                    TokenOutcome::Accepted(record) => record.word.clone(),
                    TokenOutcome::SkippedDuplicate { token, .. } => format!("{} (duplicate)", token),
                    TokenOutcome::RejectedInvalid { token } => format!("{} (invalid)", token),
                };
                progress.set_message(label);
                progress.inc(1);
            })
            .await?;
        progress.finish_and_clear();

        let duplicates = report.outcomes.iter()
            .filter(|o| matches!(o, TokenOutcome::SkippedDuplicate { .. }))
            .count();
        let rejected = report.outcomes.iter()
            .filter(|o| matches!(o, TokenOutcome::RejectedInvalid { .. }))
            .count();

        info!(
            "✅ Batch done: {} added, {} duplicates skipped, {} rejected",
            report.accepted, duplicates, rejected
        );

        Ok(())
    }

    /// Print the store as an aligned table
    pub fn run_list(&self) -> Result<()> {
        let records = self.read_all()?;
        if records.is_empty() {
            info!("The vocabulary store is empty. Add a word!");
            return Ok(());
        }

        let word_width = records.iter()
            .map(|r| r.display_word().chars().count())
            .max()
            .unwrap_or(0);
        let plural_width = records.iter()
            .map(|r| r.plural.chars().count())
            .max()
            .unwrap_or(0)
            .max("Plural".len());

        println!("{:<word_width$}  {:<plural_width$}  Translation", "Word", "Plural");
        for record in &records {
            println!(
                "{:<word_width$}  {:<plural_width$}  {}",
                record.display_word(),
                record.plural,
                record.translation,
            );
        }

        info!("{} records in {:?}", records.len(), self.store.path());
        Ok(())
    }

    /// Write the flashcard export
    pub fn run_export(&self, output_file: &Path) -> Result<()> {
        let records = self.read_all()?;
        if records.is_empty() {
            warn!("The vocabulary store is empty, nothing to export");
            return Ok(());
        }

        let labels = CardLabels::for_languages(
            &self.config.source_language,
            &self.config.target_language,
        );
        export::write_flashcards(output_file, &records, &labels)
    }

    /// Read the full store snapshot
    pub fn read_all(&self) -> Result<Vec<LexemeRecord>> {
        Ok(self.store.read_all()?)
    }

    /// Overwrite the store with an externally edited snapshot
    pub fn replace_all(&self, records: &[LexemeRecord]) -> Result<()> {
        Ok(self.store.replace_all(records)?)
    }
}

/// Log one ingestion outcome in user-facing form
fn log_outcome(outcome: &TokenOutcome) {
    match outcome {
        TokenOutcome::Accepted(record) => {
            info!("✅ Saved: {}", record.display_word());
            if !record.example_source.is_empty() {
                info!("🗣️ {}", record.example_source);
            }
        },
        TokenOutcome::SkippedDuplicate { token, resolved_as: Some(word) } => {
            warn!("🛑 '{}' is already in the database (as '{}')", token, word);
        },
        TokenOutcome::SkippedDuplicate { token, resolved_as: None } => {
            warn!("🛑 '{}' is already in the database", token);
        },
        TokenOutcome::RejectedInvalid { token } => {
            warn!("❌ '{}' is not a valid word", token);
        },
    }
}
