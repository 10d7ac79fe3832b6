/*!
 * # wortschatz - AI-assisted German vocabulary builder
 *
 * A Rust library for building a personal German vocabulary: words are
 * normalized to their dictionary form by an AI provider, stored with
 * translations and example sentences, and exported as flashcards.
 *
 * ## Features
 *
 * - Normalize words and phrases to their lemma (singular nominative,
 *   infinitive or positive form) with the grammatical article
 * - Two-stage case-insensitive duplicate detection (before and after
 *   lemmatization)
 * - Ordered bulk ingestion that never aborts on a single bad token
 * - Spreadsheet-style tab-separated store with full-snapshot replace for
 *   manual edits
 * - Semicolon-delimited flashcard export with `<br>` line breaks
 * - Multiple AI providers: Ollama (local), OpenAI, Anthropic, LM Studio
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lexeme`: Vocabulary record data model
 * - `store`: The vocabulary store (`store::sheet` for the TSV backend)
 * - `lemmatizer`: AI-backed word normalization:
 *   - `lemmatizer::prompt`: System-instruction construction
 *   - `lemmatizer::response`: Strict response grammar
 * - `ingestion`: Deduplicating ingestion pipeline
 * - `export`: Flashcard export
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for various LLM providers:
 *   - `providers::ollama`: Ollama API client
 *   - `providers::openai`: OpenAI API client
 *   - `providers::anthropic`: Anthropic API client
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod ingestion;
pub mod language_utils;
pub mod lemmatizer;
pub mod lexeme;
pub mod providers;
pub mod store;

// Re-export main types for easier usage
pub use app_config::Config;
pub use ingestion::{BatchReport, IngestionPipeline, TokenOutcome};
pub use lemmatizer::{Lemmatizer, LemmatizerService, Normalization};
pub use lexeme::{Article, LexemeRecord};
pub use store::{SheetStore, VocabStore};
pub use errors::{AppError, ProviderError, StoreError};
