// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, LemmatizerProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod export;
mod ingestion;
mod language_utils;
mod lemmatizer;
mod lexeme;
mod providers;
mod store;

/// CLI Wrapper for LemmatizerProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLemmatizerProvider {
    Ollama,
    OpenAI,
    Anthropic,
    LMStudio,
}

impl From<CliLemmatizerProvider> for LemmatizerProvider {
    fn from(cli_provider: CliLemmatizerProvider) -> Self {
        match cli_provider {
            CliLemmatizerProvider::Ollama => LemmatizerProvider::Ollama,
            CliLemmatizerProvider::OpenAI => LemmatizerProvider::OpenAI,
            CliLemmatizerProvider::Anthropic => LemmatizerProvider::Anthropic,
            CliLemmatizerProvider::LMStudio => LemmatizerProvider::LMStudio,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one or more words and add them to the vocabulary store
    Add {
        /// Words or phrases to ingest, in order
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,
    },

    /// Ingest a word-list file (words separated by commas or line breaks)
    Batch {
        /// Path of the word-list file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the vocabulary store as a table
    List,

    /// Export the store as semicolon-delimited flashcards
    Export {
        /// Output file path
        #[arg(short, long, default_value = "flashcards.csv")]
        output: PathBuf,
    },

    /// Generate shell completions for wortschatz
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// wortschatz - German vocabulary builder
///
/// Normalizes German words to their dictionary form with an AI provider and
/// keeps them in a spreadsheet-style vocabulary store, exportable as
/// flashcards.
#[derive(Parser, Debug)]
#[command(name = "wortschatz")]
#[command(version = "0.1.0")]
#[command(about = "AI-assisted German vocabulary builder")]
#[command(long_about = "wortschatz normalizes German words to their dictionary form using an AI \
provider, stores them with translations and example sentences, and exports flashcards.

EXAMPLES:
    wortschatz add Hund                         # Analyze and store one word
    wortschatz add Hunde laufen schnell         # Ingest several words in order
    wortschatz batch words.txt                  # Ingest a word-list file
    wortschatz list                             # Show the stored vocabulary
    wortschatz export -o cards.csv              # Write the flashcard export
    wortschatz -p openai -m gpt-4o-mini add Katze
    wortschatz completions bash > wortschatz.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED PROVIDERS:
    ollama    - Local Ollama server (default: llama3.2:3b)
    openai    - OpenAI API (requires API key)
    anthropic - Anthropic Claude API (requires API key)
    lmstudio  - LM Studio local server (OpenAI-compatible on http://localhost:1234/v1)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Lemmatizer provider to use
    #[arg(short, long, value_enum, global = true)]
    provider: Option<CliLemmatizerProvider>,

    /// Model name to use for lemmatization
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let emoji = Self::get_emoji_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Completions need no configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "wortschatz", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(to_level_filter(&cmd_log_level.clone().into()));
    }

    let config = load_config(&cli)?;

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    match &cli.command {
        Commands::Add { words } => controller.run_add(words).await,
        Commands::Batch { file } => controller.run_batch(file).await,
        Commands::List => controller.run_list(),
        Commands::Export { output } => controller.run_export(output),
        Commands::Completions { .. } => Ok(()),
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Load the configuration file, creating a default one when missing, and
/// apply command-line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = &cli.config_path;

    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &cli.provider {
        config.lemmatizer.provider = provider.clone().into();
    }

    if let Some(model) = &cli.model {
        // Find the provider config and update the model
        let provider_str = config.lemmatizer.provider.to_lowercase_string();
        if let Some(provider_config) = config.lemmatizer.available_providers.iter_mut()
            .find(|p| p.provider_type == provider_str) {
            provider_config.model = model.clone();
        }
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
