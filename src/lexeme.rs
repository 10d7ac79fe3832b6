/*!
 * Data model for vocabulary entries.
 *
 * A `LexemeRecord` is one row of the vocabulary sheet: the dictionary form of
 * a German word together with its article, plural, translation and a pair of
 * example sentences.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StoreError;

/// Grammatical article of a German noun, or `-` for non-nouns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
    /// Sentinel for verbs, adjectives and phrases, rendered as `-`
    #[default]
    #[serde(rename = "-")]
    None,
}

impl Article {
    /// Whether this is one of the three noun articles
    pub fn is_noun_article(&self) -> bool {
        !matches!(self, Article::None)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
            Article::None => "-",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Article {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "der" => Ok(Article::Der),
            "die" => Ok(Article::Die),
            "das" => Ok(Article::Das),
            "-" => Ok(Article::None),
            other => Err(anyhow::anyhow!("Invalid article: {}", other)),
        }
    }
}

/// One vocabulary entry
///
/// Invariants: `word` is non-empty and unique within the store under
/// case-insensitive comparison; every field except `example_target` is
/// populated when a record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexemeRecord {
    /// Article of the word (`-` for non-nouns)
    pub article: Article,

    /// Dictionary root form (singular nominative, infinitive or positive form)
    pub word: String,

    /// Plural form, empty for non-nouns
    pub plural: String,

    /// Translation into the target language
    pub translation: String,

    /// Example sentence in the source language
    pub example_source: String,

    /// Example sentence in the target language, possibly empty
    pub example_target: String,
}

impl LexemeRecord {
    /// Create a new record from owned field values
    pub fn new(
        article: Article,
        word: impl Into<String>,
        plural: impl Into<String>,
        translation: impl Into<String>,
        example_source: impl Into<String>,
        example_target: impl Into<String>,
    ) -> Self {
        Self {
            article,
            word: word.into(),
            plural: plural.into(),
            translation: translation.into(),
            example_source: example_source.into(),
            example_target: example_target.into(),
        }
    }

    /// The word prefixed by its article, or the bare word for non-nouns
    pub fn display_word(&self) -> String {
        if self.article.is_noun_article() {
            format!("{} {}", self.article, self.word)
        } else {
            self.word.clone()
        }
    }

    /// Lowercase form of the word used for duplicate comparison
    pub fn word_key(&self) -> String {
        self.word.to_lowercase()
    }

    /// Convert to a positional sheet row
    pub fn to_row(&self) -> [String; 6] {
        [
            self.article.to_string(),
            self.word.clone(),
            self.plural.clone(),
            self.translation.clone(),
            self.example_source.clone(),
            self.example_target.clone(),
        ]
    }

    /// Build a record from a positional sheet row
    ///
    /// A missing sixth field is padded with an empty string; rows with fewer
    /// than five fields or an unknown article are rejected.
    pub fn from_row(fields: &[&str], line: usize) -> Result<Self, StoreError> {
        if fields.len() < 5 || fields.len() > 6 {
            return Err(StoreError::MalformedRow {
                line,
                reason: format!("expected 5 or 6 fields, got {}", fields.len()),
            });
        }

        let article = Article::from_str(fields[0]).map_err(|e| StoreError::MalformedRow {
            line,
            reason: e.to_string(),
        })?;

        let word = fields[1].trim();
        if word.is_empty() {
            return Err(StoreError::MalformedRow {
                line,
                reason: "empty word field".to_string(),
            });
        }

        Ok(Self {
            article,
            word: word.to_string(),
            plural: fields[2].trim().to_string(),
            translation: fields[3].trim().to_string(),
            example_source: fields[4].trim().to_string(),
            example_target: fields.get(5).map(|f| f.trim()).unwrap_or("").to_string(),
        })
    }
}
