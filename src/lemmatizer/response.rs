/*!
 * Response grammar for the lemmatizer.
 *
 * The service answers with free text that should contain exactly one data
 * line of six pipe-separated fields:
 *
 * ```text
 * Article | Word | Plural | Translation | Source Sentence | Target Sentence
 * ```
 *
 * Known deviations the grammar tolerates: an echoed header line before the
 * data, bare `|` instead of `" | "` as the delimiter, a missing sixth field,
 * and the article repeated inside the word field. Everything else is a
 * `ParseError`.
 */

use std::str::FromStr;

use crate::errors::ProviderError;
use crate::lexeme::{Article, LexemeRecord};

/// Marker token the service uses to signal non-word input
pub const INVALID_MARKER: &str = "INVALID";

/// Signature of an echoed header line
const HEADER_SIGNATURE: &str = "Article | Word";

/// Result of normalizing one token
#[derive(Debug, Clone, PartialEq)]
pub enum Normalization {
    /// A fully populated six-field record
    Valid(LexemeRecord),
    /// The service flagged the input as not a valid word
    Invalid,
}

/// Parse a raw service response into a normalization result
///
/// Responses that fit neither the record grammar nor the invalidity marker
/// are rejected as `ProviderError::ParseError`; the caller decides how to
/// absorb that (the pipeline turns it into a per-token rejection).
pub fn parse_response(raw: &str) -> Result<Normalization, ProviderError> {
    // The data line is the first non-empty line that is not a header echo
    let data_line = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.contains(HEADER_SIGNATURE))
        .ok_or_else(|| ProviderError::ParseError("response contains no data line".to_string()))?;

    if data_line.to_uppercase().contains(INVALID_MARKER) {
        return Ok(Normalization::Invalid);
    }

    // Tolerate both delimiter spellings the service is known to produce
    let mut fields: Vec<String> = if data_line.contains(" | ") {
        data_line.split(" | ").map(|f| f.trim().to_string()).collect()
    } else {
        data_line.split('|').map(|f| f.trim().to_string()).collect()
    };

    // The trailing example sentence is sometimes omitted
    if fields.len() == 5 {
        fields.push(String::new());
    }

    if fields.len() != 6 {
        return Err(ProviderError::ParseError(format!(
            "expected 6 fields in data line, got {}: '{}'",
            fields.len(),
            data_line
        )));
    }

    let article = Article::from_str(&fields[0])
        .map_err(|e| ProviderError::ParseError(e.to_string()))?;

    let word = repair_word_field(article, &fields[1]);
    if word.is_empty() {
        return Err(ProviderError::ParseError(format!(
            "empty word field in data line: '{}'",
            data_line
        )));
    }

    Ok(Normalization::Valid(LexemeRecord::new(
        article,
        word,
        fields[2].clone(),
        fields[3].clone(),
        fields[4].clone(),
        fields[5].clone(),
    )))
}

/// Strip a leading article from the word field
///
/// The service sometimes embeds the article inside the word slot ("der Hund"
/// instead of "Hund") despite the schema; when the resolved article is one of
/// the noun articles and prefixes the word, drop it.
fn repair_word_field(article: Article, word: &str) -> String {
    let word = word.trim();

    if article.is_noun_article() {
        let prefix = format!("{} ", article);
        let head = word.get(..prefix.len());
        if head.is_some_and(|h| h.eq_ignore_ascii_case(&prefix)) {
            return word[prefix.len()..].trim().to_string();
        }
    }

    word.to_string()
}
