/*!
 * Flashcard export.
 *
 * Reshapes stored records into front/back card pairs and serializes them as
 * semicolon-delimited text for the downstream flashcard importer. Card backs
 * use an HTML `<br>` marker for line breaks, so the field delimiter never
 * collides with content even when sentences contain commas.
 */

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::language_utils::flag_glyph;
use crate::lexeme::LexemeRecord;

/// Line-break marker understood by the flashcard importer
pub const LINE_BREAK: &str = "<br>";

/// Field delimiter of the export file
pub const DELIMITER: char = ';';

/// One flashcard
#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    /// Card front: the word, with its article for nouns
    pub front: String,
    /// Card back: translation, plural and example sentences
    pub back: String,
}

/// Labels used on card backs
#[derive(Debug, Clone)]
pub struct CardLabels {
    /// Glyph prefixed to the source-language example sentence
    pub source_flag: String,
    /// Glyph prefixed to the target-language example sentence
    pub target_flag: String,
}

impl CardLabels {
    /// Resolve labels from the configured language codes
    pub fn for_languages(source_code: &str, target_code: &str) -> Self {
        Self {
            source_flag: flag_glyph(source_code),
            target_flag: flag_glyph(target_code),
        }
    }
}

impl Default for CardLabels {
    fn default() -> Self {
        Self::for_languages("de", "hu")
    }
}

/// Reshape records into flashcards, in store order
pub fn to_flashcards(records: &[LexemeRecord], labels: &CardLabels) -> Vec<Flashcard> {
    records.iter().map(|r| to_flashcard(r, labels)).collect()
}

/// Build one card from one record
fn to_flashcard(record: &LexemeRecord, labels: &CardLabels) -> Flashcard {
    let front = record.display_word();

    let mut back_parts = vec![record.translation.clone()];
    // "-" is the placeholder the service emits for non-noun plurals
    if !record.plural.is_empty() && record.plural != "-" {
        back_parts.push(format!("Plural: {}", record.plural));
    }
    if !record.example_source.is_empty() {
        back_parts.push(format!("{} {}", labels.source_flag, record.example_source));
    }
    if !record.example_target.is_empty() {
        back_parts.push(format!("{} {}", labels.target_flag, record.example_target));
    }

    Flashcard {
        front,
        back: back_parts.join(LINE_BREAK),
    }
}

/// Serialize cards as semicolon-delimited text, two columns, no header
///
/// Embedded semicolons in content are softened to commas so the delimiter
/// stays unambiguous for the importer.
pub fn to_delimited(cards: &[Flashcard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&sanitize_field(&card.front));
        out.push(DELIMITER);
        out.push_str(&sanitize_field(&card.back));
        out.push('\n');
    }
    out
}

fn sanitize_field(field: &str) -> String {
    field.replace(DELIMITER, ",").replace(['\n', '\r'], " ")
}

/// Write the flashcard export for the given records
pub fn write_flashcards<P: AsRef<Path>>(
    path: P,
    records: &[LexemeRecord],
    labels: &CardLabels,
) -> Result<()> {
    let cards = to_flashcards(records, labels);
    let content = to_delimited(&cards);

    fs::write(path.as_ref(), content)
        .context(format!("Failed to write flashcard export: {:?}", path.as_ref()))?;

    info!("Exported {} flashcards to {:?}", cards.len(), path.as_ref());
    Ok(())
}
