/*!
 * The vocabulary store.
 *
 * The store is the sole long-lived owner of `LexemeRecord`s. It exposes a
 * bulk read/append/replace interface with spreadsheet semantics: insertion
 * order is preserved on read, the backing table carries a header row, and
 * `replace_all` overwrites the full snapshot (there is no partial update).
 */

use crate::errors::StoreError;
use crate::lexeme::LexemeRecord;

/// Column names of the vocabulary sheet, in positional order
pub const HEADERS: [&str; 6] = [
    "Article",
    "Word",
    "Plural",
    "Translation",
    "Sentence_Source",
    "Sentence_Target",
];

/// Common interface for vocabulary stores
///
/// Concurrent use by multiple writers is unsupported; this is a single-user
/// tool and the store carries no locking discipline.
pub trait VocabStore: Send + Sync {
    /// Read the full snapshot of the store, in insertion order
    ///
    /// An empty or missing backing table yields an empty vec; the schema
    /// columns stay defined as [`HEADERS`].
    fn read_all(&self) -> Result<Vec<LexemeRecord>, StoreError>;

    /// Append one record to the end of the store
    fn append(&self, record: &LexemeRecord) -> Result<(), StoreError>;

    /// Overwrite the store with a new full snapshot
    fn replace_all(&self, records: &[LexemeRecord]) -> Result<(), StoreError>;
}

pub mod sheet;

pub use sheet::SheetStore;
