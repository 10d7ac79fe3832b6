/*!
 * Tab-separated sheet implementation of the vocabulary store.
 *
 * The backing file is plain TSV with a header row, so it opens directly in a
 * spreadsheet application for manual edits. Appends go to the end of the
 * file; `replace_all` rewrites the whole file in one call.
 */

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::StoreError;
use crate::lexeme::LexemeRecord;
use crate::store::{HEADERS, VocabStore};

/// File-backed vocabulary store
#[derive(Debug, Clone)]
pub struct SheetStore {
    /// Path of the backing TSV file
    path: PathBuf,
}

impl SheetStore {
    /// Create a store over the given file path
    ///
    /// The file is not created until the first append or replace.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render one record as a TSV line
    ///
    /// Field content is sanitized so it cannot break the row grammar.
    fn format_row(record: &LexemeRecord) -> String {
        record
            .to_row()
            .iter()
            .map(|f| sanitize_field(f))
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// Whether the backing file is missing or empty
    fn is_empty_file(&self) -> Result<bool, StoreError> {
        if !self.path.exists() {
            return Ok(true);
        }
        Ok(fs::metadata(&self.path)?.len() == 0)
    }
}

/// Collapse characters that would break the tab/newline row grammar
fn sanitize_field(field: &str) -> String {
    field
        .replace(['\t', '\n', '\r'], " ")
        .trim()
        .to_string()
}

impl VocabStore for SheetStore {
    fn read_all(&self) -> Result<Vec<LexemeRecord>, StoreError> {
        if self.is_empty_file()? {
            debug!("Store file {:?} is empty, returning empty snapshot", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut lines = content.lines().enumerate();

        // First line must be the header row
        match lines.next() {
            Some((_, header)) if header.split('\t').next() == Some(HEADERS[0]) => {}
            _ => return Err(StoreError::MissingHeader),
        }

        let mut records = Vec::new();
        for (idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            records.push(LexemeRecord::from_row(&fields, idx + 1)?);
        }

        Ok(records)
    }

    fn append(&self, record: &LexemeRecord) -> Result<(), StoreError> {
        let needs_header = self.is_empty_file()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(file, "{}", HEADERS.join("\t"))?;
        }
        writeln!(file, "{}", Self::format_row(record))?;

        debug!("Appended '{}' to store {:?}", record.word, self.path);
        Ok(())
    }

    fn replace_all(&self, records: &[LexemeRecord]) -> Result<(), StoreError> {
        let mut content = String::new();
        content.push_str(&HEADERS.join("\t"));
        content.push('\n');
        for record in records {
            content.push_str(&Self::format_row(record));
            content.push('\n');
        }

        fs::write(&self.path, content)?;
        debug!("Rewrote store {:?} with {} records", self.path, records.len());
        Ok(())
    }
}
