/*!
 * End-to-end tests for the ingest-and-export workflow
 *
 * Exercises the full core path: bulk ingestion through the pipeline against
 * a real sheet store on disk, followed by the flashcard export, without any
 * external API calls.
 */

use anyhow::Result;

use wortschatz::export::{to_delimited, to_flashcards, CardLabels, LINE_BREAK};
use wortschatz::ingestion::{IngestionPipeline, TokenOutcome};
use wortschatz::store::{SheetStore, VocabStore};

use crate::common::mock_lemmatizer::MockLemmatizer;
use crate::common::{create_temp_dir, hund_record, katze_record, laufen_record};

#[tokio::test]
async fn test_workflow_ingestThenExport_shouldProduceOneCardPerRecord() -> Result<()> {
    let dir = create_temp_dir()?;
    let store = SheetStore::new(dir.path().join("vocab.tsv"));
    let lemmatizer = MockLemmatizer::new()
        .with_record("Hund", hund_record())
        .with_record("laufen", laufen_record())
        .with_record("Katze", katze_record());

    let pipeline = IngestionPipeline::new(&store, &lemmatizer);
    let tokens = vec![
        "Hund".to_string(),
        "laufen".to_string(),
        "xyzzy".to_string(),
        "Katze".to_string(),
    ];
    let report = pipeline.ingest_batch(&tokens).await?;
    assert_eq!(report.accepted, 3);

    let records = store.read_all()?;
    assert_eq!(records.len(), 3);

    let cards = to_flashcards(&records, &CardLabels::for_languages("de", "hu"));
    assert_eq!(cards.len(), records.len());
    assert_eq!(cards[0].front, "der Hund");
    assert_eq!(cards[1].front, "laufen");
    assert_eq!(cards[2].front, "die Katze");

    let output = to_delimited(&cards);
    assert_eq!(output.lines().count(), 3);
    assert!(output.contains(LINE_BREAK));
    Ok(())
}

#[tokio::test]
async fn test_workflow_secondRunOverPersistedStore_shouldBeIdempotent() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("vocab.tsv");
    let tokens = vec!["Hund".to_string(), "Katze".to_string()];

    // First run persists both words
    {
        let store = SheetStore::new(&path);
        let lemmatizer = MockLemmatizer::new()
            .with_record("Hund", hund_record())
            .with_record("Katze", katze_record());
        let pipeline = IngestionPipeline::new(&store, &lemmatizer);
        assert_eq!(pipeline.ingest_batch(&tokens).await?.accepted, 2);
    }

    // A fresh pipeline over the same file accepts nothing and never calls
    // the service
    let store = SheetStore::new(&path);
    let lemmatizer = MockLemmatizer::new()
        .with_record("Hund", hund_record())
        .with_record("Katze", katze_record());
    let pipeline = IngestionPipeline::new(&store, &lemmatizer);

    let report = pipeline.ingest_batch(&tokens).await?;
    assert_eq!(report.accepted, 0);
    assert_eq!(lemmatizer.call_count(), 0);
    assert_eq!(store.read_all()?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_workflow_manualEditThenIngest_shouldSeeEditedSnapshot() -> Result<()> {
    let dir = create_temp_dir()?;
    let store = SheetStore::new(dir.path().join("vocab.tsv"));
    let lemmatizer = MockLemmatizer::new()
        .with_record("Hund", hund_record())
        .with_record("Katze", katze_record());

    let pipeline = IngestionPipeline::new(&store, &lemmatizer);
    pipeline.ingest("Hund").await?;
    pipeline.ingest("Katze").await?;

    // External edit flow: drop "Hund" through replace_all
    let records = store.read_all()?;
    let edited: Vec<_> = records.into_iter().filter(|r| r.word != "Hund").collect();
    store.replace_all(&edited)?;

    // "Hund" is ingestable again after the edit
    let outcome = pipeline.ingest("Hund").await?;
    assert!(matches!(outcome, TokenOutcome::Accepted(_)));

    let words: Vec<String> = store.read_all()?.into_iter().map(|r| r.word).collect();
    assert_eq!(words, vec!["Katze".to_string(), "Hund".to_string()]);
    Ok(())
}
