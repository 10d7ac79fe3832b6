/*!
 * Tests for the vocabulary data model
 */

use std::str::FromStr;

use wortschatz::lexeme::{Article, LexemeRecord};

use crate::common::{hund_record, laufen_record};

#[test]
fn test_article_from_str_withKnownArticles_shouldParse() {
    assert_eq!(Article::from_str("der").unwrap(), Article::Der);
    assert_eq!(Article::from_str("Die").unwrap(), Article::Die);
    assert_eq!(Article::from_str(" DAS ").unwrap(), Article::Das);
    assert_eq!(Article::from_str("-").unwrap(), Article::None);
}

#[test]
fn test_article_from_str_withUnknownToken_shouldFail() {
    assert!(Article::from_str("le").is_err());
    assert!(Article::from_str("").is_err());
}

#[test]
fn test_article_display_shouldRoundTripThroughFromStr() {
    for article in [Article::Der, Article::Die, Article::Das, Article::None] {
        let rendered = article.to_string();
        assert_eq!(Article::from_str(&rendered).unwrap(), article);
    }
}

#[test]
fn test_display_word_withNoun_shouldIncludeArticle() {
    assert_eq!(hund_record().display_word(), "der Hund");
}

#[test]
fn test_display_word_withVerb_shouldOmitArticle() {
    assert_eq!(laufen_record().display_word(), "laufen");
}

#[test]
fn test_word_key_shouldLowercaseUmlauts() {
    let record = LexemeRecord::new(Article::Der, "Äpfel", "", "almák", "", "");
    assert_eq!(record.word_key(), "äpfel");
}

#[test]
fn test_to_row_shouldPreserveFieldOrder() {
    let row = hund_record().to_row();
    assert_eq!(row[0], "der");
    assert_eq!(row[1], "Hund");
    assert_eq!(row[2], "Hunde");
    assert_eq!(row[3], "kutya");
    assert_eq!(row[4], "Der Hund bellt.");
    assert_eq!(row[5], "A kutya ugat.");
}

#[test]
fn test_from_row_withSixFields_shouldBuildRecord() {
    let fields = ["der", "Hund", "Hunde", "kutya", "Der Hund bellt.", "A kutya ugat."];
    let record = LexemeRecord::from_row(&fields, 2).unwrap();
    assert_eq!(record, hund_record());
}

#[test]
fn test_from_row_withFiveFields_shouldPadExampleTarget() {
    let fields = ["das", "Haus", "Häuser", "ház", "Das Haus ist groß."];
    let record = LexemeRecord::from_row(&fields, 3).unwrap();
    assert_eq!(record.example_target, "");
    assert_eq!(record.word, "Haus");
}

#[test]
fn test_from_row_withTooFewFields_shouldFail() {
    let fields = ["der", "Hund", "Hunde"];
    assert!(LexemeRecord::from_row(&fields, 4).is_err());
}

#[test]
fn test_from_row_withUnknownArticle_shouldFail() {
    let fields = ["los", "Hund", "Hunde", "kutya", "Der Hund bellt."];
    assert!(LexemeRecord::from_row(&fields, 5).is_err());
}

#[test]
fn test_from_row_withEmptyWord_shouldFail() {
    let fields = ["der", "  ", "Hunde", "kutya", "Der Hund bellt."];
    assert!(LexemeRecord::from_row(&fields, 6).is_err());
}
