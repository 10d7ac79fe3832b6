/*!
 * Tests for language utility functions
 */

use anyhow::Result;

use wortschatz::language_utils::{
    flag_glyph, get_language_name, normalize_to_part2t, validate_language_code,
};

#[test]
fn test_validate_language_code_withPart1Codes_shouldSucceed() {
    assert!(validate_language_code("de").is_ok());
    assert!(validate_language_code("hu").is_ok());
    assert!(validate_language_code("EN").is_ok());
}

#[test]
fn test_validate_language_code_withPart2Codes_shouldSucceed() {
    assert!(validate_language_code("deu").is_ok());
    assert!(validate_language_code("hun").is_ok());
    // ISO 639-2/B spelling
    assert!(validate_language_code("ger").is_ok());
}

#[test]
fn test_validate_language_code_withUnknownCode_shouldFail() {
    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("german").is_err());
    assert!(validate_language_code("").is_err());
}

#[test]
fn test_normalize_to_part2t_shouldMapPart1AndPart2B() -> Result<()> {
    assert_eq!(normalize_to_part2t("de")?, "deu");
    assert_eq!(normalize_to_part2t("ger")?, "deu");
    assert_eq!(normalize_to_part2t("hun")?, "hun");
    Ok(())
}

#[test]
fn test_get_language_name_shouldResolveEnglishNames() -> Result<()> {
    assert_eq!(get_language_name("de")?, "German");
    assert_eq!(get_language_name("hu")?, "Hungarian");
    assert_eq!(get_language_name("en")?, "English");
    Ok(())
}

#[test]
fn test_flag_glyph_withCountryLikeCodes_shouldBuildRegionalIndicators() {
    assert_eq!(flag_glyph("de"), "🇩🇪");
    assert_eq!(flag_glyph("hu"), "🇭🇺");
    assert_eq!(flag_glyph("fr"), "🇫🇷");
}

#[test]
fn test_flag_glyph_withOverriddenCodes_shouldUseOverride() {
    // English is not spoken in "EN"-land
    assert_eq!(flag_glyph("en"), "🇬🇧");
    assert_eq!(flag_glyph("ja"), "🇯🇵");
}

#[test]
fn test_flag_glyph_withThreeLetterCode_shouldResolveToTwoLetterFlag() {
    assert_eq!(flag_glyph("deu"), "🇩🇪");
    assert_eq!(flag_glyph("ger"), "🇩🇪");
}
