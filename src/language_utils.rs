use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating ISO 639-1 (2-letter) and
/// ISO 639-2 (3-letter) language codes, resolving a code to its English name
/// for prompt construction, and mapping a code to the flag glyph used as an
/// example-sentence label in flashcard exports.
/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        // ISO 639-2/B codes that differ from ISO 639-2/T
        match normalized_code.as_str() {
            "ger" => return Ok("deu".to_string()),
            "fre" => return Ok("fra".to_string()),
            "dut" => return Ok("nld".to_string()),
            "gre" => return Ok("ell".to_string()),
            "cze" => return Ok("ces".to_string()),
            "rum" => return Ok("ron".to_string()),
            "slo" => return Ok("slk".to_string()),
            _ => {}
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Validate that a code is a known ISO 639-1 or ISO 639-2 language code
pub fn validate_language_code(code: &str) -> Result<()> {
    normalize_to_part2t(code).map(|_| ())
}

/// Get the English language name from a code (e.g. "hu" -> "Hungarian")
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Flag overrides for languages whose ISO code is not a country code
static FLAG_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "\u{1F1EC}\u{1F1E7}"), // 🇬🇧
        ("da", "\u{1F1E9}\u{1F1F0}"), // 🇩🇰
        ("sv", "\u{1F1F8}\u{1F1EA}"), // 🇸🇪
        ("cs", "\u{1F1E8}\u{1F1FF}"), // 🇨🇿
        ("el", "\u{1F1EC}\u{1F1F7}"), // 🇬🇷
        ("uk", "\u{1F1FA}\u{1F1E6}"), // 🇺🇦
        ("ja", "\u{1F1EF}\u{1F1F5}"), // 🇯🇵
        ("zh", "\u{1F1E8}\u{1F1F3}"), // 🇨🇳
        ("ko", "\u{1F1F0}\u{1F1F7}"), // 🇰🇷
    ])
});

/// Flag glyph for a language code, used to label example sentences in exports
///
/// Falls back to the regional-indicator pair built from the 2-letter code
/// (correct for languages like de/hu/fr/it/es where code and country
/// coincide), or to the uppercased code when no 2-letter form exists.
pub fn flag_glyph(code: &str) -> String {
    let normalized = code.trim().to_lowercase();

    let part1 = if normalized.len() == 2 {
        normalized.clone()
    } else if let Ok(part2t) = normalize_to_part2t(&normalized) {
        match Language::from_639_3(&part2t).and_then(|l| l.to_639_1()) {
            Some(p1) => p1.to_string(),
            None => return normalized.to_uppercase(),
        }
    } else {
        return normalized.to_uppercase();
    };

    if let Some(flag) = FLAG_OVERRIDES.get(part1.as_str()) {
        return (*flag).to_string();
    }

    // Regional indicator symbols are 0x1F1E6 ('A') .. 0x1F1FF ('Z')
    part1
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| {
            let offset = (c.to_ascii_uppercase() as u32) - ('A' as u32);
            char::from_u32(0x1F1E6 + offset).unwrap_or(c)
        })
        .collect()
}
