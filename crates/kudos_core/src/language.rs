//! Character-frequency language detection.

use crate::analysis::Language;

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Guess the language style of `text` from its script mix.
///
/// - more than 30% Devanagari characters: hindi
/// - more than 5% Devanagari and more than 20% ASCII letters: hindlish
/// - anything else (including empty text): english
pub fn detect_language(text: &str) -> Language {
    let total = text.chars().count();
    if total == 0 {
        return Language::English;
    }

    let devanagari = text.chars().filter(|c| is_devanagari(*c)).count();
    let latin = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

    let devanagari_pct = devanagari as f64 * 100.0 / total as f64;
    let latin_pct = latin as f64 * 100.0 / total as f64;

    if devanagari_pct > 30.0 {
        Language::Hindi
    } else if devanagari_pct > 5.0 && latin_pct > 20.0 {
        Language::Hindlish
    } else {
        Language::English
    }
}
