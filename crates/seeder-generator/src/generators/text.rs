//! Free-text generators.

use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use rand::Rng;
use seeder_core::SeedValue;

/// Maximum length of a short-text value, so it fits a default `VARCHAR(255)`.
pub const SHORT_TEXT_MAX_LEN: usize = 255;

/// Generate a short sentence of 3 to 7 words.
pub fn generate_short_text<R: Rng>(rng: &mut R) -> SeedValue {
    let mut sentence: String = Sentence(3..8).fake_with_rng(rng);
    if sentence.len() > SHORT_TEXT_MAX_LEN {
        // lorem words are ASCII
        sentence.truncate(SHORT_TEXT_MAX_LEN);
    }
    SeedValue::Text(sentence)
}

/// Generate a paragraph of 2 to 4 sentences.
pub fn generate_long_text<R: Rng>(rng: &mut R) -> SeedValue {
    SeedValue::Text(Paragraph(2..5).fake_with_rng(rng))
}

/// Cut a text value down to `max_chars` characters.
pub fn truncate_to(value: SeedValue, max_chars: usize) -> SeedValue {
    match value {
        SeedValue::Text(s) if s.chars().count() > max_chars => {
            SeedValue::Text(s.chars().take(max_chars).collect())
        }
        other => other,
    }
}

/// Generate a single word.
pub fn generate_word<R: Rng>(rng: &mut R) -> SeedValue {
    SeedValue::Text(Word().fake_with_rng(rng))
}
