//! Explicit phoneme notation: `SH-fEEt/R-All`.
//!
//! Syllables are separated by `/`, glyph names within a syllable by `-`.
//! Empty tokens are dropped, so `SH-fEEt-/-R-All`, `SH-fEEt/R-All` and
//! `/SH-fEEt//R-All/` all mean the same thing.

use super::registry::GlyphRegistry;
use super::{GlyphResult, Syllable, Word};

pub const SYLLABLE_SEPARATOR: char = '/';
pub const PHONEME_SEPARATOR: char = '-';

/// Parse phoneme notation into a [`Word`].
///
/// The first unknown glyph name aborts the parse.
pub fn parse_phonemes(registry: &GlyphRegistry, phonemes: &str) -> GlyphResult<Word> {
    let mut word = Vec::new();
    for part in phonemes.split(SYLLABLE_SEPARATOR) {
        let syllable = part
            .split(PHONEME_SEPARATOR)
            .filter(|p| !p.is_empty())
            .map(|p| registry.lookup(p))
            .collect::<GlyphResult<Vec<_>>>()?;
        if !syllable.is_empty() {
            word.push(Syllable(syllable));
        }
    }
    Ok(Word(word))
}
