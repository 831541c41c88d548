//! Word resolution: one input token to a [`Word`].
//!
//! Tokens are tried, in order, as:
//!
//! 1. `prefix:rest`. An empty prefix or `firstones` means `rest` is phoneme
//!    notation; any other prefix is a language tag and `rest` is looked up in
//!    that language only.
//! 2. A word in each fallback language (Spanish, then English by default).
//! 3. Phoneme notation.
//!
//! In a dictionary word, `/` marks a syllable boundary: `ca/sa`. The
//! markers are removed before the lookup and then mapped onto the glyphs
//! approximately, see [`segment`].

use std::sync::Arc;

use crate::error::ResolveResult;
use crate::glyph::{GlyphRegistry, Word, parse_phonemes};
use crate::ipa::{PronunciationIndex, Transcriber, find_slashes, segment};

/// Prefix that forces phoneme notation, as in `firstones:SH-fEEt`.
pub const PHONEME_PREFIX: &str = "firstones";

/// Languages tried, in order, for unprefixed tokens.
pub fn default_fallback_languages() -> Vec<String> {
    vec!["es".to_string(), "en".to_string()]
}

/// Resolves tokens against shared, read-only tables.
#[derive(Debug, Clone)]
pub struct WordResolver {
    registry: Arc<GlyphRegistry>,
    index: Arc<PronunciationIndex>,
    transcriber: Arc<Transcriber>,
    fallback_languages: Vec<String>,
}

impl WordResolver {
    pub fn new(
        registry: Arc<GlyphRegistry>,
        index: Arc<PronunciationIndex>,
        transcriber: Arc<Transcriber>,
        fallback_languages: Vec<String>,
    ) -> Self {
        Self {
            registry,
            index,
            transcriber,
            fallback_languages,
        }
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    pub fn fallback_languages(&self) -> &[String] {
        &self.fallback_languages
    }

    /// Resolve a token using the full policy.
    ///
    /// An explicit language prefix is binding: its failure is returned and
    /// no fallback is attempted.
    pub fn resolve(&self, token: &str) -> ResolveResult<Word> {
        if let Some((prefix, rest)) = token.split_once(':') {
            if prefix.is_empty() || prefix == PHONEME_PREFIX {
                return self.phonemes(rest);
            }
            return self.in_language(rest, prefix);
        }

        for language in &self.fallback_languages {
            match self.in_language(token, language) {
                Ok(word) => return Ok(word),
                Err(e) => tracing::debug!(token, language = %language, error = %e, "fallback miss"),
            }
        }

        self.phonemes(token)
    }

    /// Phoneme notation only.
    pub fn phonemes(&self, notation: &str) -> ResolveResult<Word> {
        let word = parse_phonemes(&self.registry, notation)?;
        tracing::debug!(notation, word = %word, "resolved phonemes");
        Ok(word)
    }

    /// Dictionary lookup in one language, then transcription.
    pub fn in_language(&self, word: &str, language: &str) -> ResolveResult<Word> {
        let dictionary = self.index.resolve(language)?;

        let boundaries = find_slashes(word);
        let bare = word.replace('/', "");

        let transcription = dictionary.lookup(&bare)?;
        let glyphs = self.transcriber.transcribe(transcription)?;
        let resolved = segment(glyphs, &boundaries, bare.chars().count());
        tracing::debug!(
            word,
            language = %dictionary.language(),
            ipa = transcription,
            glyphs = %resolved,
            "resolved word"
        );
        Ok(resolved)
    }
}
