//! Pronunciation: from natural-language words to glyphs through IPA.
//!
//! - [`lang`]: language tags and the confidence-scored matcher
//! - [`dictionary`]: per-language pronunciation dictionaries
//! - [`transcribe`]: IPA symbols to glyphs, and syllable re-segmentation

pub mod dictionary;
pub mod lang;
pub mod transcribe;

use miette::Diagnostic;
use thiserror::Error;

pub use dictionary::{
    DictionaryDir, DictionarySource, EmbeddedDictionaries, PronunciationDictionary,
    PronunciationIndex, RawDictionary,
};
pub use lang::{Confidence, LanguageMatcher, LanguageTag};
pub use transcribe::{Transcriber, find_slashes, segment};

/// Errors from dictionary resolution and IPA transcription.
#[derive(Debug, Error, Diagnostic)]
pub enum IpaError {
    #[error("language \"{tag}\" not supported")]
    #[diagnostic(
        code(firstones::ipa::unsupported_language),
        help("`firstones info` lists the loaded dictionaries.")
    )]
    UnsupportedLanguage { tag: String },

    #[error("unknown word \"{word}\" in {language} dictionary")]
    #[diagnostic(
        code(firstones::ipa::word_not_found),
        help("Write the word as phonemes instead, e.g. \"firstones:SH-fEEt/R-All\".")
    )]
    WordNotFound { word: String, language: String },

    #[error("unknown IPA symbol {symbol:?} in \"{transcription}\"")]
    #[diagnostic(code(firstones::ipa::unknown_symbol))]
    UnknownSymbol { symbol: char, transcription: String },

    #[error("invalid language tag \"{tag}\"")]
    #[diagnostic(
        code(firstones::ipa::invalid_tag),
        help("Use a tag like \"en\", \"es\" or \"en-US\".")
    )]
    InvalidTag { tag: String },
}

/// Result type for pronunciation operations.
pub type IpaResult<T> = std::result::Result<T, IpaError>;
