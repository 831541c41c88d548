//! Rich diagnostic error types for firstones.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives
//! (error codes, help text, source chains). [`FirstOnesError`] wraps them all so
//! binaries can report any failure with the full chain intact.
//!
//! Two families matter to callers:
//!
//! - [`CatalogueError`]: the glyph catalogue or a dictionary is malformed.
//!   Raised only while initializing; the process must not start.
//! - [`RenderError`]: one input word could not be converted. Aborts the
//!   whole render request, naming the offending word.

use miette::Diagnostic;
use thiserror::Error;

use crate::glyph::GlyphError;
use crate::ipa::IpaError;

/// Top-level error type for firstones.
#[derive(Debug, Error, Diagnostic)]
pub enum FirstOnesError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Catalogue errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogueError {
    #[error("failed to read glyphs from {path}")]
    #[diagnostic(
        code(firstones::catalogue::glyph_source),
        help("Check that the glyph directory exists and contains readable NAME.svg files.")
    )]
    GlyphSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("glyph name {name:?} is not usable")]
    #[diagnostic(
        code(firstones::catalogue::invalid_name),
        help("Glyph names may not be empty or contain whitespace, -, /, <, >, &, \" or \\.")
    )]
    InvalidName { name: String },

    #[error("glyph {name}: malformed markup: {message}")]
    #[diagnostic(
        code(firstones::catalogue::glyph_markup),
        help("A glyph file holds one element, usually a <g>, carrying the glyph attributes.")
    )]
    GlyphMarkup { name: String, message: String },

    #[error("glyph {name}: id \"{id}\" does not match the glyph name")]
    #[diagnostic(
        code(firstones::catalogue::id_mismatch),
        help("The first element of NAME.svg must carry id=\"glyph:NAME\".")
    )]
    IdMismatch { name: String, id: String },

    #[error("glyph {name}: missing attribute {attribute}")]
    #[diagnostic(
        code(firstones::catalogue::missing_attribute),
        help("Glyphs need id=\"glyph:NAME\", _fo_height=\"N\" and _fo_connector=\"true|false\".")
    )]
    MissingAttribute { name: String, attribute: String },

    #[error("glyph {name}: _fo_height \"{value}\" is not a non-negative integer")]
    #[diagnostic(
        code(firstones::catalogue::invalid_height),
        help("The height is the Y coordinate where the glyph ends, e.g. _fo_height=\"8\".")
    )]
    InvalidHeight { name: String, value: String },

    #[error("glyph {name}: _fo_connector \"{value}\" is not a boolean")]
    #[diagnostic(
        code(firstones::catalogue::invalid_connector),
        help("Use _fo_connector=\"true\" or _fo_connector=\"false\".")
    )]
    InvalidConnector { name: String, value: String },

    #[error("transcription table maps \"{symbol}\" to unknown glyph \"{glyph}\"")]
    #[diagnostic(
        code(firstones::catalogue::table_glyph),
        help("Every glyph named in the IPA tables must exist in the glyph catalogue.")
    )]
    TableGlyph { symbol: String, glyph: String },

    #[error("failed to read dictionary from {path}")]
    #[diagnostic(
        code(firstones::catalogue::dictionary_source),
        help("Check that the dictionary directory exists and contains readable LANG.txt files.")
    )]
    DictionarySource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary name \"{name}\" is not a valid language tag")]
    #[diagnostic(
        code(firstones::catalogue::invalid_language_tag),
        help("Dictionary files are named after their language, e.g. en_US.txt or es_MX.txt.")
    )]
    InvalidLanguageTag { name: String },

    #[error("more than one dictionary for language {tag}")]
    #[diagnostic(
        code(firstones::catalogue::duplicate_language),
        help("Keep a single dictionary file per language.")
    )]
    DuplicateLanguage { tag: String },

    #[error("{what} is empty")]
    #[diagnostic(
        code(firstones::catalogue::empty),
        help("At least one glyph and one dictionary are required.")
    )]
    Empty { what: String },
}

/// Result type for catalogue loading.
pub type CatalogueResult<T> = std::result::Result<T, CatalogueError>;

// ---------------------------------------------------------------------------
// Word resolution and rendering errors
// ---------------------------------------------------------------------------

/// Why a single word could not be turned into glyphs.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ipa(#[from] IpaError),
}

/// Result type for word resolution.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("word \"{word}\" is not safe for SVG: unsafe character {character:?}")]
    #[diagnostic(
        code(firstones::render::unsafe_input),
        help("Words may not contain <, >, &, \" or \\. Use \"/\" to separate syllables.")
    )]
    UnsafeInput { word: String, character: char },

    #[error("error converting \"{word}\" to glyphs")]
    #[diagnostic(code(firstones::render::word))]
    Word {
        word: String,
        #[source]
        #[diagnostic_source]
        source: ResolveError,
    },
}

/// Result type for rendering.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(firstones::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(firstones::config::parse),
        help("Check the TOML syntax in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("failed to serialize config: {message}")]
    #[diagnostic(code(firstones::config::serialize))]
    Serialize { message: String },
}

/// Result type for configuration.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience alias for functions returning firstones results.
pub type FirstOnesResult<T> = std::result::Result<T, FirstOnesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_error_converts_to_resolve_error() {
        let err: ResolveError = GlyphError::UnknownGlyph { name: "fE".into() }.into();
        assert!(matches!(err, ResolveError::Glyph(GlyphError::UnknownGlyph { .. })));
    }

    #[test]
    fn render_error_converts_to_top_level() {
        let err = RenderError::UnsafeInput {
            word: "<script>".into(),
            character: '<',
        };
        let top: FirstOnesError = err.into();
        assert!(matches!(top, FirstOnesError::Render(RenderError::UnsafeInput { .. })));
    }

    #[test]
    fn word_error_names_the_word_and_keeps_the_cause() {
        let err = RenderError::Word {
            word: "SH-fE".into(),
            source: GlyphError::UnknownGlyph { name: "fE".into() }.into(),
        };
        assert!(err.to_string().contains("SH-fE"));
        let cause = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(cause.as_deref(), Some("unknown glyph \"fE\""));
    }

    #[test]
    fn catalogue_messages_are_descriptive() {
        let err = CatalogueError::InvalidHeight {
            name: "SH".into(),
            value: "-3".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SH"));
        assert!(msg.contains("-3"));
    }
}
