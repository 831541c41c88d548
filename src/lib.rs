// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # firstones
//!
//! Transliterates words into the First Ones script from *She-Ra and the
//! Princesses of Power*, and renders them as SVG.
//!
//! ## Architecture
//!
//! - **Glyphs** (`glyph`): the validated glyph catalogue and `SH-fEEt/R-All`
//!   phoneme notation
//! - **Pronunciation** (`ipa`): per-language IPA dictionaries, language tag
//!   matching, and IPA-to-glyph transcription with syllable re-segmentation
//! - **Resolution** (`resolve`): one input token to syllables of glyphs
//! - **Rendering** (`svg`): word-line geometry and checked SVG composition
//! - **Engine** (`engine`): owns the read-only tables, explicit initialization
//!
//! ## Data
//!
//! The glyph catalogue is embedded in full. The embedded English (`en_US`)
//! and Spanish (`es_MX`) dictionaries are small samples: character names
//! and a few dozen common words. For full coverage, point
//! `dictionary_dir` in the configuration at a directory of open-dict-data
//! `LANG.txt` files, such as `en_US.txt` and `es_MX.txt` from
//! <https://github.com/open-dict-data/ipa-dict>.
//!
//! ## Library usage
//!
//! ```no_run
//! use firstones::engine::Engine;
//!
//! let engine = Engine::embedded().unwrap();
//! let rendered = engine.render_words(&["she-ra", "es:ca/sa"], false).unwrap();
//! println!("{}", rendered.document);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod glyph;
pub mod ipa;
pub mod resolve;
#[cfg(feature = "server")]
pub mod server;
pub mod svg;
