//! First Ones glyphs: the catalogue and the phoneme notation that refers to it.
//!
//! Every glyph is a small SVG fragment stored in its own file, named after
//! the glyph (e.g. `fEEt.svg`). The names follow the official First Ones PDF.
//!
//! ## Geometry
//!
//! On the X axis glyphs are centered on `x = 0`, so part of them lies on
//! `x < 0`. Widths vary but never exceed [`MAX_GLYPH_WIDTH`].
//! On the Y axis glyphs begin at `y = 0` and flow downwards. The connection
//! point at the top is `(0, 0)`, the one at the bottom is `(0, height)`.
//!
//! ## Components
//!
//! - [`registry`]: the immutable [`GlyphRegistry`] built once at startup
//! - [`source`]: where glyph definitions come from (embedded or a directory)
//! - [`phonemes`]: `SH-fEEt/R-All` notation → [`Word`]

pub mod phonemes;
pub mod registry;
pub mod source;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

use crate::svg::Svg;

pub use phonemes::parse_phonemes;
pub use registry::GlyphRegistry;
pub use source::{EmbeddedGlyphs, GlyphDir, GlyphSource, RawGlyph};

/// No glyph is wider than this. Only used to pick spacing constants.
pub const MAX_GLYPH_WIDTH: u32 = 16;

/// Errors that can occur during glyph lookups.
#[derive(Debug, Error, Diagnostic)]
pub enum GlyphError {
    #[error("unknown glyph \"{name}\"")]
    #[diagnostic(
        code(firstones::glyph::unknown),
        help(
            "Phonemes must be glyph names such as \"SH\", \"fEEt\" or \"All\", \
             separated by \"-\" within a syllable and by \"/\" between syllables. \
             Run `firstones dump-glyphs` to see every known glyph."
        )
    )]
    UnknownGlyph { name: String },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// A single glyph of the First Ones script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: String,
    definition: Svg,
    reference: Svg,
    height: u32,
    connector: bool,
}

impl Glyph {
    pub(crate) fn new(
        name: impl Into<String>,
        definition: Svg,
        height: u32,
        connector: bool,
    ) -> Self {
        let name = name.into();
        let reference = Svg::trusted(format!(r##"<use href="#glyph:{name}" />"##));
        Self {
            name,
            definition,
            reference,
            height,
            connector,
        }
    }

    /// Glyph name, e.g. `"fEEt"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full definition, carrying `id="glyph:NAME"`.
    pub fn definition(&self) -> &Svg {
        &self.definition
    }

    /// A `<use>` element pointing at the definition.
    pub fn reference(&self) -> &Svg {
        &self.reference
    }

    /// Vertical extent when stacked in a syllable.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Connectors need no vertical line before or after them.
    pub fn is_connector(&self) -> bool {
        self.connector
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// Glyphs stacked top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable(pub Vec<Arc<Glyph>>);

impl Syllable {
    /// Total height once stacked, including the connecting lines that
    /// precede non-connector glyphs.
    pub fn stacked_height(&self, connector_line: u32) -> u32 {
        let mut height = 0;
        let mut prev_connector = false;
        for glyph in &self.0 {
            if !glyph.is_connector() && !prev_connector {
                height += connector_line;
            }
            height += glyph.height();
            prev_connector = glyph.is_connector();
        }
        height
    }
}

impl Deref for Syllable {
    type Target = [Arc<Glyph>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Arc<Glyph>>> for Syllable {
    fn from(glyphs: Vec<Arc<Glyph>>) -> Self {
        Self(glyphs)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|g| g.name()).collect();
        f.write_str(&names.join("-"))
    }
}

/// Syllables of a word, in reading order.
///
/// A word with no syllables is empty and is skipped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word(pub Vec<Syllable>);

impl Word {
    /// Flat view over every glyph, ignoring syllable boundaries.
    pub fn glyphs(&self) -> impl Iterator<Item = &Arc<Glyph>> {
        self.0.iter().flat_map(|s| s.0.iter())
    }
}

impl Deref for Word {
    type Target = [Syllable];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Syllable>> for Word {
    fn from(syllables: Vec<Syllable>) -> Self {
        Self(syllables)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let syllables: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        f.write_str(&syllables.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(name: &str, height: u32, connector: bool) -> Arc<Glyph> {
        Arc::new(Glyph::new(
            name,
            Svg::trusted(format!(r#"<g id="glyph:{name}"></g>"#)),
            height,
            connector,
        ))
    }

    #[test]
    fn reference_points_at_definition() {
        let g = glyph("fEEt", 10, true);
        assert_eq!(g.reference().as_str(), r##"<use href="#glyph:fEEt" />"##);
        assert_eq!(g.to_string(), "[fEEt]");
    }

    #[test]
    fn word_display_joins_names() {
        let word = Word(vec![
            Syllable(vec![glyph("SH", 10, false), glyph("fEEt", 10, true)]),
            Syllable(vec![glyph("R", 6, false), glyph("All", 8, true)]),
        ]);
        assert_eq!(word.to_string(), "SH-fEEt/R-All");
        assert_eq!(word.glyphs().count(), 4);
    }

    #[test]
    fn stacked_height_counts_connector_lines() {
        // Line before SH, none before fEEt (connector), none before R
        // (follows a connector), line before T.
        let s = Syllable(vec![
            glyph("SH", 10, false),
            glyph("fEEt", 10, true),
            glyph("R", 6, false),
            glyph("T", 6, false),
        ]);
        assert_eq!(s.stacked_height(3), 3 + 10 + 10 + 6 + 3 + 6);
    }

    #[test]
    fn leading_connector_needs_no_line() {
        let s = Syllable(vec![glyph("H", 4, true), glyph("Yes", 4, true)]);
        assert_eq!(s.stacked_height(3), 8);
    }
}
