//! Glyph sources: where the raw glyph markup comes from.
//!
//! The registry does not care how glyph files are stored. A source only hands
//! over `(name, markup)` pairs; validation happens in [`GlyphRegistry`].
//!
//! [`GlyphRegistry`]: super::GlyphRegistry

use std::path::PathBuf;

use crate::error::{CatalogueError, CatalogueResult};

/// One glyph as read from its source, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGlyph {
    /// Name the glyph is stored under (file stem).
    pub name: String,
    /// The SVG fragment.
    pub markup: String,
}

impl RawGlyph {
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }
}

/// Anything that can list the glyph catalogue.
pub trait GlyphSource {
    /// Every glyph definition. Order does not matter.
    fn glyphs(&self) -> CatalogueResult<Vec<RawGlyph>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

macro_rules! embedded {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../data/glyphs/", $name, ".svg")))),*]
    };
}

/// The 37 glyphs compiled into the binary.
static EMBEDDED: &[(&str, &str)] = embedded![
    "B", "CH", "D", "DH", "F", "G", "H", "J", "K", "L", "M", "N", "NG", "P", "R", "S", "SH",
    "T", "TH", "V", "W", "Z", "ZH", "sAd", "All", "sAy", "pEt", "fEEt", "lIt", "I", "gOOd",
    "tOO", "gO", "hOUse", "fUn", "bOY", "Yes",
];

/// The catalogue shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedGlyphs;

impl GlyphSource for EmbeddedGlyphs {
    fn glyphs(&self) -> CatalogueResult<Vec<RawGlyph>> {
        Ok(EMBEDDED
            .iter()
            .map(|(name, markup)| RawGlyph::new(*name, *markup))
            .collect())
    }

    fn describe(&self) -> String {
        "embedded glyphs".into()
    }
}

/// A directory of `NAME.svg` files. Other files are ignored.
#[derive(Debug, Clone)]
pub struct GlyphDir {
    path: PathBuf,
}

impl GlyphDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GlyphSource for GlyphDir {
    fn glyphs(&self) -> CatalogueResult<Vec<RawGlyph>> {
        let read_err = |source| CatalogueError::GlyphSource {
            path: self.path.display().to_string(),
            source,
        };

        let mut glyphs = Vec::new();
        for entry in std::fs::read_dir(&self.path).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("svg") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let markup = std::fs::read_to_string(&path).map_err(|source| {
                CatalogueError::GlyphSource {
                    path: path.display().to_string(),
                    source,
                }
            })?;
            glyphs.push(RawGlyph::new(name, markup));
        }
        Ok(glyphs)
    }

    fn describe(&self) -> String {
        format!("glyph directory {}", self.path.display())
    }
}
