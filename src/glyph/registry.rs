//! The glyph registry: every known glyph, validated once and then read-only.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{CatalogueError, CatalogueResult};
use crate::svg::Svg;

use super::source::{GlyphSource, RawGlyph};
use super::{Glyph, GlyphError, GlyphResult};

const ID_PREFIX: &str = "glyph:";
const HEIGHT_ATTR: &str = "_fo_height";
const CONNECTOR_ATTR: &str = "_fo_connector";

/// Notation separators and markup characters, never part of a glyph name.
const RESERVED: [char; 7] = ['-', '/', '<', '>', '&', '"', '\\'];

/// Immutable catalogue of glyphs, keyed by name.
///
/// Names iterate in sorted order, so anything emitted from the registry
/// (the definitions block in particular) is reproducible.
#[derive(Debug, Clone, Default)]
pub struct GlyphRegistry {
    glyphs: BTreeMap<String, Arc<Glyph>>,
}

impl GlyphRegistry {
    /// Load and validate every glyph from `source`.
    ///
    /// Fails if any glyph's `id` does not match its name, its height is not
    /// a non-negative integer, its connector flag is not a boolean, or the
    /// source is empty.
    pub fn load(source: &dyn GlyphSource) -> CatalogueResult<Self> {
        let mut glyphs = BTreeMap::new();
        for raw in source.glyphs()? {
            let glyph = parse_glyph(&raw)?;
            glyphs.insert(raw.name, Arc::new(glyph));
        }
        if glyphs.is_empty() {
            return Err(CatalogueError::Empty {
                what: source.describe(),
            });
        }
        tracing::debug!(
            glyphs = glyphs.len(),
            source = %source.describe(),
            "loaded glyph catalogue"
        );
        Ok(Self { glyphs })
    }

    /// Look up a glyph by exact name.
    pub fn lookup(&self, name: &str) -> GlyphResult<Arc<Glyph>> {
        self.glyphs
            .get(name)
            .cloned()
            .ok_or_else(|| GlyphError::UnknownGlyph {
                name: name.to_string(),
            })
    }

    /// Look up a glyph that must exist.
    ///
    /// # Panics
    ///
    /// If `name` is not in the registry. Only for names the caller has
    /// already validated against this registry.
    pub fn glyph(&self, name: &str) -> Arc<Glyph> {
        match self.glyphs.get(name) {
            Some(glyph) => Arc::clone(glyph),
            None => panic!("glyph {name:?} missing from a validated registry"),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Glyph names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    /// Glyphs in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Glyph>> {
        self.glyphs.values()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

fn parse_glyph(raw: &RawGlyph) -> CatalogueResult<Glyph> {
    let name = &raw.name;
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || RESERVED.contains(&c)) {
        return Err(CatalogueError::InvalidName { name: name.clone() });
    }
    let markup = raw.markup.trim();
    let doc = roxmltree::Document::parse(markup).map_err(|e| CatalogueError::GlyphMarkup {
        name: name.clone(),
        message: e.to_string(),
    })?;
    let root = doc.root_element();

    let attr = |attribute: &str| {
        root.attribute(attribute)
            .ok_or_else(|| CatalogueError::MissingAttribute {
                name: name.clone(),
                attribute: attribute.to_string(),
            })
    };

    let id = attr("id")?;
    if id.strip_prefix(ID_PREFIX) != Some(name.as_str()) {
        return Err(CatalogueError::IdMismatch {
            name: name.clone(),
            id: id.to_string(),
        });
    }

    let height_value = attr(HEIGHT_ATTR)?;
    let height = height_value
        .parse::<u32>()
        .map_err(|_| CatalogueError::InvalidHeight {
            name: name.clone(),
            value: height_value.to_string(),
        })?;

    let connector_value = attr(CONNECTOR_ATTR)?;
    let connector = parse_bool(connector_value).ok_or_else(|| CatalogueError::InvalidConnector {
        name: name.clone(),
        value: connector_value.to_string(),
    })?;

    Ok(Glyph::new(
        name.clone(),
        Svg::trusted(markup),
        height,
        connector,
    ))
}

/// The usual spellings of a boolean in hand-edited files.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
