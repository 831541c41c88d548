//! TOML configuration.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! glyph_dir = "/usr/share/firstones/glyphs"
//! dictionary_dir = "/usr/share/open-dict-data"
//! fallback_languages = ["es", "en"]
//! show_grid = false
//! max_words = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::resolve::default_fallback_languages;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstOnesConfig {
    /// Directory of `NAME.svg` glyphs. Embedded glyphs if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_dir: Option<PathBuf>,
    /// Directory of `LANG.txt` dictionaries. If unset, the embedded samples,
    /// which only cover character names and common words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_dir: Option<PathBuf>,
    /// Languages tried, in order, for words without a prefix.
    #[serde(default = "default_fallback_languages")]
    pub fallback_languages: Vec<String>,
    /// Draw the debugging grid.
    #[serde(default)]
    pub show_grid: bool,
    /// Most words accepted in one HTTP request.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

fn default_max_words() -> usize {
    10
}

impl Default for FirstOnesConfig {
    fn default() -> Self {
        Self {
            glyph_dir: None,
            dictionary_dir: None,
            fallback_languages: default_fallback_languages(),
            show_grid: false,
            max_words: default_max_words(),
        }
    }
}

impl FirstOnesConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}
