//! Engine facade: top-level API for firstones.
//!
//! The `Engine` owns the glyph registry, the pronunciation dictionaries and
//! the transcription tables. All of them are built once by
//! [`Engine::initialize`] and are read-only afterwards, so an engine can be
//! cloned and shared across threads freely.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::FirstOnesConfig;
use crate::error::{CatalogueResult, FirstOnesResult, RenderResult, ResolveResult};
use crate::glyph::{EmbeddedGlyphs, GlyphDir, GlyphRegistry, GlyphSource, Word};
use crate::ipa::{
    DictionaryDir, DictionarySource, EmbeddedDictionaries, PronunciationIndex, Transcriber,
};
use crate::resolve::WordResolver;
use crate::svg::{self, Rendered, Svg};

/// The First Ones transliteration and rendering engine.
#[derive(Debug, Clone)]
pub struct Engine {
    config: FirstOnesConfig,
    registry: Arc<GlyphRegistry>,
    index: Arc<PronunciationIndex>,
    resolver: WordResolver,
}

impl Engine {
    /// Load and validate every table.
    ///
    /// Any failure here means the data is inconsistent; nothing should be
    /// served from a partially loaded engine.
    pub fn initialize(
        glyphs: &dyn GlyphSource,
        dictionaries: &dyn DictionarySource,
        config: FirstOnesConfig,
    ) -> CatalogueResult<Self> {
        let registry = Arc::new(GlyphRegistry::load(glyphs)?);
        let transcriber = Arc::new(Transcriber::new(&registry)?);
        let index = Arc::new(PronunciationIndex::load(dictionaries)?);

        tracing::info!(
            glyphs = registry.len(),
            dictionaries = index.len(),
            glyph_source = %glyphs.describe(),
            dictionary_source = %dictionaries.describe(),
            "initialized firstones engine"
        );

        let resolver = WordResolver::new(
            Arc::clone(&registry),
            Arc::clone(&index),
            transcriber,
            config.fallback_languages.clone(),
        );
        Ok(Self {
            config,
            registry,
            index,
            resolver,
        })
    }

    /// Initialize from the sources named in `config`, embedded ones otherwise.
    pub fn from_config(config: FirstOnesConfig) -> CatalogueResult<Self> {
        let glyphs: Box<dyn GlyphSource> = match &config.glyph_dir {
            Some(dir) => Box::new(GlyphDir::new(dir)),
            None => Box::new(EmbeddedGlyphs),
        };
        let dictionaries: Box<dyn DictionarySource> = match &config.dictionary_dir {
            Some(dir) => Box::new(DictionaryDir::new(dir)),
            None => Box::new(EmbeddedDictionaries),
        };
        Self::initialize(glyphs.as_ref(), dictionaries.as_ref(), config)
    }

    /// Load the configuration at `path`, or the defaults, and initialize.
    pub fn open(path: Option<&Path>) -> FirstOnesResult<Self> {
        let config = match path {
            Some(path) => FirstOnesConfig::load(path)?,
            None => FirstOnesConfig::default(),
        };
        Ok(Self::from_config(config)?)
    }

    /// Embedded data, default configuration.
    pub fn embedded() -> CatalogueResult<Self> {
        Self::from_config(FirstOnesConfig::default())
    }

    /// Render `tokens` into a complete document.
    ///
    /// Fails as a whole if any token is unsafe or cannot be resolved.
    pub fn render_words<S: AsRef<str>>(
        &self,
        tokens: &[S],
        show_grid: bool,
    ) -> RenderResult<Rendered> {
        let rendered = svg::render_words(&self.resolver, tokens, show_grid)?;
        tracing::debug!(
            words = tokens.len(),
            width = rendered.width,
            height = rendered.height,
            "rendered words"
        );
        Ok(rendered)
    }

    /// [`render_words`](Self::render_words) with the configured grid setting.
    pub fn render_document<S: AsRef<str>>(&self, tokens: &[S]) -> RenderResult<Rendered> {
        self.render_words(tokens, self.config.show_grid)
    }

    /// Debug chart of every glyph.
    pub fn render_glyph_catalogue(&self) -> Svg {
        svg::render_glyph_catalogue(&self.registry)
    }

    /// Resolve one token without rendering it.
    pub fn resolve_word(&self, token: &str) -> ResolveResult<Word> {
        self.resolver.resolve(token)
    }

    pub fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    pub fn index(&self) -> &PronunciationIndex {
        &self.index
    }

    pub fn config(&self) -> &FirstOnesConfig {
        &self.config
    }

    /// Summary of what was loaded.
    pub fn info(&self) -> EngineInfo {
        EngineInfo {
            glyphs: self.registry.len(),
            languages: self.index.languages().map(|l| l.to_string()).collect(),
            fallback_languages: self.resolver.fallback_languages().to_vec(),
        }
    }
}

/// What an engine has loaded.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub glyphs: usize,
    pub languages: Vec<String>,
    pub fallback_languages: Vec<String>,
}

impl fmt::Display for EngineInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "firstones engine info")?;
        writeln!(f, "  glyphs:     {}", self.glyphs)?;
        writeln!(f, "  languages:  {}", self.languages.join(", "))?;
        writeln!(f, "  fallback:   {}", self.fallback_languages.join(", "))?;
        Ok(())
    }
}
