//! Pronunciation dictionaries, one per language.
//!
//! Dictionaries use the open-dict-data tab-separated format:
//!
//! ```text
//! hello	/həˈɫoʊ/, /hɛˈɫoʊ/
//! ```
//!
//! Only the first pronunciation is kept. Character and place names from the
//! show are merged into every dictionary, replacing any entry with the same
//! spelling, so they always read the same way.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{CatalogueError, CatalogueResult};

use super::lang::{Confidence, LanguageMatcher, LanguageTag};
use super::{IpaError, IpaResult};

/// Fixed pronunciations, merged into every dictionary.
pub const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("she-ra", "ʃiɹɑ"),
    ("shera", "ʃiɹɑ"),
    ("catra", "kætɹa"),
    ("entrapta", "ɪntɹæpta"),
    ("hordak", "hɔɹdak"),
    ("perfuma", "pɝfjuma"),
    ("scorpia", "skɔɹpia"),
    ("mermista", "mɝmistə"),
    ("frosta", "fɹɔsta"),
    ("netossa", "nɛttɔsa"),
    ("spinnerella", "spɪnɝɛɫə"),
    ("etheria", "iθiɹɑ"),
    // English words, but they must always resolve.
    ("adora", "ədɔɹə"),
    ("glimmer", "ɡɫɪmɝ"),
    ("bow", "boʊ"),
    ("shadow", "ʃædoʊ"),
    ("weaver", "wivɝ"),
    ("swift", "swɪft"),
    ("wind", "wɪnd"),
    ("sea", "si"),
    ("hawk", "hɔk"),
];

/// A dictionary as read from its source: its name and its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDictionary {
    /// Language tag, e.g. `en_US`.
    pub name: String,
    pub text: String,
}

impl RawDictionary {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Anything that can list pronunciation dictionaries.
pub trait DictionarySource {
    fn dictionaries(&self) -> CatalogueResult<Vec<RawDictionary>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

static EMBEDDED: &[(&str, &str)] = &[
    ("en_US", include_str!("../../data/ipa/en_US.txt")),
    ("es_MX", include_str!("../../data/ipa/es_MX.txt")),
];

/// The curated dictionaries shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDictionaries;

impl DictionarySource for EmbeddedDictionaries {
    fn dictionaries(&self) -> CatalogueResult<Vec<RawDictionary>> {
        Ok(EMBEDDED
            .iter()
            .map(|(name, text)| RawDictionary::new(*name, *text))
            .collect())
    }

    fn describe(&self) -> String {
        "embedded dictionaries".into()
    }
}

/// A directory of `LANG.txt` files, e.g. a checkout of open-dict-data.
#[derive(Debug, Clone)]
pub struct DictionaryDir {
    path: PathBuf,
}

impl DictionaryDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictionarySource for DictionaryDir {
    fn dictionaries(&self) -> CatalogueResult<Vec<RawDictionary>> {
        let read_err = |source| CatalogueError::DictionarySource {
            path: self.path.display().to_string(),
            source,
        };

        let mut dictionaries = Vec::new();
        for entry in std::fs::read_dir(&self.path).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(|source| {
                CatalogueError::DictionarySource {
                    path: path.display().to_string(),
                    source,
                }
            })?;
            dictionaries.push(RawDictionary::new(name, text));
        }
        Ok(dictionaries)
    }

    fn describe(&self) -> String {
        format!("dictionary directory {}", self.path.display())
    }
}

/// Parse one `word<TAB>/pron1/, /pron2/` line into `(word, pron1)`.
///
/// Returns `None` for lines without a tab, with an empty word or
/// pronunciation, or with no `/` at all.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (word, pronunciations) = line.split_once('\t')?;
    if word.is_empty() || pronunciations.is_empty() {
        return None;
    }
    let first = pronunciations.split('/').nth(1)?.trim();
    if first.is_empty() {
        return None;
    }
    Some((word, first))
}

/// Orthographic word to IPA transcription, for one language.
#[derive(Debug, Clone)]
pub struct PronunciationDictionary {
    language: LanguageTag,
    entries: HashMap<String, String>,
}

impl PronunciationDictionary {
    /// Build a dictionary from `(word, transcription)` pairs, then apply
    /// [`NAME_OVERRIDES`]. Later duplicates replace earlier ones.
    pub fn new<'a>(
        language: LanguageTag,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut map: HashMap<String, String> = entries
            .into_iter()
            .map(|(w, p)| (w.to_string(), p.to_string()))
            .collect();
        for (name, ipa) in NAME_OVERRIDES {
            map.insert((*name).to_string(), (*ipa).to_string());
        }
        Self {
            language,
            entries: map,
        }
    }

    /// Parse a dictionary in the tab-separated format. Malformed lines are
    /// skipped and counted in a single warning.
    pub fn parse(language: LanguageTag, text: &str) -> Self {
        let mut skipped = 0usize;
        let entries: Vec<(&str, &str)> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let entry = parse_line(line);
                if entry.is_none() {
                    skipped += 1;
                }
                entry
            })
            .collect();
        if skipped > 0 {
            tracing::warn!(language = %language, skipped, "skipped malformed dictionary lines");
        }
        Self::new(language, entries)
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Transcription for `word`: exact spelling first, then lowercased.
    ///
    /// Some dictionaries hold capitalised entries on purpose, so the
    /// input is not lowercased up front.
    pub fn lookup(&self, word: &str) -> IpaResult<&str> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .map(String::as_str)
            .ok_or_else(|| IpaError::WordNotFound {
                word: word.to_string(),
                language: self.language.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every loaded dictionary, with a matcher to pick one for a language tag.
#[derive(Debug, Clone, Default)]
pub struct PronunciationIndex {
    dictionaries: Vec<PronunciationDictionary>,
    matcher: LanguageMatcher,
}

impl PronunciationIndex {
    /// Load every dictionary from `source`.
    ///
    /// Fails if a dictionary name is not a language tag, two dictionaries
    /// share a tag, or there are none.
    pub fn load(source: &dyn DictionarySource) -> CatalogueResult<Self> {
        let mut raws = source.dictionaries()?;
        raws.sort_by(|a, b| a.name.cmp(&b.name));

        let mut dictionaries: Vec<PronunciationDictionary> = Vec::with_capacity(raws.len());
        for raw in &raws {
            let language: LanguageTag =
                raw.name
                    .parse()
                    .map_err(|_| CatalogueError::InvalidLanguageTag {
                        name: raw.name.clone(),
                    })?;
            if dictionaries.iter().any(|d| d.language == language) {
                return Err(CatalogueError::DuplicateLanguage {
                    tag: language.to_string(),
                });
            }
            let dictionary = PronunciationDictionary::parse(language, &raw.text);
            tracing::debug!(
                language = %dictionary.language,
                entries = dictionary.len(),
                "loaded dictionary"
            );
            dictionaries.push(dictionary);
        }

        if dictionaries.is_empty() {
            return Err(CatalogueError::Empty {
                what: source.describe(),
            });
        }
        Ok(Self::from_dictionaries(dictionaries))
    }

    pub fn from_dictionaries(dictionaries: Vec<PronunciationDictionary>) -> Self {
        let matcher = LanguageMatcher::new(
            dictionaries.iter().map(|d| d.language.clone()).collect(),
        );
        Self {
            dictionaries,
            matcher,
        }
    }

    /// The dictionary that best serves `tag`.
    ///
    /// Matches at [`Confidence::Low`] or below count as unsupported, and
    /// so does a tag that does not parse at all.
    pub fn resolve(&self, tag: &str) -> IpaResult<&PronunciationDictionary> {
        let unsupported = || IpaError::UnsupportedLanguage {
            tag: tag.to_string(),
        };
        let requested: LanguageTag = tag.parse().map_err(|e| {
            tracing::debug!(tag, error = %e, "unparseable language tag");
            unsupported()
        })?;
        match self.matcher.best_match(&requested) {
            Some((i, confidence)) if confidence > Confidence::Low => Ok(&self.dictionaries[i]),
            _ => Err(unsupported()),
        }
    }

    /// Languages in load order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.dictionaries.iter().map(|d| &d.language)
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        s.parse().unwrap()
    }

    #[test]
    fn parse_line_keeps_first_pronunciation() {
        assert_eq!(
            parse_line("hello\t/həˈɫoʊ/, /hɛˈɫoʊ/"),
            Some(("hello", "həˈɫoʊ"))
        );
        assert_eq!(parse_line("a\t/ ə /"), Some(("a", "ə")));
    }

    #[test]
    fn parse_line_skips_malformed() {
        assert_eq!(parse_line("hello /həˈɫoʊ/"), None);
        assert_eq!(parse_line("\t/ə/"), None);
        assert_eq!(parse_line("hello\t"), None);
        assert_eq!(parse_line("hello\thəˈɫoʊ"), None);
        assert_eq!(parse_line("hello\t//"), None);
    }

    #[test]
    fn lookup_tries_exact_then_lowercase() {
        let dict = PronunciationDictionary::parse(
            tag("en_US"),
            "London\t/ˈɫəndən/\nhello\t/həˈɫoʊ/\n",
        );
        assert_eq!(dict.lookup("London").unwrap(), "ˈɫəndən");
        assert_eq!(dict.lookup("HELLO").unwrap(), "həˈɫoʊ");
        // Only the input is lowercased, never the entries.
        assert!(matches!(
            dict.lookup("london"),
            Err(IpaError::WordNotFound { .. })
        ));
    }

    #[test]
    fn names_override_dictionary_entries() {
        let dict = PronunciationDictionary::parse(tag("es_MX"), "sea\t/sea/\nhola\t/ola/\n");
        assert_eq!(dict.lookup("sea").unwrap(), "si");
        assert_eq!(dict.lookup("She-Ra").unwrap(), "ʃiɹɑ");
        assert_eq!(dict.lookup("hola").unwrap(), "ola");
    }

    #[test]
    fn embedded_index_resolves_languages() {
        let index = PronunciationIndex::load(&EmbeddedDictionaries).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("en").unwrap().language().to_string(), "en-US");
        assert_eq!(index.resolve("es-ES").unwrap().language().to_string(), "es-MX");
        assert!(matches!(
            index.resolve("xx"),
            Err(IpaError::UnsupportedLanguage { .. })
        ));
        // Galician is close to Spanish, but not close enough.
        assert!(matches!(
            index.resolve("gl"),
            Err(IpaError::UnsupportedLanguage { .. })
        ));
        for bad in ["not a tag", "english", "https"] {
            assert!(
                matches!(index.resolve(bad), Err(IpaError::UnsupportedLanguage { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn dir_source_rejects_bad_names() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("english.txt"), "hello\t/həˈɫoʊ/\n").unwrap();
        let err = PronunciationIndex::load(&DictionaryDir::new(dir.path())).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidLanguageTag { .. }));
    }

    #[test]
    fn dir_source_rejects_duplicates() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("en_US.txt"), "hello\t/həˈɫoʊ/\n").unwrap();
        std::fs::write(dir.path().join("en-US.txt"), "hello\t/hɛˈɫoʊ/\n").unwrap();
        let err = PronunciationIndex::load(&DictionaryDir::new(dir.path())).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateLanguage { .. }));
    }

    #[test]
    fn empty_dir_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = PronunciationIndex::load(&DictionaryDir::new(dir.path())).unwrap_err();
        assert!(matches!(err, CatalogueError::Empty { .. }));
    }
}
