//! IPA transcription to glyphs.
//!
//! The mapping is a hand-curated, ordered list of rules. Two-symbol
//! sequences (diphthongs and affricates) come first, so at any position the
//! longest matching rule wins, without backtracking. Gaps in the script are
//! filled with the closest available glyph.

use std::sync::Arc;

use crate::error::{CatalogueError, CatalogueResult};
use crate::glyph::{Glyph, GlyphRegistry, Syllable, Word};

use super::{IpaError, IpaResult};

/// `(IPA symbols, glyph name)`. An empty glyph name drops the symbols.
const RULES: &[(&str, &str)] = &[
    // Two-symbol sequences.
    ("aʊ", "hOUse"),
    ("ɔɪ", "bOY"),
    ("oʊ", "gO"),
    ("tʃ", "CH"),
    ("dʒ", "J"),
    ("aɪ", "I"),
    // Consonants, in the order of the official chart.
    ("b", "B"),
    ("β", "B"),
    ("d", "D"),
    ("ð", "DH"),
    ("f", "F"),
    ("g", "G"),
    ("ɡ", "G"),
    ("ɣ", "G"),
    ("h", "H"),
    ("k", "K"),
    ("x", "K"),
    ("l", "L"),
    ("ɫ", "L"),
    ("ʎ", "L"),
    ("ʝ", "L"),
    ("m", "M"),
    ("n", "N"),
    ("ɲ", "N"),
    ("ŋ", "NG"),
    ("p", "P"),
    ("ɹ", "R"),
    ("ɾ", "R"),
    ("r", "R"),
    ("ɝ", "R"),
    ("s", "S"),
    ("ʃ", "SH"),
    ("t", "T"),
    ("θ", "TH"),
    ("v", "V"),
    ("w", "W"),
    ("z", "Z"),
    ("ʒ", "ZH"),
    // Vowels.
    ("æ", "sAd"),
    ("a", "sAd"),
    ("ɔ", "All"),
    ("ɑ", "All"),
    ("o", "All"),
    ("e", "sAy"),
    ("ɛ", "pEt"),
    ("i", "fEEt"),
    ("ɪ", "lIt"),
    ("ʊ", "gOOd"),
    ("u", "tOO"),
    ("ə", "fUn"),
    ("j", "Yes"),
    // Stress marks.
    ("ˈ", ""),
    ("ˌ", ""),
];

#[derive(Debug, Clone)]
struct Rule {
    symbols: Vec<char>,
    glyph: Option<Arc<Glyph>>,
}

/// Converts IPA transcriptions to glyph sequences.
#[derive(Debug, Clone)]
pub struct Transcriber {
    rules: Vec<Rule>,
}

impl Transcriber {
    /// Build the rule list, resolving every glyph name against `registry`.
    ///
    /// Fails if a rule names a glyph the registry does not have.
    pub fn new(registry: &GlyphRegistry) -> CatalogueResult<Self> {
        let mut rules = RULES
            .iter()
            .map(|&(symbols, glyph)| -> CatalogueResult<Rule> {
                let glyph = match glyph {
                    "" => None,
                    name => Some(registry.lookup(name).map_err(|_| {
                        CatalogueError::TableGlyph {
                            symbol: symbols.to_string(),
                            glyph: name.to_string(),
                        }
                    })?),
                };
                Ok(Rule {
                    symbols: symbols.chars().collect(),
                    glyph,
                })
            })
            .collect::<CatalogueResult<Vec<_>>>()?;
        // Longest first; stable, so table order breaks ties.
        rules.sort_by(|a, b| b.symbols.len().cmp(&a.symbols.len()));
        Ok(Self { rules })
    }

    /// Glyphs for an IPA transcription, in order.
    ///
    /// Fails on the first symbol no rule covers.
    pub fn transcribe(&self, transcription: &str) -> IpaResult<Vec<Arc<Glyph>>> {
        let symbols: Vec<char> = transcription.chars().collect();
        let mut glyphs = Vec::with_capacity(symbols.len());
        let mut i = 0;
        while i < symbols.len() {
            let rest = &symbols[i..];
            let rule = self
                .rules
                .iter()
                .find(|r| rest.starts_with(&r.symbols))
                .ok_or_else(|| IpaError::UnknownSymbol {
                    symbol: symbols[i],
                    transcription: transcription.to_string(),
                })?;
            if let Some(glyph) = &rule.glyph {
                glyphs.push(Arc::clone(glyph));
            }
            i += rule.symbols.len();
        }
        Ok(glyphs)
    }

    /// Every `(symbols, glyph name)` rule in matching order. Dropped
    /// symbols have no glyph name.
    pub fn rules(&self) -> impl Iterator<Item = (String, Option<&str>)> {
        self.rules.iter().map(|r| {
            (
                r.symbols.iter().collect(),
                r.glyph.as_ref().map(|g| g.name()),
            )
        })
    }
}

/// Character offsets of every `/` in `word`.
///
/// Offsets are in the word *with* its slashes, which is what [`segment`]
/// expects.
pub fn find_slashes(word: &str) -> Vec<usize> {
    word.chars()
        .enumerate()
        .filter_map(|(i, c)| (c == '/').then_some(i))
        .collect()
}

/// Split glyphs into syllables at positions proportional to `boundaries`.
///
/// This is an approximation. `boundaries` are character offsets in the
/// written word, which has `word_len` characters once the slashes are
/// removed; the glyphs come from its pronunciation and rarely line up one
/// to one. A boundary maps to glyph index `glyphs * offset / word_len`, or
/// to `offset` itself when the lengths happen to match. Then:
///
/// - an index of 0 becomes 1, so the first syllable keeps a glyph;
/// - an index at or past the end becomes the last glyph, so the last
///   syllable keeps one too;
/// - an index that does not advance past the previous cut is skipped.
///
/// Without boundaries the whole sequence is one syllable. No syllable is
/// ever empty.
pub fn segment(glyphs: Vec<Arc<Glyph>>, boundaries: &[usize], word_len: usize) -> Word {
    if glyphs.is_empty() {
        return Word::default();
    }
    if boundaries.is_empty() || word_len == 0 {
        return Word(vec![Syllable(glyphs)]);
    }

    let count = glyphs.len();
    let mut syllables = Vec::with_capacity(boundaries.len() + 1);
    let mut prev = 0;
    for &offset in boundaries {
        let mut cut = if count == word_len {
            offset
        } else {
            count * offset / word_len
        };
        if cut == 0 {
            cut = 1;
        }
        if cut >= count {
            cut = count - 1;
        }
        if cut <= prev {
            continue;
        }
        syllables.push(Syllable(glyphs[prev..cut].to_vec()));
        prev = cut;
    }
    if prev < count {
        syllables.push(Syllable(glyphs[prev..].to_vec()));
    }
    Word(syllables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::EmbeddedGlyphs;

    fn setup() -> (GlyphRegistry, Transcriber) {
        let registry = GlyphRegistry::load(&EmbeddedGlyphs).unwrap();
        let transcriber = Transcriber::new(&registry).unwrap();
        (registry, transcriber)
    }

    fn names(glyphs: &[Arc<Glyph>]) -> Vec<&str> {
        glyphs.iter().map(|g| g.name()).collect()
    }

    #[test]
    fn every_rule_resolves() {
        let (registry, transcriber) = setup();
        let mapped: std::collections::BTreeSet<&str> =
            transcriber.rules().filter_map(|(_, g)| g).collect();
        // Every glyph is reachable from some IPA symbol.
        assert_eq!(mapped.len(), registry.len());
    }

    #[test]
    fn two_symbol_rules_win() {
        let (_, transcriber) = setup();
        assert_eq!(names(&transcriber.transcribe("haʊs").unwrap()), ["H", "hOUse", "S"]);
        assert_eq!(names(&transcriber.transcribe("tʃ").unwrap()), ["CH"]);
        assert_eq!(names(&transcriber.transcribe("ts").unwrap()), ["T", "S"]);
        assert_eq!(names(&transcriber.transcribe("aʊɪ").unwrap()), ["hOUse", "lIt"]);
    }

    #[test]
    fn greedy_matching_does_not_backtrack() {
        let (_, transcriber) = setup();
        // "aɪ" is consumed first, leaving "ʊ" alone.
        assert_eq!(names(&transcriber.transcribe("aɪʊ").unwrap()), ["I", "gOOd"]);
    }

    #[test]
    fn stress_marks_are_dropped() {
        let (_, transcriber) = setup();
        assert_eq!(
            names(&transcriber.transcribe("həˈɫoʊ").unwrap()),
            ["H", "fUn", "L", "gO"]
        );
        assert!(transcriber.transcribe("ˈˌ").unwrap().is_empty());
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let (_, transcriber) = setup();
        let err = transcriber.transcribe("hɜ").unwrap_err();
        assert!(matches!(err, IpaError::UnknownSymbol { symbol: 'ɜ', .. }));
    }

    #[test]
    fn slashes_are_char_offsets() {
        assert_eq!(find_slashes("ca/sa"), [2]);
        assert_eq!(find_slashes("ñu/ño/"), [2, 5]);
        assert!(find_slashes("casa").is_empty());
    }

    fn seg(glyphs: &[Arc<Glyph>], boundaries: &[usize], word_len: usize) -> String {
        segment(glyphs.to_vec(), boundaries, word_len).to_string()
    }

    #[test]
    fn segment_clamps_and_scales() {
        let (registry, _) = setup();
        let g: Vec<Arc<Glyph>> = ["SH", "fEEt", "R", "All", "S", "hOUse"]
            .iter()
            .map(|n| registry.glyph(n))
            .collect();
        let four = &g[..4];

        assert_eq!(seg(&g, &[], 8), "SH-fEEt-R-All-S-hOUse");

        // Same length as the word: offsets are used directly.
        assert_eq!(seg(four, &[0], 4), "SH/fEEt-R-All");
        assert_eq!(seg(four, &[1], 4), "SH/fEEt-R-All");
        assert_eq!(seg(four, &[2], 4), "SH-fEEt/R-All");
        assert_eq!(seg(four, &[3], 4), "SH-fEEt-R/All");
        assert_eq!(seg(four, &[4], 4), "SH-fEEt-R/All");

        // Different lengths: offsets scale.
        assert_eq!(seg(four, &[6], 8), "SH-fEEt-R/All");
        assert_eq!(seg(four, &[0], 8), "SH/fEEt-R-All");
        assert_eq!(seg(four, &[8], 8), "SH-fEEt-R/All");

        assert_eq!(seg(&g, &[2, 4], 6), "SH-fEEt/R-All/S-hOUse");
        assert_eq!(seg(&g, &[2, 2, 4, 4], 6), seg(&g, &[2, 4], 6));
        assert_eq!(seg(&g, &[6, 7], 12), "SH-fEEt-R/All-S-hOUse");
    }

    #[test]
    fn segment_never_yields_empty_syllables() {
        let (registry, _) = setup();
        let one = vec![registry.glyph("T")];
        let word = segment(one, &[0, 1, 2], 3);
        assert_eq!(word.len(), 1);
        assert!(segment(Vec::new(), &[1], 3).is_empty());
    }
}
