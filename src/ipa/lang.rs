//! Language tags and matching requested languages against available ones.
//!
//! Tags follow the usual `language[-Script][-REGION]` shape (`es`, `en-US`,
//! `sr-Latn-RS`); `_` is accepted as a separator so dictionary file names like
//! `en_US` parse too. Matching is script-aware: a request is never matched to
//! a dictionary written in a different script, even for the same language.

use std::fmt;
use std::str::FromStr;

use super::{IpaError, IpaResult};

/// How well a requested tag matches an available one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Unrelated, or same language in a different script.
    No,
    /// A neighbouring language. Not good enough to use.
    Low,
    /// Same language and script, different or unspecified region.
    High,
    /// Identical after filling in default scripts.
    Exact,
}

/// A parsed language tag. Variants and extensions are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LanguageTag {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The explicit script, or the one the language is usually written in.
    pub fn effective_script(&self) -> Option<&str> {
        self.script().or_else(|| default_script(&self.language))
    }

    /// Score this (requested) tag against an available one.
    pub fn confidence(&self, available: &LanguageTag) -> Confidence {
        if self.effective_script() != available.effective_script() {
            return Confidence::No;
        }
        if self.language == available.language {
            if self.region == available.region {
                Confidence::Exact
            } else {
                Confidence::High
            }
        } else if related(&self.language, &available.language) {
            Confidence::Low
        } else {
            Confidence::No
        }
    }
}

impl FromStr for LanguageTag {
    type Err = IpaError;

    fn from_str(s: &str) -> IpaResult<Self> {
        let invalid = || IpaError::InvalidTag { tag: s.to_string() };
        let mut subtags = s.split(['-', '_']);

        let language = match subtags.next() {
            Some(l) if (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()) => {
                l.to_ascii_lowercase()
            }
            _ => return Err(invalid()),
        };

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty() {
                return Err(invalid());
            }
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let digits = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if alpha && script.is_none() && region.is_none() => {
                    let (first, rest) = subtag.split_at(1);
                    script = Some(first.to_ascii_uppercase() + &rest.to_ascii_lowercase());
                }
                2 if alpha && region.is_none() => region = Some(subtag.to_ascii_uppercase()),
                3 if digits && region.is_none() => region = Some(subtag.to_string()),
                // Variants: recognised, ignored.
                5..=8 if subtag.chars().all(|c| c.is_ascii_alphanumeric()) => {}
                _ => return Err(invalid()),
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

/// Picks the best of a fixed set of available tags for a requested one.
#[derive(Debug, Clone, Default)]
pub struct LanguageMatcher {
    available: Vec<LanguageTag>,
}

impl LanguageMatcher {
    pub fn new(available: Vec<LanguageTag>) -> Self {
        Self { available }
    }

    /// Index of the best available tag and how confident the match is.
    /// Ties go to the earliest tag. `None` if nothing is available.
    pub fn best_match(&self, requested: &LanguageTag) -> Option<(usize, Confidence)> {
        let mut best: Option<(usize, Confidence)> = None;
        for (i, tag) in self.available.iter().enumerate() {
            let confidence = requested.confidence(tag);
            if best.is_none_or(|(_, c)| confidence > c) {
                best = Some((i, confidence));
            }
        }
        best
    }

    pub fn available(&self) -> &[LanguageTag] {
        &self.available
    }
}

fn default_script(language: &str) -> Option<&'static str> {
    Some(match language {
        "ca" | "de" | "en" | "es" | "eu" | "fr" | "gl" | "it" | "nl" | "pt" | "ro" | "sv" | "fi"
        | "pl" | "cs" | "da" | "nb" | "nn" | "no" | "is" | "ast" | "an" | "oc" | "sco" => "Latn",
        "ru" | "uk" | "bg" | "be" | "mk" => "Cyrl",
        "ar" | "fa" | "ur" => "Arab",
        "el" => "Grek",
        "he" | "yi" => "Hebr",
        "ja" => "Jpan",
        "ko" => "Kore",
        "zh" => "Hans",
        "hi" | "mr" | "ne" => "Deva",
        _ => return None,
    })
}

/// Languages close enough to be worth a low-confidence match.
const RELATED: &[(&str, &str)] = &[
    ("an", "es"),
    ("ast", "es"),
    ("ca", "es"),
    ("gl", "es"),
    ("gl", "pt"),
    ("oc", "ca"),
    ("sco", "en"),
    ("nb", "no"),
    ("nn", "no"),
    ("da", "no"),
];

fn related(a: &str, b: &str) -> bool {
    RELATED
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_normalizes_case() {
        let t = tag("sr_latn_rs");
        assert_eq!(t.language(), "sr");
        assert_eq!(t.script(), Some("Latn"));
        assert_eq!(t.region(), Some("RS"));
        assert_eq!(t.to_string(), "sr-Latn-RS");
        assert_eq!(tag("es-419").region(), Some("419"));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "e", "english", "en-", "12", "en-US-Latn", "en-!!"] {
            assert!(
                matches!(bad.parse::<LanguageTag>(), Err(IpaError::InvalidTag { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn confidence_levels() {
        let en_us = tag("en_US");
        assert_eq!(tag("en-US").confidence(&en_us), Confidence::Exact);
        assert_eq!(tag("en").confidence(&en_us), Confidence::High);
        assert_eq!(tag("en-GB").confidence(&en_us), Confidence::High);
        assert_eq!(tag("en-Latn-US").confidence(&en_us), Confidence::Exact);
        assert_eq!(tag("en-Cyrl").confidence(&en_us), Confidence::No);
        assert_eq!(tag("fr").confidence(&en_us), Confidence::No);
        assert_eq!(tag("gl").confidence(&tag("es_MX")), Confidence::Low);
    }

    #[test]
    fn matcher_picks_best_then_earliest() {
        let matcher = LanguageMatcher::new(vec![tag("en_US"), tag("es_MX"), tag("es_ES")]);
        assert_eq!(matcher.best_match(&tag("es")), Some((1, Confidence::High)));
        assert_eq!(matcher.best_match(&tag("es-ES")), Some((2, Confidence::Exact)));
        assert_eq!(matcher.best_match(&tag("en")), Some((0, Confidence::High)));
        assert_eq!(matcher.best_match(&tag("xx")).map(|(_, c)| c), Some(Confidence::No));
        assert_eq!(LanguageMatcher::default().best_match(&tag("en")), None);
    }
}
