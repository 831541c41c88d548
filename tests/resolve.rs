//! Word resolution through the public engine API, with embedded and
//! directory-backed tables.

use std::path::Path;

use firstones::config::FirstOnesConfig;
use firstones::engine::Engine;
use firstones::error::{CatalogueError, ResolveError};
use firstones::glyph::{GlyphDir, GlyphError};
use firstones::ipa::{DictionaryDir, IpaError};

fn embedded() -> Engine {
    Engine::embedded().unwrap()
}

fn resolve(engine: &Engine, token: &str) -> String {
    engine.resolve_word(token).unwrap().to_string()
}

/// Copy the embedded glyph files into `dir`, leaving out `skip`.
fn copy_glyphs(dir: &Path, skip: &[&str]) {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/glyphs");
    for entry in std::fs::read_dir(source).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_stem().unwrap().to_str().unwrap().to_string();
        if skip.contains(&name.as_str()) {
            continue;
        }
        std::fs::copy(&path, dir.join(path.file_name().unwrap())).unwrap();
    }
}

#[test]
fn phonemes_resolve_as_written() {
    let engine = embedded();
    assert_eq!(resolve(&engine, "SH-fEEt/R-All"), "SH-fEEt/R-All");
    assert_eq!(resolve(&engine, "firstones:T"), "T");
}

#[test]
fn dictionary_words_resolve() {
    let engine = embedded();
    assert_eq!(resolve(&engine, "en:hello"), "H-fUn-L-gO");
    assert_eq!(resolve(&engine, "es:ca/sa"), "K-sAd/S-sAd");
    // Unprefixed: Spanish first.
    assert_eq!(resolve(&engine, "hola"), "All-L-sAd");
}

#[test]
fn character_names_always_resolve() {
    let engine = embedded();
    assert_eq!(resolve(&engine, "en:she-ra"), resolve(&engine, "es:she-ra"));
    assert_eq!(resolve(&engine, "She-Ra"), "SH-fEEt-R-All");
}

#[test]
fn explicit_language_does_not_fall_back() {
    let engine = embedded();
    let err = engine.resolve_word("en:hola").unwrap_err();
    assert!(matches!(err, ResolveError::Ipa(IpaError::WordNotFound { .. })));

    for token in ["xx:hello", "english:hello", "https://x"] {
        let err = engine.resolve_word(token).unwrap_err();
        assert!(
            matches!(err, ResolveError::Ipa(IpaError::UnsupportedLanguage { .. })),
            "{token}: {err}"
        );
    }
}

#[test]
fn unknown_words_fall_through_to_phonemes() {
    let engine = embedded();
    let err = engine.resolve_word("zzyzx").unwrap_err();
    match err {
        ResolveError::Glyph(GlyphError::UnknownGlyph { name }) => assert_eq!(name, "zzyzx"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dictionary_directory_replaces_embedded_dictionaries() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("fr_FR.txt"),
        "chat\t/ʃa/\nbonjour\t/bɔ̃ʒuʁ/\nmalformed line\n",
    )
    .unwrap();

    let engine = Engine::from_config(FirstOnesConfig {
        dictionary_dir: Some(tmp.path().to_path_buf()),
        fallback_languages: vec!["fr".into()],
        ..Default::default()
    })
    .unwrap();

    assert_eq!(engine.info().languages, ["fr-FR"]);
    assert_eq!(resolve(&engine, "fr:chat"), "SH-sAd");
    assert_eq!(resolve(&engine, "chat"), "SH-sAd");

    let err = engine.resolve_word("fr:bonjour").unwrap_err();
    assert!(matches!(err, ResolveError::Ipa(IpaError::UnknownSymbol { .. })));

    let err = engine.resolve_word("en:hello").unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Ipa(IpaError::UnsupportedLanguage { .. })
    ));
}

#[test]
fn glyph_directory_loads_the_full_catalogue() {
    let tmp = tempfile::TempDir::new().unwrap();
    copy_glyphs(tmp.path(), &[]);

    let engine = Engine::from_config(FirstOnesConfig {
        glyph_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(engine.registry().len(), 37);
    assert_eq!(resolve(&engine, "en:hello"), "H-fUn-L-gO");
}

#[test]
fn glyph_directory_missing_a_table_glyph_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    copy_glyphs(tmp.path(), &["Yes"]);

    let err = Engine::from_config(FirstOnesConfig {
        glyph_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap_err();
    match err {
        CatalogueError::TableGlyph { glyph, .. } => assert_eq!(glyph, "Yes"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn glyph_with_mismatched_id_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    copy_glyphs(tmp.path(), &["T"]);
    std::fs::write(
        tmp.path().join("T.svg"),
        r#"<g id="glyph:D" _fo_height="10" _fo_connector="false"></g>"#,
    )
    .unwrap();

    let glyphs = GlyphDir::new(tmp.path());
    let err = Engine::initialize(
        &glyphs,
        &DictionaryDir::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/ipa")),
        FirstOnesConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogueError::IdMismatch { .. }));
}
