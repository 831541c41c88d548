//! End-to-end rendering through the public engine API.

use firstones::config::FirstOnesConfig;
use firstones::engine::Engine;
use firstones::error::RenderError;

fn engine() -> Engine {
    Engine::embedded().unwrap()
}

#[test]
fn default_word_document() {
    let rendered = engine().render_words(&["SH-fEEt-R-All"], false).unwrap();
    let doc = rendered.document.as_str();

    assert_eq!((rendered.width, rendered.height), (40, 47));
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r#"viewBox="0 0 40 47""#));
    assert!(doc.contains("<defs>"));
    assert!(doc.ends_with("</svg>\n"));
}

#[test]
fn rendering_is_deterministic() {
    let engine = engine();
    let words = ["she-ra", "en:hello", "es:ca/sa", "SH-fEEt/R-All"];
    let first = engine.render_words(&words, true).unwrap();
    let second = engine.render_words(&words, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn clones_render_the_same() {
    let engine = engine();
    let clone = engine.clone();
    let handle = std::thread::spawn(move || clone.render_words(&["en:hello"], false).unwrap());
    let local = engine.render_words(&["en:hello"], false).unwrap();
    assert_eq!(handle.join().unwrap(), local);
}

#[test]
fn words_are_laid_out_right_to_left() {
    let rendered = engine().render_words(&["SH-fEEt-R-All", "T"], false).unwrap();
    let doc = rendered.document.as_str();

    // Two one-syllable words: 30 + 30, plus the trailing word spacing.
    assert_eq!(rendered.width, 70);
    assert!(doc.contains("<!-- Words: [SH-fEEt-R-All T] -->"));

    let first = doc.find("<!-- Glyphs for SH-fEEt-R-All -->").unwrap();
    let second = doc.find("<!-- Glyphs for T -->").unwrap();
    assert!(first < second);
    // The first word starts at the right edge of the layout.
    assert!(doc.contains(r#"<g transform="translate(60 5)">"#));
}

#[test]
fn unsafe_input_is_rejected() {
    for word in ["<svg>", "a&b", "x\"y", "back\\slash", "1>0"] {
        let err = engine().render_words(&[word], false).unwrap_err();
        assert!(matches!(err, RenderError::UnsafeInput { .. }), "{word}");
    }
}

#[test]
fn one_unresolvable_word_fails_the_request() {
    let err = engine()
        .render_words(&["she-ra", "xx:hello", "T"], false)
        .unwrap_err();
    match err {
        RenderError::Word { word, .. } => assert_eq!(word, "xx:hello"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn grid_follows_configuration() {
    let plain = engine().render_document(&["T"]).unwrap();
    assert!(!plain.document.as_str().contains("Grid for debugging"));

    let gridded = Engine::from_config(FirstOnesConfig {
        show_grid: true,
        ..Default::default()
    })
    .unwrap()
    .render_document(&["T"])
    .unwrap();
    assert!(gridded.document.as_str().contains("Grid for debugging"));
}

#[test]
fn no_words_is_an_empty_canvas() {
    let rendered = engine().render_words::<&str>(&[], false).unwrap();
    assert_eq!(rendered.width, 10);
    assert!(!rendered.document.as_str().contains("<!-- Glyphs for"));
}

#[test]
fn glyph_catalogue() {
    let doc = engine().render_glyph_catalogue();
    let doc = doc.as_str();
    assert!(doc.contains(r#"width="80mm" height="210mm""#));
    assert_eq!(doc.matches("<use href=").count(), 37);
}

#[test]
fn documents_are_well_formed_xml() {
    let engine = engine();
    for tokens in [
        &["SH-fEEt-R-All"][..],
        &["--SH--fEEt--/--R--All--"][..],
        &["-/-", "T"][..],
        &["she-ra", "en:hel/lo", "es:ca/sa"][..],
    ] {
        let rendered = engine.render_words(tokens, true).unwrap();
        if let Err(e) = roxmltree::Document::parse(rendered.document.as_str()) {
            panic!("{tokens:?}: {e}");
        }
    }
    let catalogue = engine.render_glyph_catalogue();
    assert!(roxmltree::Document::parse(catalogue.as_str()).is_ok());
}
