//! Benchmarks for resolution and rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use firstones::engine::Engine;
use firstones::glyph::{EmbeddedGlyphs, GlyphRegistry};
use firstones::ipa::{EmbeddedDictionaries, PronunciationIndex};

fn bench_initialize(c: &mut Criterion) {
    c.bench_function("load_glyphs", |bench| {
        bench.iter(|| black_box(GlyphRegistry::load(&EmbeddedGlyphs).unwrap()))
    });
    c.bench_function("load_dictionaries", |bench| {
        bench.iter(|| black_box(PronunciationIndex::load(&EmbeddedDictionaries).unwrap()))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let engine = Engine::embedded().unwrap();

    c.bench_function("resolve_phonemes", |bench| {
        bench.iter(|| black_box(engine.resolve_word(black_box("SH-fEEt/R-All")).unwrap()))
    });
    c.bench_function("resolve_dictionary", |bench| {
        bench.iter(|| black_box(engine.resolve_word(black_box("en:hello")).unwrap()))
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = Engine::embedded().unwrap();
    let words = [
        "she-ra", "adora", "catra", "glimmer", "bow", "en:hello", "es:ca/sa", "SH-fEEt/R-All",
    ];

    c.bench_function("render_one_word", |bench| {
        bench.iter(|| black_box(engine.render_words(&["SH-fEEt-R-All"], false).unwrap()))
    });
    c.bench_function("render_8_words", |bench| {
        bench.iter(|| black_box(engine.render_words(&words, false).unwrap()))
    });
    c.bench_function("render_glyph_catalogue", |bench| {
        bench.iter(|| black_box(engine.render_glyph_catalogue()))
    });
}

criterion_group!(benches, bench_initialize, bench_resolve, bench_render);
criterion_main!(benches);
