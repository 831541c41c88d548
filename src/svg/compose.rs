//! Whole documents: rendered words and the glyph catalogue.

use crate::error::{RenderError, RenderResult};
use crate::glyph::GlyphRegistry;
use crate::resolve::WordResolver;
use crate::svgfn;

use super::layout::{SYLLABLE_SPACING, WORD_SPACING, layout};
use super::{Svg, color, footer, grid, header, translate, translate_f};

/// Characters rejected in input words.
const UNSAFE: [char; 5] = ['<', '>', '&', '"', '\\'];

/// Glyphs in the order of the official chart. `_` starts a new row.
const CATALOGUE_ORDER: &[&str] = &[
    "B", "CH", "D", "DH", "_", //
    "F", "G", "H", "J", "_", //
    "K", "L", "M", "N", "_", //
    "NG", "P", "R", "S", "_", //
    "SH", "T", "TH", "V", "_", //
    "W", "Z", "ZH", "_", //
    "sAd", "All", "sAy", "_", //
    "pEt", "fEEt", "lIt", "I", "_", //
    "gOOd", "tOO", "gO", "_", //
    "hOUse", "fUn", "bOY", "Yes",
];

const CATALOGUE_WIDTH: u32 = 80;
const CATALOGUE_HEIGHT: u32 = 210;
const CATALOGUE_ROW: i64 = 20;

/// A finished document and its declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: Svg,
    pub width: u32,
    pub height: u32,
}

/// Reject words that could change the document structure.
///
/// Nothing is escaped: words are echoed into comments, so anything that
/// could end a comment or open markup is refused outright.
pub fn check_safe(word: &str) -> RenderResult<()> {
    match word.chars().find(|c| UNSAFE.contains(c)) {
        Some(character) => Err(RenderError::UnsafeInput {
            word: word.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// `text` made safe for an XML comment, which may not contain `--`.
///
/// Runs of `-` collapse to one, which does not change how the notation
/// parses.
fn comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// A `<defs>` block with every glyph, in name order.
pub fn definitions(registry: &GlyphRegistry) -> Svg {
    let mut defs = Svg::trusted("<defs>\n");
    for glyph in registry.iter() {
        defs += svgfn!("<!-- {} -->", glyph.name());
        defs += glyph.definition();
        defs += Svg::trusted("\n\n");
    }
    defs + Svg::trusted("</defs>\n")
}

/// Render `tokens` into a complete document.
///
/// Every token is checked with [`check_safe`] before any is resolved. If
/// any token fails to resolve, the whole request fails and nothing is
/// rendered. Tokens that resolve to no glyphs are skipped.
pub fn render_words<S: AsRef<str>>(
    resolver: &WordResolver,
    tokens: &[S],
    show_grid: bool,
) -> RenderResult<Rendered> {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    for token in &tokens {
        check_safe(token)?;
    }

    let mut words = Vec::with_capacity(tokens.len());
    for &token in &tokens {
        let word = resolver
            .resolve(token)
            .map_err(|source| RenderError::Word {
                word: token.to_string(),
                source,
            })?;
        if word.is_empty() {
            tracing::debug!(token, "skipping empty word");
            continue;
        }
        words.push(word);
    }

    let placed = layout(&words);
    let mut body = svgfn!("<!-- Words: [{}] -->", comment_text(&tokens.join(" ")));
    for (word, placement) in words.iter().zip(&placed.placements) {
        body += svgfn!("<!-- Glyphs for {} -->", word);
        body += translate_f(
            placement.x,
            placement.y,
            &color("orange", &placement.markup),
        );
    }

    let width = placed.width + WORD_SPACING;
    let height = placed.height;
    let mut document = header(width, height) + definitions(resolver.registry());
    if show_grid {
        document += grid(width, height);
    }
    document += body;
    document += footer();

    Ok(Rendered {
        document,
        width,
        height,
    })
}

/// Every glyph with its name, height and connector mark, for inspection.
///
/// Dots mark the top and the declared bottom of each glyph, so a wrong
/// `_fo_height` stands out.
///
/// # Panics
///
/// If the registry lacks one of the glyphs of the official chart. The
/// transcription tables need all of them, so a registry that passed
/// [`Transcriber::new`](crate::ipa::Transcriber::new) has them.
pub fn render_glyph_catalogue(registry: &GlyphRegistry) -> Svg {
    let mut doc = header(CATALOGUE_WIDTH, CATALOGUE_HEIGHT)
        + grid(CATALOGUE_WIDTH, CATALOGUE_HEIGHT)
        + definitions(registry);

    let (mut x, mut y): (i64, i64) = (10, 10);
    for &name in CATALOGUE_ORDER {
        if name == "_" {
            x = 10;
            y += CATALOGUE_ROW;
            doc += svgfn!(
                r#"<line x1="0" y1="{}" x2="100" y2="{}" stroke="black" stroke-width="0.5" />"#,
                y - 6,
                y - 6
            );
            continue;
        }

        let glyph = registry.glyph(name);
        let link = if glyph.is_connector() { ", 🔗" } else { "" };
        let label = svgfn!(
            r#"<text x="-2" y="-3" font-size="2" fill="black" font-family="sans-serif">{}"#,
            glyph.name()
        ) + svgfn!(
            r#"<tspan font-size="1.5">({}{})</tspan>"#,
            glyph.height(),
            link
        ) + svgfn!("</text>");
        let cell = label + color("orange", glyph.reference());
        doc += translate(x, y, &cell) + Svg::newline();

        let bottom = y + i64::from(glyph.height());
        doc += svgfn!(
            r#"<circle cx="{}" cy="{}" r="0.2" fill="darkorange" />"#,
            x,
            y
        );
        doc += svgfn!(
            r#"<circle cx="{}" cy="{}" r="0.2" fill="darkorange" />"#,
            x,
            bottom
        );

        x += i64::from(SYLLABLE_SPACING);
    }

    doc + footer()
}
