//! Geometry: where syllables and words go on the canvas.
//!
//! Syllables hang from a slanted *word line*. The script reads right to
//! left, so each line is drawn from `x = -length` to `x = 0` and words are
//! placed starting from the right edge of the canvas.

use crate::glyph::{MAX_GLYPH_WIDTH, Syllable, Word};
use crate::{svgf, svgfn};

use super::{Svg, color, rotate, translate, translate_f, vert_line};

/// Space between syllables on a word line.
pub const SYLLABLE_SPACING: u32 = 20;

/// Space between words.
pub const WORD_SPACING: u32 = 10;

/// Keeps glyphs on the top edge from being clipped.
pub const TOP_MARGIN: u32 = 5;

/// Slant of every word line, in degrees.
///
/// Published sigils use between 23 and 30 degrees.
pub const WORD_LINE_ANGLE: i32 = -12;

/// Length of the line joining two non-connector glyphs.
pub const CONNECTOR_LINE: u32 = 3;

/// Extra height per syllable to make room for the slant. Not exact.
const SLANT_MARGIN: u32 = 5;

const _: () = assert!(SYLLABLE_SPACING > MAX_GLYPH_WIDTH);

/// The slanted line a word's syllables hang from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordLine {
    syllables: usize,
    angle: i32,
}

impl WordLine {
    pub fn new(syllables: usize) -> Self {
        Self::with_angle(syllables, WORD_LINE_ANGLE)
    }

    pub fn with_angle(syllables: usize, angle: i32) -> Self {
        Self { syllables, angle }
    }

    pub fn syllables(&self) -> usize {
        self.syllables
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    fn radians(&self) -> f64 {
        f64::from(self.angle).to_radians()
    }

    /// Unrotated length.
    pub fn length(&self) -> u32 {
        self.syllables as u32 * SYLLABLE_SPACING
    }

    /// Offset of syllable `i` from the line's right end.
    ///
    /// The line is cut into `syllables + 1` equal segments and syllable `i`
    /// hangs at the end of segment `i`.
    pub fn offset_for(&self, i: usize) -> (f64, f64) {
        let segment = f64::from(self.length()) / (self.syllables + 1) as f64;
        let distance = segment * (i + 1) as f64;
        let rad = self.radians();
        (-rad.cos() * distance, -rad.sin() * distance)
    }

    /// Horizontal extent once rotated.
    pub fn len_x(&self) -> f64 {
        self.radians().cos() * f64::from(self.length())
    }

    /// The line itself, with a dot at each end.
    pub fn svg(&self) -> Svg {
        let start = -i64::from(self.length());
        let line = svgfn!(r#"<line x1="{}" y1="0" x2="0" y2="0" />"#, start)
            + svgfn!(
                r#"<circle cx="{}" cy="0" r="0.5" fill="currentcolor" />"#,
                start
            )
            + svgfn!(r#"<circle cx="0" cy="0" r="0.5" fill="currentcolor" />"#);

        Svg::trusted("<g> <!-- Word line -->\n")
            + rotate(self.angle, &line)
            + Svg::trusted("</g> <!-- End of word line -->\n")
    }
}

/// A syllable's glyphs stacked from `y = 0` down.
///
/// Non-connector glyphs get a short vertical line above them unless the
/// glyph before was a connector.
pub fn syllable_svg(syllable: &Syllable) -> Svg {
    let mut svg = svgf!("<g> <!-- Syllable: {} -->\n", syllable);
    let mut height = 0;
    let mut prev_connector = false;
    for glyph in syllable.iter() {
        if !glyph.is_connector() && !prev_connector {
            svg += color("orange", &translate(0, i64::from(height), &vert_line(CONNECTOR_LINE)));
            height += CONNECTOR_LINE;
        }
        svg += color("orange", &translate(0, i64::from(height), glyph.reference()));
        svg += Svg::newline();

        height += glyph.height();
        prev_connector = glyph.is_connector();
    }
    svg + svgf!("</g> <!-- End of syllable {} -->\n", syllable)
}

/// A word line with its syllables hung from it, origin at the line's right end.
pub fn word_svg(word: &Word) -> (Svg, WordLine) {
    let line = WordLine::new(word.len());
    let mut svg = line.svg();
    for (i, syllable) in word.iter().enumerate() {
        let (dx, dy) = line.offset_for(i);
        svg += translate_f(dx, dy, &syllable_svg(syllable));
    }
    (svg, line)
}

/// Canvas `(width, height)` that fits `words`.
///
/// Approximate, the slant is only accounted for with a margin. Good enough
/// to size the canvas and pick the starting position.
pub fn canvas_size(words: &[Word]) -> (u32, u32) {
    let mut width = 0;
    let mut tallest = 0;
    let mut max_syllables = 0;
    for word in words {
        max_syllables = max_syllables.max(word.len() as u32);
        width += SYLLABLE_SPACING * word.len() as u32 + WORD_SPACING;
        for syllable in word.iter() {
            tallest = tallest.max(syllable.stacked_height(CONNECTOR_LINE));
        }
    }
    (width, tallest + TOP_MARGIN + SLANT_MARGIN * max_syllables)
}

/// One word, ready to be translated to `(x, y)`.
#[derive(Debug, Clone)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub markup: Svg,
}

/// Every word placed right to left, plus the canvas they need.
#[derive(Debug, Clone)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub width: u32,
    pub height: u32,
}

/// Place `words` right to left, starting at the right edge of the canvas.
pub fn layout(words: &[Word]) -> Layout {
    let (width, height) = canvas_size(words);
    let mut x = f64::from(width);
    let placements = words
        .iter()
        .map(|word| {
            let (markup, line) = word_svg(word);
            let placement = Placement {
                x,
                y: f64::from(TOP_MARGIN),
                markup,
            };
            x -= line.len_x() + f64::from(WORD_SPACING);
            placement
        })
        .collect();
    Layout {
        placements,
        width,
        height,
    }
}
