//! SVG markup: a string newtype plus the few transforms the renderer needs.
//!
//! Markup is built by concatenating trusted fragments (glyph definitions,
//! other [`Svg`] values) and by formatting small templates with [`svgf!`].
//! Every formatted template is checked: the rendered output must contain
//! exactly as many structural characters (`<`, `>`, `&`, `"`) as the template
//! itself. A mismatch means an argument smuggled markup in, which is a bug in
//! the caller, so it panics instead of returning an error.
//!
//! - [`layout`]: spacing constants, word lines, canvas size
//! - [`compose`]: full documents from input words, and the glyph catalogue

pub mod compose;
pub mod layout;

use std::fmt;
use std::ops::{Add, AddAssign};

pub use compose::{Rendered, check_safe, definitions, render_glyph_catalogue, render_words};
pub use layout::{Layout, Placement, WordLine, canvas_size, layout};

/// Characters that change the structure of a document.
const STRUCTURAL: [char; 4] = ['<', '>', '&', '"'];

/// Format a template into [`Svg`], asserting that no argument added markup.
///
/// ```
/// use firstones::svgf;
///
/// let line = svgf!(r#"<line x1="0" y1="0" x2="0" y2="{}" />"#, 3);
/// assert_eq!(line.as_str(), r#"<line x1="0" y1="0" x2="0" y2="3" />"#);
/// ```
#[macro_export]
macro_rules! svgf {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::svg::Svg::checked($template, format!($template $(, $arg)*))
    };
}

/// Same as [`svgf!`], followed by a newline.
#[macro_export]
macro_rules! svgfn {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::svgf!($template $(, $arg)*) + $crate::svg::Svg::newline()
    };
}

/// A fragment of SVG markup.
///
/// Kept apart from plain strings so user text cannot be mixed in by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Svg(String);

impl Svg {
    /// Wrap markup that is known to be well formed.
    pub(crate) fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// A single newline.
    pub fn newline() -> Self {
        Self("\n".to_string())
    }

    /// Validate a formatted template. Used by [`svgf!`].
    ///
    /// # Panics
    ///
    /// If `rendered` has a different count of any structural character than
    /// `template`.
    pub fn checked(template: &str, rendered: String) -> Self {
        for c in STRUCTURAL {
            let expected = template.matches(c).count();
            let got = rendered.matches(c).count();
            assert!(
                expected == got,
                "svgf: unsafe for {c:?}: template {template:?} had {expected}, \
                 output {rendered:?} had {got}"
            );
        }
        Self(rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Add for Svg {
    type Output = Svg;

    fn add(mut self, rhs: Svg) -> Svg {
        self.0.push_str(&rhs.0);
        self
    }
}

impl Add<&Svg> for Svg {
    type Output = Svg;

    fn add(mut self, rhs: &Svg) -> Svg {
        self.0.push_str(&rhs.0);
        self
    }
}

impl AddAssign for Svg {
    fn add_assign(&mut self, rhs: Svg) {
        self.0.push_str(&rhs.0);
    }
}

impl AddAssign<&Svg> for Svg {
    fn add_assign(&mut self, rhs: &Svg) {
        self.0.push_str(&rhs.0);
    }
}

/// Indent every non-empty line by `n` spaces.
pub fn indent(svg: &Svg, n: usize) -> Svg {
    let pad = " ".repeat(n);
    let lines: Vec<String> = svg
        .0
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect();
    Svg(lines.join("\n"))
}

fn group(open: Svg, inner: &Svg) -> Svg {
    open + indent(inner, 2) + Svg::trusted("</g>\n")
}

/// Wrap in a translation by whole units.
pub fn translate(dx: i64, dy: i64, svg: &Svg) -> Svg {
    group(svgfn!(r#"<g transform="translate({} {})">"#, dx, dy), svg)
}

/// Wrap in a translation by fractional units.
pub fn translate_f(dx: f64, dy: f64, svg: &Svg) -> Svg {
    group(svgfn!(r#"<g transform="translate({} {})">"#, dx, dy), svg)
}

/// Wrap in a rotation, in degrees.
pub fn rotate(angle: i32, svg: &Svg) -> Svg {
    group(svgfn!(r#"<g transform="rotate({})">"#, angle), svg)
}

/// Wrap in a group that sets color and stroke.
pub fn color(color: &str, svg: &Svg) -> Svg {
    group(
        svgfn!(
            r#"<g color="{}" stroke="{}" stroke-width="0.5">"#,
            color,
            color
        ),
        svg,
    )
}

/// A vertical line of length `len` starting at the origin.
pub fn vert_line(len: u32) -> Svg {
    svgf!(r#"<line x1="0" y1="0" x2="0" y2="{}" />"#, len)
}

/// Opening `<svg>` tag. One unit is one millimetre.
pub fn header(width: u32, height: u32) -> Svg {
    svgfn!(
        r#"<svg
  version="1.1"
  viewBox="0 0 {} {}"
  width="{}mm" height="{}mm"
  xmlns="http://www.w3.org/2000/svg">
"#,
        width,
        height,
        width,
        height
    )
}

/// Closing `</svg>` tag.
pub fn footer() -> Svg {
    Svg::trusted("</svg>\n")
}

/// Light gridlines every 5 units, darker every 10. For debugging.
pub fn grid(width: u32, height: u32) -> Svg {
    let stroke = |i: u32| if i % 10 == 0 { "#ccc" } else { "#eee" };

    let mut s = Svg::trusted("<!-- Grid for debugging -->\n");
    s += Svg::trusted("<g stroke-width=\"0.1\">\n");
    for i in (0..=width).step_by(5) {
        s += svgfn!(
            r#"<line x1="{}" y1="0" x2="{}" y2="100%" stroke="{}"/>"#,
            i,
            i,
            stroke(i)
        );
    }
    for i in (0..=height).step_by(5) {
        s += svgfn!(
            r#"<line x1="0" y1="{}" x2="100%" y2="{}" stroke="{}"/>"#,
            i,
            i,
            stroke(i)
        );
    }
    s += Svg::trusted("</g> <!-- End of grid -->\n");
    s
}
