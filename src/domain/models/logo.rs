#[cfg(test)]
#[path = "logo_test.rs"]
mod tests;

use std::fmt;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Leaf,
    Camera,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Glyph::Leaf => return write!(f, "leaf"),
            Glyph::Camera => return write!(f, "camera"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
}

/// Parameters derived from the logo answers, before any drawing happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoDesign {
    pub brand: String,
    pub style: String,
    pub layout: String,
    pub palette: Palette,
    pub glyph: Option<Glyph>,
    pub show_text: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Fill(String),
    Stroke { color: String, width: i32 },
}

impl Paint {
    fn attributes(&self) -> String {
        match self {
            Paint::Fill(color) => return format!(r#"fill="{color}""#),
            Paint::Stroke { color, width } => {
                return format!(r#"fill="none" stroke="{color}" stroke-width="{width}""#)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
        paint: Paint,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rx: i32,
        paint: Paint,
    },
    Path {
        d: String,
        paint: Paint,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
        font_family: String,
        font_size: i32,
        fill: String,
    },
}

impl Shape {
    fn to_svg(&self) -> String {
        match self {
            Shape::Circle { cx, cy, r, paint } => {
                return format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" {} />"#,
                    paint.attributes()
                );
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                rx,
                paint,
            } => {
                return format!(
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}" {} />"#,
                    paint.attributes()
                );
            }
            Shape::Path { d, paint } => {
                return format!(r#"<path d="{d}" {} />"#, paint.attributes());
            }
            Shape::Text {
                x,
                y,
                content,
                font_family,
                font_size,
                fill,
            } => {
                return format!(
                    r#"<text x="{x}" y="{y}" font-family="{font_family}" font-size="{font_size}" font-weight="bold" fill="{fill}" text-anchor="middle">{}</text>"#,
                    escape_xml(content)
                );
            }
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&apos;"),
            _ => res.push(c),
        }
    }

    return res;
}

/// A resolution independent logo: a fixed canvas and the shapes drawn on it,
/// back to front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoImage {
    pub width: i32,
    pub height: i32,
    pub design: LogoDesign,
    pub shapes: Vec<Shape>,
}

impl LogoImage {
    pub fn glyph_name(&self) -> String {
        if let Some(glyph) = self.design.glyph {
            return glyph.to_string();
        }

        return "none".to_string();
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');

        for shape in &self.shapes {
            // Writing into a String can't fail.
            let _ = writeln!(svg, "  {}", shape.to_svg());
        }

        svg.push_str("</svg>\n");
        return svg;
    }
}
