#[cfg(test)]
#[path = "logo_test.rs"]
mod tests;

use crate::domain::models::Answers;
use crate::domain::models::Glyph;
use crate::domain::models::LogoDesign;
use crate::domain::models::LogoImage;
use crate::domain::models::Paint;
use crate::domain::models::Palette;
use crate::domain::models::Shape;

const CANVAS_SIZE: i32 = 400;
const CANVAS_MARGIN: i32 = 20;
const GLYPH_STROKE_WIDTH: i32 = 12;
const FONT_FAMILY: &str = "Arial, sans-serif";
const FONT_SIZE: i32 = 40;

const DEFAULT_BRAND: &str = "Your Brand";
const DEFAULT_STYLE: &str = "minimal";
const DEFAULT_COLORS: &str = "blue, white";
const DEFAULT_LAYOUT: &str = "icon+text";

const BLUE: &str = "#2563eb";
const DARK: &str = "#1e293b";
const BLACK: &str = "#000000";
const WHITE: &str = "#ffffff";

/// Named colors, in lookup order.
const COLOR_TABLE: &[(&str, &str)] = &[
    ("blue", BLUE),
    ("dark", DARK),
    ("green", "#16a34a"),
    ("purple", "#7c3aed"),
    ("pink", "#ec4899"),
    ("orange", "#f97316"),
    ("black", BLACK),
    ("white", WHITE),
];

struct SymbolRule {
    keywords: &'static [&'static str],
    glyph: Glyph,
}

/// Checked in order, first match wins.
const SYMBOL_RULES: &[SymbolRule] = &[
    SymbolRule {
        keywords: &["leaf", "nature"],
        glyph: Glyph::Leaf,
    },
    SymbolRule {
        keywords: &["camera", "photo"],
        glyph: Glyph::Camera,
    },
];

/// Turns the logo answers (`q1` brand, `q2` style, `q3` colors, `q4` symbol,
/// `q5` layout) into an SVG logo. Pure: the same answers always give the same
/// image.
pub struct LogoSynthesizer {}

impl LogoSynthesizer {
    pub fn design(answers: &Answers) -> LogoDesign {
        let brand = answer_or(answers, "q1", DEFAULT_BRAND);
        let style = answer_or(answers, "q2", DEFAULT_STYLE).to_lowercase();
        let colors = answer_or(answers, "q3", DEFAULT_COLORS).to_lowercase();
        let symbol = answer_or(answers, "q4", "").to_lowercase();
        let layout = answer_or(answers, "q5", DEFAULT_LAYOUT).to_lowercase();

        let primary = resolve_primary(&colors);
        let secondary = contrast_for(primary);

        return LogoDesign {
            brand,
            style,
            show_text: layout.contains("text"),
            layout,
            palette: Palette {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
            },
            glyph: resolve_glyph(&symbol),
        };
    }

    pub fn synthesize(answers: &Answers) -> LogoImage {
        let design = LogoSynthesizer::design(answers);
        let center = CANVAS_SIZE / 2;
        let secondary = design.palette.secondary.to_string();

        let mut shapes = vec![Shape::Circle {
            cx: center,
            cy: center,
            r: CANVAS_SIZE / 2 - CANVAS_MARGIN,
            paint: Paint::Fill(design.palette.primary.to_string()),
        }];

        if let Some(glyph) = design.glyph {
            shapes.extend(glyph_shapes(glyph, center, &secondary));
        }

        if design.show_text {
            shapes.push(Shape::Text {
                x: center,
                y: center + 100,
                content: design.brand.to_string(),
                font_family: FONT_FAMILY.to_string(),
                font_size: FONT_SIZE,
                fill: secondary,
            });
        }

        return LogoImage {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            design,
            shapes,
        };
    }
}

fn answer_or(answers: &Answers, key: &str, default: &str) -> String {
    match answers.get(key) {
        Some(answer) if !answer.trim().is_empty() => return answer.to_string(),
        _ => return default.to_string(),
    }
}

fn resolve_primary(colors: &str) -> &'static str {
    for token in colors.split([',', ' ']).filter(|e| return !e.is_empty()) {
        if let Some((_, hex)) = COLOR_TABLE.iter().find(|(name, _)| return *name == token) {
            return *hex;
        }
    }

    return BLUE;
}

fn contrast_for(primary: &str) -> &'static str {
    if primary == BLACK || primary == DARK {
        return WHITE;
    }

    return BLACK;
}

fn resolve_glyph(symbol: &str) -> Option<Glyph> {
    return SYMBOL_RULES
        .iter()
        .find(|rule| {
            return rule
                .keywords
                .iter()
                .any(|keyword| return symbol.contains(keyword));
        })
        .map(|rule| return rule.glyph);
}

fn stroke(color: &str) -> Paint {
    return Paint::Stroke {
        color: color.to_string(),
        width: GLYPH_STROKE_WIDTH,
    };
}

fn glyph_shapes(glyph: Glyph, c: i32, color: &str) -> Vec<Shape> {
    match glyph {
        Glyph::Leaf => {
            let d = format!(
                "M {c} {top} Q {l1} {up}, {l2} {down} Q {c} {bottom}, {r2} {down} Q {r1} {up}, {c} {top}",
                top = c - 80,
                up = c - 40,
                down = c + 40,
                bottom = c + 80,
                l1 = c - 60,
                l2 = c - 40,
                r1 = c + 60,
                r2 = c + 40,
            );

            return vec![
                Shape::Path {
                    d,
                    paint: stroke(color),
                },
                Shape::Circle {
                    cx: c,
                    cy: c - 100,
                    r: 15,
                    paint: Paint::Fill(color.to_string()),
                },
            ];
        }
        Glyph::Camera => {
            return vec![
                Shape::Rect {
                    x: c - 80,
                    y: c - 60,
                    width: 160,
                    height: 120,
                    rx: 20,
                    paint: stroke(color),
                },
                Shape::Circle {
                    cx: c + 40,
                    cy: c - 20,
                    r: 20,
                    paint: stroke(color),
                },
                Shape::Circle {
                    cx: c + 40,
                    cy: c - 20,
                    r: 8,
                    paint: Paint::Fill(color.to_string()),
                },
            ];
        }
    }
}
