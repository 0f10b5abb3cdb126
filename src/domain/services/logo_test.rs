use test_utils::logo_answers_fixture;

use super::LogoSynthesizer;
use crate::domain::models::Answers;
use crate::domain::models::Glyph;
use crate::domain::models::Shape;

fn answers(pairs: &[(&str, &str)]) -> Answers {
    return pairs.iter().cloned().collect();
}

#[test]
fn it_synthesizes_leaf_logo() {
    let image = LogoSynthesizer::synthesize(&logo_answers_fixture().into_iter().collect());

    insta::assert_snapshot!(image.to_svg(), @r###"
    <svg width="400" height="400" viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg">
      <circle cx="200" cy="200" r="180" fill="#2563eb" />
      <path d="M 200 120 Q 140 160, 160 240 Q 200 280, 240 240 Q 260 160, 200 120" fill="none" stroke="#000000" stroke-width="12" />
      <circle cx="200" cy="100" r="15" fill="#000000" />
      <text x="200" y="300" font-family="Arial, sans-serif" font-size="40" font-weight="bold" fill="#000000" text-anchor="middle">Acme</text>
    </svg>
    "###);
}

#[test]
fn it_synthesizes_camera_logo() {
    let image = LogoSynthesizer::synthesize(&answers(&[
        ("q1", "Snap Co"),
        ("q3", "Purple and gold"),
        ("q4", "A vintage PHOTO lens"),
        ("q5", "symbol-only"),
    ]));

    insta::assert_snapshot!(image.to_svg(), @r###"
    <svg width="400" height="400" viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg">
      <circle cx="200" cy="200" r="180" fill="#7c3aed" />
      <rect x="120" y="140" width="160" height="120" rx="20" fill="none" stroke="#000000" stroke-width="12" />
      <circle cx="240" cy="180" r="20" fill="none" stroke="#000000" stroke-width="12" />
      <circle cx="240" cy="180" r="8" fill="#000000" />
    </svg>
    "###);
}

#[test]
fn it_uses_defaults_for_missing_answers() {
    let design = LogoSynthesizer::design(&Answers::default());

    assert_eq!(design.brand, "Your Brand");
    assert_eq!(design.style, "minimal");
    assert_eq!(design.layout, "icon+text");
    assert_eq!(design.palette.primary, "#2563eb");
    assert_eq!(design.palette.secondary, "#000000");
    assert_eq!(design.glyph, None);
    assert!(design.show_text);

    let image = LogoSynthesizer::synthesize(&Answers::default());
    assert_eq!(image.shapes.len(), 2);
    assert!(matches!(
        &image.shapes[1],
        Shape::Text { content, .. } if content == "Your Brand"
    ));
}

#[test]
fn it_picks_first_known_color() {
    let design = LogoSynthesizer::design(&answers(&[("q3", "red, blue")]));
    assert_eq!(design.palette.primary, "#2563eb");

    let design = LogoSynthesizer::design(&answers(&[("q3", ",,  Orange,green")]));
    assert_eq!(design.palette.primary, "#f97316");

    let design = LogoSynthesizer::design(&answers(&[("q3", "teal and gold")]));
    assert_eq!(design.palette.primary, "#2563eb");
}

#[test]
fn it_contrasts_dark_primaries_with_white() {
    let design = LogoSynthesizer::design(&answers(&[("q3", "black, blue")]));
    assert_eq!(design.palette.primary, "#000000");
    assert_eq!(design.palette.secondary, "#ffffff");

    let design = LogoSynthesizer::design(&answers(&[("q3", "dark")]));
    assert_eq!(design.palette.primary, "#1e293b");
    assert_eq!(design.palette.secondary, "#ffffff");

    let design = LogoSynthesizer::design(&answers(&[("q3", "white")]));
    assert_eq!(design.palette.secondary, "#000000");
}

#[test]
fn it_matches_symbol_keywords() {
    let design = LogoSynthesizer::design(&answers(&[("q4", "something with nature")]));
    assert_eq!(design.glyph, Some(Glyph::Leaf));

    let design = LogoSynthesizer::design(&answers(&[("q4", "leaf or camera")]));
    assert_eq!(design.glyph, Some(Glyph::Leaf));

    let design = LogoSynthesizer::design(&answers(&[("q4", "rocket")]));
    assert_eq!(design.glyph, None);
}

#[test]
fn it_hides_text_for_symbol_only() {
    let image = LogoSynthesizer::synthesize(&answers(&[("q1", "Acme"), ("q5", "Symbol-Only")]));

    assert!(!image.design.show_text);
    assert!(!image
        .shapes
        .iter()
        .any(|shape| return matches!(shape, Shape::Text { .. })));
}

#[test]
fn it_shows_text_for_text_only() {
    let image = LogoSynthesizer::synthesize(&answers(&[("q1", "Acme"), ("q5", "text-only")]));
    assert!(image.design.show_text);
}

#[test]
fn it_escapes_brand_text() {
    let image = LogoSynthesizer::synthesize(&answers(&[("q1", "Fish & <Chips>")]));
    assert!(image
        .to_svg()
        .contains(">Fish &amp; &lt;Chips&gt;</text>"));
}

#[test]
fn it_is_deterministic() {
    let first = LogoSynthesizer::synthesize(&logo_answers_fixture().into_iter().collect());
    let second = LogoSynthesizer::synthesize(&logo_answers_fixture().into_iter().collect());

    assert_eq!(first, second);
    assert_eq!(first.to_svg(), second.to_svg());
}
