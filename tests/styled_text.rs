//! Integration tests for building, transforming and rendering styled text.

use garnish::text::{
    CharacterSet, FontCatalog, LineStyle, ParagraphStyleOptions, StylePreset, StyledText,
    TextAlignment,
};
use garnish::{Color, StyledTextBuilder};

fn run_lengths(text: &StyledText) -> Vec<usize> {
    text.runs().map(|(range, _)| range.len()).collect()
}

#[test]
fn test_operations_cover_whole_text() {
    let text = StyledTextBuilder::new("cover me")
        .color(Color::BLUE)
        .kerning(2.0)
        .build();

    assert_eq!(run_lengths(&text), vec![8]);
    for index in 0..text.len() {
        let attrs = text.attributes_at(index).unwrap();
        assert_eq!(attrs.foreground, Some(Color::BLUE));
        assert_eq!(attrs.kerning, Some(2.0));
    }
    assert!(text.attributes_at(8).is_none());
}

#[test]
fn test_built_value_is_isolated_from_builder() {
    let builder = StyledTextBuilder::new("snapshot").color(Color::RED);
    let before = builder.build();
    let after = builder.color(Color::GREEN).set_string("changed").build();

    assert_eq!(before.as_str(), "snapshot");
    assert_eq!(before.attributes_at(0).unwrap().foreground, Some(Color::RED));
    assert_eq!(after.attributes_at(0).unwrap().foreground, Some(Color::GREEN));
}

#[test]
fn test_concatenation_keeps_both_runs() {
    let red = StyledText::plain("red").with_color(Color::RED);
    let blue = StyledText::plain("blue").with_color(Color::BLUE);
    let both = red + blue;

    assert_eq!(both.as_str(), "redblue");
    assert_eq!(run_lengths(&both), vec![3, 4]);
    assert_eq!(both.attributes_at(2).unwrap().foreground, Some(Color::RED));
    assert_eq!(both.attributes_at(3).unwrap().foreground, Some(Color::BLUE));
}

#[test]
fn test_uppercase_keeps_mixed_runs() {
    let mixed = StyledText::plain("straße").with_color(Color::RED) + StyledText::plain(" ok");
    let upper = mixed.with_uppercase(true);

    assert_eq!(upper.as_str(), "STRASSE OK");
    assert_eq!(run_lengths(&upper), vec![7, 3]);
    assert_eq!(upper.attributes_at(6).unwrap().foreground, Some(Color::RED));
    assert!(upper.attributes_at(7).unwrap().is_plain());
}

#[test]
fn test_trim_then_style() {
    let text = StyledTextBuilder::new("\n\t padded \n")
        .trim_characters(&CharacterSet::WhitespaceAndNewlines)
        .underline(Some(LineStyle::Double), Some(Color::GREEN))
        .build();

    assert_eq!(text.as_str(), "padded");
    let attrs = text.attributes_at(0).unwrap();
    assert_eq!(attrs.underline_style, Some(LineStyle::Double));
    assert_eq!(attrs.underline_color, Some(Color::GREEN));
}

#[test]
fn test_trim_custom_set_and_inverted() {
    let text = StyledText::plain("--==title==--").trimmed(&CharacterSet::chars("-="));
    assert_eq!(text.as_str(), "title");

    let digits_only = StyledText::plain("abc123def")
        .trimmed(&CharacterSet::DecimalDigits.inverted());
    assert_eq!(digits_only.as_str(), "123");
}

#[test]
fn test_with_string_truncates_runs() {
    let text = StyledText::plain("abc").with_color(Color::RED) + StyledText::plain("def");
    let shorter = text.with_string(Some("xy"));

    assert_eq!(shorter.as_str(), "xy");
    assert_eq!(run_lengths(&shorter), vec![2]);
    assert_eq!(shorter.attributes_at(1).unwrap().foreground, Some(Color::RED));

    assert_eq!(text.with_string(None), text);
}

#[test]
fn test_with_string_extends_last_run() {
    let text = StyledText::plain("ab").with_color(Color::RED);
    let longer = text.with_string(Some("abcdef"));

    assert_eq!(run_lengths(&longer), vec![6]);
    assert_eq!(longer.attributes_at(5).unwrap().foreground, Some(Color::RED));
}

#[test]
fn test_empty_builder_ignores_attributes() {
    let text = StyledTextBuilder::empty()
        .color(Color::RED)
        .alignment(TextAlignment::Right)
        .build();

    assert!(text.is_empty());
    assert_eq!(text.runs().count(), 0);

    let filled = text.with_string(Some("now"));
    assert!(filled.attributes_at(0).unwrap().is_plain());
}

#[test]
fn test_paragraph_options_merge() {
    let first = ParagraphStyleOptions {
        alignment: Some(TextAlignment::Center),
        ..Default::default()
    };
    let second = ParagraphStyleOptions {
        line_spacing: Some(4.0),
        ..Default::default()
    };

    let text = StyledTextBuilder::new("para")
        .paragraph_style(&first)
        .paragraph_style(&second)
        .build();

    let style = text.attributes_at(0).unwrap().paragraph.clone().unwrap();
    assert_eq!(style.alignment, TextAlignment::Center);
    assert_eq!(style.line_spacing, 4.0);
}

#[test]
fn test_font_named_falls_back_to_system() {
    let catalog = FontCatalog::new().add("Menlo");

    let known = StyledTextBuilder::new("x").font_named("Menlo", 11.0, &catalog).build();
    let font = known.attributes_at(0).unwrap().font.clone().unwrap();
    assert_eq!(font.family, "Menlo");

    let unknown = StyledTextBuilder::new("x").font_named("Nope", 11.0, &catalog).build();
    let font = unknown.attributes_at(0).unwrap().font.clone().unwrap();
    assert_eq!(font.family, garnish::text::SYSTEM_FAMILY);
    assert_eq!(font.size, 11.0);
}

#[test]
fn test_yaml_preset_applies_in_order() {
    let preset = StylePreset::from_yaml(
        r##"
color: "#FF0000"
background_color: "#0000FF"
underline: single
uppercase: true
paragraph:
  alignment: right
  head_indent: 8.0
"##,
    )
    .unwrap();

    let text = StyledTextBuilder::new("alert").apply_preset(&preset).build();
    assert_eq!(text.as_str(), "ALERT");

    let attrs = text.attributes_at(0).unwrap();
    assert_eq!(attrs.foreground, Some(Color::RED));
    assert_eq!(attrs.background, Some(Color::BLUE));
    assert_eq!(attrs.underline_style, Some(LineStyle::Single));

    let paragraph = attrs.paragraph.clone().unwrap();
    assert_eq!(paragraph.alignment, TextAlignment::Right);
    assert_eq!(paragraph.head_indent, 8.0);
}

#[test]
fn test_preset_rejects_unknown_fields() {
    assert!(StylePreset::from_yaml("colour: \"#FF0000\"\n").is_err());
    assert!(StylePreset::from_json(r#"{"paragraph": {"align": "left"}}"#).is_err());
}

#[test]
fn test_render_ansi_per_run() {
    let text = StyledText::plain("plain ") + StyledText::plain("red").with_color(Color::RED);
    let rendered = text.render_ansi();

    assert!(rendered.starts_with("plain "));
    assert!(rendered.contains("\x1b[38;5;196mred"));
    assert!(rendered.ends_with("\x1b[0m"));
}
