//! Property tests for color parsing, formatting and blending.

use garnish::{Color, ColorError};
use proptest::prelude::*;

fn unit_color() -> impl Strategy<Value = Color> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(r, g, b, a)| Color::new(r, g, b, a))
}

proptest! {
    #[test]
    fn hex_round_trips_through_bytes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::from_rgb8(r, g, b);
        let hex = color.to_hex();

        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(hex.to_uppercase(), hex.clone());

        let parsed = Color::from_hex(&hex).unwrap();
        prop_assert_eq!(parsed.to_rgb8(), (r, g, b));
        prop_assert_eq!(Color::from_hex(&hex.to_lowercase()).unwrap(), parsed);
    }

    #[test]
    fn translucent_hex_parses_back(color in unit_color(), alpha in 0.0f64..0.99) {
        let color = color.with_alpha(alpha);
        let hex = color.to_hex();
        prop_assert_eq!(hex.len(), 9);

        let parsed: Color = hex.parse().unwrap();
        prop_assert_eq!(parsed.to_hex(), hex);
    }

    #[test]
    fn blend_endpoints_are_exact(a in unit_color(), b in unit_color()) {
        prop_assert_eq!(Color::blend(a, b, 0.0), a);
        prop_assert_eq!(Color::blend(a, b, 1.0), b);
        prop_assert_eq!(Color::blend(a, b, -3.0), a);
        prop_assert_eq!(Color::blend(a, b, 7.0), b);
    }

    #[test]
    fn blend_with_itself_is_identity(color in unit_color(), t in 0.0f64..=1.0) {
        prop_assert_eq!(Color::blend(color, color, t), color);
    }

    #[test]
    fn blend_stays_between_inputs(a in unit_color(), b in unit_color(), t in 0.0f64..=1.0) {
        let mixed = Color::blend(a, b, t);
        let between = |x: f64, y: f64, v: f64| x.min(y) - 1e-12 <= v && v <= x.max(y) + 1e-12;
        prop_assert!(between(a.red(), b.red(), mixed.red()));
        prop_assert!(between(a.green(), b.green(), mixed.green()));
        prop_assert!(between(a.blue(), b.blue(), mixed.blue()));
        prop_assert!(between(a.alpha(), b.alpha(), mixed.alpha()));
    }

    #[test]
    fn adjust_zero_is_identity(color in unit_color()) {
        prop_assert_eq!(color.adjust(0.0), color);
    }

    #[test]
    fn adjust_keeps_channels_in_unit_range(color in unit_color(), pct in -500.0f64..500.0) {
        let (r, g, b, a) = color.adjust(pct).components();
        for channel in [r, g, b] {
            prop_assert!((0.0..=1.0).contains(&channel));
        }
        prop_assert_eq!(a, color.alpha());
    }

    #[test]
    fn random_colors_are_opaque(seed in any::<u64>()) {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let color = Color::random_with(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(color.alpha(), 1.0);
    }
}

#[test]
fn test_packed_red() {
    let red = Color::from_packed(0xFF0000);
    assert_eq!(red.components(), (1.0, 0.0, 0.0, 1.0));
    assert_eq!(red, Color::RED);
}

#[test]
fn test_midpoint_of_black_and_white() {
    let gray = Color::blend(Color::BLACK, Color::WHITE, 0.5);
    assert_eq!(gray.components(), (0.5, 0.5, 0.5, 1.0));
    assert_eq!(gray.to_hex(), "#808080");
}

#[test]
fn test_garbage_is_invalid_format() {
    match Color::from_hex("not-a-color") {
        Err(ColorError::InvalidFormat { input, .. }) => assert_eq!(input, "not-a-color"),
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_from_hex_rejects_alpha_digits() {
    assert!(Color::from_hex("#11223344").is_err());
    assert!("#11223344".parse::<Color>().is_ok());
}

#[test]
fn test_serde_uses_hex_text() {
    let json = serde_json::to_string(&Color::from_rgb8(0x12, 0xAB, 0xEF)).unwrap();
    assert_eq!(json, "\"#12ABEF\"");

    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_rgb8(), (0x12, 0xAB, 0xEF));

    assert!(serde_json::from_str::<Color>("\"#XYZ\"").is_err());
}

#[test]
fn test_lighter_and_darker_ignore_sign() {
    let base = Color::rgb(0.5, 0.5, 0.5);
    assert_eq!(base.lighter(-10.0), base.lighter(10.0));
    assert_eq!(base.darker(-10.0), base.darker(10.0));
    assert!(base.darker(10.0).red() < base.red());
}
