use super::*;
use crate::page::{Page, ResultText};
use proptest::prelude::*;

fn rendered(page: &MemoryPage, colors: bool) -> String {
    let mut out = Vec::new();
    render_page(&mut out, page, colors).unwrap();
    String::from_utf8(out).unwrap()
}

fn suggested_page() -> MemoryPage {
    let mut page = MemoryPage::new();
    page.set_result_text(ResultText::Suggestion("Smile!".to_string()));
    page.set_background_color("#ffcc00");
    page.set_result_color("#000000");
    page
}

#[test]
fn test_plain_render_is_the_result_text() {
    assert_eq!(rendered(&suggested_page(), false), "Suggestion: Smile!\n");
}

#[test]
fn test_blank_page_renders_nothing() {
    assert_eq!(rendered(&MemoryPage::new(), true), "");
}

#[test]
fn test_colored_render_applies_page_colors() {
    let out = rendered(&suggested_page(), true);
    assert!(out.contains("48;2;255;204;0"), "background missing: {:?}", out);
    assert!(out.contains("38;2;0;0;0"), "foreground missing: {:?}", out);
    assert!(out.contains("Suggestion:"));
    assert!(out.contains("Smile!"));
    assert!(out.ends_with('\n'));
}

#[test]
fn test_colored_render_skips_non_hex_colors() {
    let mut page = MemoryPage::new();
    page.set_result_text(ResultText::connection_error());
    page.set_background_color("papayawhip");

    let out = rendered(&page, true);
    assert!(!out.contains("48;2;"));
    assert!(out.contains("Error connecting to server."));
}

#[test]
fn test_parse_hex_color_forms() {
    assert_eq!(
        parse_hex_color("#ffcc00"),
        Some(Color::Rgb {
            r: 255,
            g: 204,
            b: 0
        })
    );
    assert_eq!(
        parse_hex_color("#fc0"),
        Some(Color::Rgb {
            r: 255,
            g: 204,
            b: 0
        })
    );
    assert_eq!(parse_hex_color("ffcc00"), None);
    assert_eq!(parse_hex_color("#ffcc0"), None);
    assert_eq!(parse_hex_color("#gggggg"), None);
    assert_eq!(parse_hex_color("#ééé"), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_six_digit_hex_parses_to_its_channels(r: u8, g: u8, b: u8) {
        let value = format!("#{:02x}{:02X}{:02x}", r, g, b);
        prop_assert_eq!(parse_hex_color(&value), Some(Color::Rgb { r, g, b }));
    }
}
