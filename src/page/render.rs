//! Terminal rendering of a page's result area

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use super::MemoryPage;

/// Write the result area of `page` as one line
///
/// With `colors` on, the label is bold and the page's colors are applied
/// when they are hex colors. Anything else (named CSS colors, `rgb()`) is
/// left to the terminal's defaults.
pub fn render_page<W: Write>(out: &mut W, page: &MemoryPage, colors: bool) -> io::Result<()> {
    let Some(result) = page.result() else {
        return Ok(());
    };

    if !colors {
        return writeln!(out, "{}", result.plain_text());
    }

    if let Some(bg) = page.background_color().and_then(parse_hex_color) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if let Some(fg) = page.result_color().and_then(parse_hex_color) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(label) = result.label() {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(label),
            SetAttribute(Attribute::NormalIntensity),
            Print(" ")
        )?;
    }
    queue!(out, Print(result.body()), ResetColor, Print("\n"))?;
    out.flush()
}

/// Parse `#rgb` or `#rrggbb`
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #abc expands to #aabbcc
            let mut digits = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Color::Rgb {
                r: digits.next()??,
                g: digits.next()??,
                b: digits.next()??,
            })
        }
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
