//! Theme, badge colors, and icon glyphs.
//!
//! Registry color values are opaque hex strings; registry icon values are
//! opaque identifiers. This module is the rendering collaborator that turns
//! both into terminal output.

use ratatui::style::{Color, Style};
use std::str::FromStr;

/// Resolved theme styles.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for focus and highlights.
    pub accent: Color,
    /// Style for the selected list entry.
    pub selection_style: Style,
    /// Style for secondary text.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Builds a theme from an accent color name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        let accent = parse_color(accent_color_str);

        Self {
            accent,
            selection_style: Style::default().fg(Color::Black).bg(accent),
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Parses a color name or hex code, falling back to cyan.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    Color::Cyan
}

/// Parses a registry badge color (hex string) into a terminal color.
///
/// Registry colors are registry-controlled constants, so a parse failure here
/// means the registry itself is broken; the magenta fallback makes that
/// visible rather than invisible.
#[must_use]
pub fn badge_color(hex: &str) -> Color {
    parse_hex_color(hex).map_or(Color::Magenta, |(r, g, b)| Color::Rgb(r, g, b))
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&format!("{}{}", &s[0..1], &s[0..1]), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&format!("{}{}", &s[1..2], &s[1..2]), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&format!("{}{}", &s[2..3], &s[2..3]), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

/// Maps an opaque icon identifier to a terminal glyph.
#[must_use]
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "hospital" => "⌂",
        "video" => "▶",
        "home" => "⌂",
        "stethoscope" => "⚕",
        "nurse" => "✚",
        "therapy" => "✋",
        "medkit" => "✚",
        "child" => "☺",
        "heart" => "♥",
        "skin" => "◌",
        "female" => "♀",
        "bone" => "⌖",
        "bandage" => "✚",
        "syringe" => "✛",
        "elder" => "♿",
        _ => "·",
    }
}
