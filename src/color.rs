use thiserror::Error;

use crate::constants::{CURSOR_ON_DARK, CURSOR_ON_LIGHT, LUMINANCE_THRESHOLD};
use crate::state::Theme;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unsupported colour syntax: {0:?}")]
    Syntax(String),
    #[error("expected at least three channels, found {0}")]
    ChannelCount(usize),
    #[error("invalid channel value: {0:?}")]
    Channel(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses the `rgb(...)` / `rgba(...)` form browsers return from
    /// `getComputedStyle`. Alpha is ignored.
    pub fn parse_css(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        let body = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Syntax(trimmed.to_string()))?;

        let channels: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if channels.len() < 3 {
            return Err(ColorParseError::ChannelCount(channels.len()));
        }

        Ok(Self::new(
            parse_channel(channels[0])?,
            parse_channel(channels[1])?,
            parse_channel(channels[2])?,
        ))
    }

    // BT.709
    pub fn luminance(self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }
}

fn parse_channel(raw: &str) -> Result<u8, ColorParseError> {
    raw.parse::<u8>()
        .map_err(|_| ColorParseError::Channel(raw.to_string()))
}

/// Dark cursor over light text, light cursor over dark text.
pub fn contrast_for(luminance: f64) -> &'static str {
    if luminance > LUMINANCE_THRESHOLD {
        CURSOR_ON_LIGHT
    } else {
        CURSOR_ON_DARK
    }
}

pub fn theme_default_cursor(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => CURSOR_ON_DARK,
        Theme::Light => CURSOR_ON_LIGHT,
    }
}

/// Cursor colour for text painted in `css`, falling back to the theme default
/// when the value cannot be read.
pub fn cursor_color_for_css(css: &str, theme: Theme) -> &'static str {
    match Rgb::parse_css(css) {
        Ok(rgb) => contrast_for(rgb.luminance()),
        Err(err) => {
            log::debug!("cursor colour fallback: {err}");
            theme_default_cursor(theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_computed_style_forms() {
        assert_eq!(Rgb::parse_css("rgb(255, 149, 0)"), Ok(Rgb::new(255, 149, 0)));
        assert_eq!(Rgb::parse_css("rgba(48, 62, 247, 0.5)"), Ok(Rgb::new(48, 62, 247)));
        assert_eq!(Rgb::parse_css("  RGB(1,2,3) "), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(Rgb::parse_css("rgb(10 20 30 / 40%)"), Ok(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn rejects_unexpected_formats() {
        assert!(matches!(Rgb::parse_css("#ffffff"), Err(ColorParseError::Syntax(_))));
        assert!(matches!(Rgb::parse_css("color(srgb 1 1 1)"), Err(ColorParseError::Syntax(_))));
        assert_eq!(Rgb::parse_css("rgb(1, 2)"), Err(ColorParseError::ChannelCount(2)));
        assert!(matches!(Rgb::parse_css("rgb(1.5, 2, 3)"), Err(ColorParseError::Channel(_))));
        assert!(matches!(Rgb::parse_css("rgb(256, 2, 3)"), Err(ColorParseError::Channel(_))));
    }

    #[test]
    fn extremes_pick_opposite_cursors() {
        let white = Rgb::new(255, 255, 255).luminance();
        let black = Rgb::new(0, 0, 0).luminance();

        assert!((white - 1.0).abs() < 1e-9);
        assert_eq!(black, 0.0);
        assert_eq!(contrast_for(white), "#000000");
        assert_eq!(contrast_for(black), "#ffffff");
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(contrast_for(0.6 + 1e-9), "#000000");
        assert_eq!(contrast_for(0.6), "#ffffff");
        assert_eq!(contrast_for(0.6 - 1e-9), "#ffffff");
    }

    #[test]
    fn unparseable_colour_uses_theme_default() {
        assert_eq!(cursor_color_for_css("transparent", Theme::Dark), "#ffffff");
        assert_eq!(cursor_color_for_css("transparent", Theme::Light), "#000000");
        assert_eq!(cursor_color_for_css("rgb(255, 255, 255)", Theme::Dark), "#000000");
    }
}
