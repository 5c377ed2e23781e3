//! Color themes for the viewer, with optional TOML overrides.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum ThemeName {
    #[default]
    Warm,
    Mono,
    Ansi,
    /// No colors at all.
    Plain,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeName::Warm => "Warm",
            ThemeName::Mono => "Mono",
            ThemeName::Ansi => "Ansi",
            ThemeName::Plain => "Plain",
        };
        write!(f, "{label}")
    }
}

/// Resolved palette the renderer works with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeColors {
    pub(crate) accent: Color,
    pub(crate) text: Color,
    pub(crate) dim: Color,
    pub(crate) border: Color,
    pub(crate) highlight: Color,
}

impl ThemeName {
    pub(crate) fn colors(self) -> ThemeColors {
        match self {
            ThemeName::Warm => ThemeColors {
                accent: Color::Rgb(0xE8, 0x7A, 0x3D),
                text: Color::Rgb(0xE6, 0xDE, 0xD3),
                dim: Color::Rgb(0x8A, 0x82, 0x76),
                border: Color::Rgb(0x5C, 0x54, 0x48),
                highlight: Color::Rgb(0xF2, 0xB8, 0x80),
            },
            ThemeName::Mono => ThemeColors {
                accent: Color::White,
                text: Color::Gray,
                dim: Color::DarkGray,
                border: Color::DarkGray,
                highlight: Color::White,
            },
            ThemeName::Ansi => ThemeColors {
                accent: Color::Yellow,
                text: Color::White,
                dim: Color::DarkGray,
                border: Color::Blue,
                highlight: Color::Cyan,
            },
            ThemeName::Plain => ThemeColors {
                accent: Color::Reset,
                text: Color::Reset,
                dim: Color::Reset,
                border: Color::Reset,
                highlight: Color::Reset,
            },
        }
    }
}

/// On-disk theme override: `[meta]` name plus `[colors]` hex values.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ThemeFile {
    #[serde(default)]
    pub(crate) meta: ThemeFileMeta,
    #[serde(default)]
    pub(crate) colors: ThemeFileColors,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ThemeFileMeta {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ThemeFileColors {
    pub(crate) accent: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) dim: Option<String>,
    pub(crate) border: Option<String>,
    pub(crate) highlight: Option<String>,
}

pub(crate) fn load_theme_file(path: &Path) -> Result<ThemeFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid theme file {}", path.display()))
}

/// Overlay any colors the file provides onto the base palette. Unparseable
/// values are ignored rather than failing the whole theme.
pub(crate) fn apply_theme_file(base: ThemeColors, file: &ThemeFile) -> ThemeColors {
    let pick = |raw: &Option<String>, fallback: Color| {
        raw.as_deref().and_then(parse_hex_color).unwrap_or(fallback)
    };
    ThemeColors {
        accent: pick(&file.colors.accent, base.accent),
        text: pick(&file.colors.text, base.text),
        dim: pick(&file.colors.dim, base.dim),
        border: pick(&file.colors.border, base.border),
        highlight: pick(&file.colors.highlight, base.highlight),
    }
}

fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_handles_valid_and_invalid_input() {
        assert_eq!(parse_hex_color("#ff8800"), Some(Color::Rgb(0xFF, 0x88, 0x00)));
        assert_eq!(parse_hex_color(" #010203 "), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_hex_color("ff8800"), None);
        assert_eq!(parse_hex_color("#ff88"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn theme_file_overrides_only_named_colors() {
        let file: ThemeFile = toml::from_str(
            r##"
            [meta]
            name = "ember"

            [colors]
            accent = "#ff0000"
            "##,
        )
        .expect("valid theme file");
        let base = ThemeName::Mono.colors();
        let merged = apply_theme_file(base, &file);
        assert_eq!(merged.accent, Color::Rgb(0xFF, 0, 0));
        assert_eq!(merged.text, base.text);
        assert_eq!(file.meta.name.as_deref(), Some("ember"));
    }

    #[test]
    fn invalid_color_values_fall_back_to_base() {
        let file: ThemeFile = toml::from_str(
            r##"
            [colors]
            text = "not-a-color"
            "##,
        )
        .expect("valid toml");
        let base = ThemeName::Warm.colors();
        let merged = apply_theme_file(base, &file);
        assert_eq!(merged.text, base.text);
    }

    #[test]
    fn plain_theme_uses_reset_everywhere() {
        let colors = ThemeName::Plain.colors();
        assert_eq!(colors.accent, Color::Reset);
        assert_eq!(colors.text, Color::Reset);
    }
}
