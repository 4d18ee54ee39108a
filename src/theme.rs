//! Colour palette for the terminal view
//! Optionally read from a kitty.conf style file (e.g. an Omarchy theme)

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,    // Borders, key hints
    pub success: Color,   // Packed entries
    pub warning: Color,   // Entries still to pack
    pub text: Color,      // Primary text
    pub text_dim: Color,  // Suffixes, footer labels
    pub inactive: Color,  // Separators
    pub header: Color,    // List heading
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(250, 179, 135),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(250, 179, 135),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
        }
    }
}

impl Theme {
    /// Load the palette from `path`, or the built-in one when there is none
    pub fn load(path: Option<&Path>) -> Self {
        match path.and_then(Self::from_file) {
            Some(theme) => theme,
            None => Self::default(),
        }
    }

    fn from_file(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Could not read theme {}: {}", path.display(), e);
                return None;
            }
        };
        Self::from_kitty_conf(&content)
    }

    fn from_kitty_conf(content: &str) -> Option<Self> {
        let colors = parse_kitty_conf(content);
        if colors.is_empty() {
            return None;
        }

        let fallback = Self::default();
        let accent = pick(&colors, &["color2", "color10"], fallback.accent);

        Some(Self {
            accent,
            success: accent,
            warning: pick(&colors, &["color4", "color12"], fallback.warning),
            text: pick(&colors, &["foreground"], fallback.text),
            text_dim: pick(&colors, &["color8"], fallback.text_dim),
            inactive: pick(&colors, &["inactive_border_color", "color8"], fallback.inactive),
            header: pick(&colors, &["color1"], fallback.header),
        })
    }
}

/// First of `keys` present in `colors`
fn pick(colors: &HashMap<String, Color>, keys: &[&str], default: Color) -> Color {
    keys.iter()
        .find_map(|k| colors.get(*k))
        .copied()
        .unwrap_or(default)
}

/// `key value` pairs whose value is a hex colour; everything else is ignored
fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once(char::is_whitespace)?;
            Some((key.trim().to_string(), parse_hex_color(value)?))
        })
        .collect()
}

/// `#RRGGBB` or `#RGB`
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }

    match s.len() {
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
