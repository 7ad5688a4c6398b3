//! Scene palette: category colors, alphas, and point radii.
//!
//! Category colors are resolved through [`ScenePalette::color_for`] with an
//! explicit default for unknown categories, never by bare table lookup. An
//! optional JSON file (`{"category": "#rrggbb", ...}`) can override or extend
//! the built-in table.

use std::collections::HashMap;
use std::path::Path;

use egui::Color32;
use log::warn;
use once_cell::sync::Lazy;
use thiserror::Error;

static DEFAULT_CATEGORY_COLORS: Lazy<HashMap<String, Color32>> = Lazy::new(|| {
    [
        ("mine", Color32::from_rgb(0xff, 0x4d, 0x6d)),
        ("forest", Color32::from_rgb(0x00, 0xc3, 0xa8)),
        ("water", Color32::from_rgb(0x28, 0x74, 0xff)),
        ("urban", Color32::from_rgb(0xff, 0xae, 0x00)),
        ("rangeland", Color32::from_rgb(0x84, 0x5e, 0xf7)),
        ("grassland", Color32::from_rgb(0x58, 0xd6, 0x8d)),
        ("agriculture", Color32::from_rgb(0xff, 0x6e, 0xc7)),
        ("wetland", Color32::from_rgb(0x2b, 0xb0, 0xed)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect()
});

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("palette file is not a JSON object of category → hex color: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Colors, alphas, and sizes used by the scatter renderer.
#[derive(Debug, Clone)]
pub struct ScenePalette {
    pub background: Color32,
    pub accent_stroke: Color32,
    pub default_color: Color32,
    pub highlight_alpha: f32,
    pub muted_alpha: f32,
    pub highlight_radius: f32,
    pub muted_radius: f32,
    pub hover_ring_radius: f32,
    pub hover_ring_width: f32,
    colors: HashMap<String, Color32>,
}

impl Default for ScenePalette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf5, 0xf8),
            accent_stroke: Color32::from_rgb(0x1c, 0x2a, 0x4a),
            default_color: Color32::from_rgb(0xff, 0x7b, 0x45),
            highlight_alpha: 0.95,
            muted_alpha: 0.10,
            highlight_radius: 3.8,
            muted_radius: 2.2,
            hover_ring_radius: 6.2,
            hover_ring_width: 1.6,
            colors: DEFAULT_CATEGORY_COLORS.clone(),
        }
    }
}

impl ScenePalette {
    /// Resolve the display color for a category, falling back to the default
    /// for unknown categories.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.colors
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Fill color for a point: category color at the highlight or muted alpha.
    pub fn fill_color(&self, category: &str, highlighted: bool) -> Color32 {
        let base = self.color_for(category);
        let alpha = if highlighted {
            self.highlight_alpha
        } else {
            self.muted_alpha
        };
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), (alpha * 255.0) as u8)
    }

    /// Merge category→hex overrides from a JSON file over the built-in table.
    /// Entries with unparseable hex values are skipped with a warning.
    pub fn load_overrides(&mut self, path: &Path) -> Result<(), PaletteError> {
        let text = std::fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&text)?;
        for (category, hex) in overrides {
            match parse_hex_color(&hex) {
                Some(color) => {
                    self.colors.insert(category, color);
                }
                None => warn!("ignoring palette entry `{category}`: bad hex color `{hex}`"),
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb` (leading `#` optional) into an opaque color.
pub(crate) fn parse_hex_color(s: &str) -> Option<Color32> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Color32::from_rgb(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_resolves_to_table_color() {
        let palette = ScenePalette::default();
        assert_eq!(palette.color_for("water"), Color32::from_rgb(0x28, 0x74, 0xff));
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let palette = ScenePalette::default();
        assert_eq!(palette.color_for("lava"), palette.default_color);
    }

    #[test]
    fn hex_parsing_accepts_leading_hash_and_rejects_short_strings() {
        assert_eq!(
            parse_hex_color("#ff4d6d"),
            Some(Color32::from_rgb(0xff, 0x4d, 0x6d))
        );
        assert_eq!(parse_hex_color("ff4d6d"), parse_hex_color("#ff4d6d"));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }
}
