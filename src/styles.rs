use once_cell::sync::Lazy;
use std::collections::HashMap;

// @module: Named ASS style presets

/// Fallback preset name for unknown style names
pub const DEFAULT_STYLE: &str = "modern";

/// An immutable named ASS style configuration.
///
/// Presets share font, size and alignment; they differ only in the
/// outline/shadow/vertical-margin triple.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePreset {
    /// Preset name as selected by callers
    pub name: &'static str,

    /// Font family
    pub font: &'static str,

    /// Font size in script units
    pub size: u32,

    /// Outline width
    pub outline_width: f32,

    /// Shadow depth
    pub shadow_depth: f32,

    /// Vertical margin in script units
    pub margin_vertical: u32,

    /// Numpad-style alignment (2 = bottom center)
    pub alignment: u32,
}

// @const: Static preset table, looked up by name, never mutated
static STYLE_PRESETS: Lazy<HashMap<&'static str, StylePreset>> = Lazy::new(|| {
    let presets = [
        StylePreset {
            name: "modern",
            font: "Arial",
            size: 64,
            outline_width: 3.0,
            shadow_depth: 0.0,
            margin_vertical: 80,
            alignment: 2,
        },
        StylePreset {
            name: "elegant",
            font: "Arial",
            size: 64,
            outline_width: 1.5,
            shadow_depth: 2.0,
            margin_vertical: 120,
            alignment: 2,
        },
        StylePreset {
            name: "bold",
            font: "Arial",
            size: 64,
            outline_width: 4.0,
            shadow_depth: 1.0,
            margin_vertical: 60,
            alignment: 2,
        },
        StylePreset {
            name: "minimal",
            font: "Arial",
            size: 64,
            outline_width: 0.5,
            shadow_depth: 0.0,
            margin_vertical: 100,
            alignment: 2,
        },
    ];
    presets.into_iter().map(|p| (p.name, p)).collect()
});

/// Look up a preset by name, falling back to `modern` for unknown names.
pub fn preset(name: &str) -> &'static StylePreset {
    STYLE_PRESETS
        .get(name)
        .unwrap_or_else(|| &STYLE_PRESETS[DEFAULT_STYLE])
}

/// Whether a preset with this exact name exists
pub fn is_known_preset(name: &str) -> bool {
    STYLE_PRESETS.contains_key(name)
}

/// All preset names, for CLI help and validation messages
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STYLE_PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
