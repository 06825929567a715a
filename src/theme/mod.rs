//! The theme data model: one record of color, typography, spacing, and
//! effect tokens driving everything the exporters emit.
//!
//! Serialized field names stay camelCase so persisted sessions, presets,
//! and the JSON export all share one stable shape.

use serde::{Deserialize, Serialize};

/// Fonts the editor offers in its typography pickers. The serializer
/// accepts any string; this list only bounds the UI.
pub const FONT_OPTIONS: [&str; 5] = [
    "Inter",
    "Roboto",
    "Playfair Display",
    "JetBrains Mono",
    "System-UI",
];

/// CSS easing keywords offered for the hover transition.
pub const EASING_OPTIONS: [&str; 5] = ["linear", "ease", "ease-in", "ease-out", "ease-in-out"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: String,
    pub heading_font: String,
    /// Base size in pixels, practical range 12-24.
    pub base_size: u32,
    /// Unitless multiplier, practical range 1.0-2.0.
    pub line_height: f64,
    /// Multiple of 100 in 100-900.
    pub font_weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpacing {
    pub base: u32,
    pub border_radius: u32,
    pub gap: u32,
}

/// Elevation tier, resolved to a concrete `box-shadow` expression at
/// export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowTier {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Hard,
}

impl ShadowTier {
    pub const ALL: [Self; 6] = [Self::None, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Hard];

    /// The exact `box-shadow` value emitted for this tier. Consumers rely
    /// on these strings byte-for-byte.
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            Self::Md => "0 4px 6px -1px rgb(0 0 0 / 0.1)",
            Self::Lg => "0 10px 15px -3px rgb(0 0 0 / 0.1)",
            Self::Xl => "0 20px 25px -5px rgb(0 0 0 / 0.1)",
            Self::Hard => "4px 4px 0px 0px rgba(0,0,0,1)",
        }
    }
}

/// Effect tokens. The five hover fields are optional on the wire; absent
/// fields resolve to the documented defaults here, once, so downstream
/// code always sees concrete values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEffects {
    pub shadow: ShadowTier,
    pub border_width: u32,
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f64,
    #[serde(default = "default_hover_opacity")]
    pub hover_opacity: f64,
    /// Positive "lift" magnitude in pixels; exported as a negative
    /// Y-translation.
    #[serde(default)]
    pub hover_shift: f64,
    /// Transition duration in seconds.
    #[serde(default = "default_hover_duration")]
    pub hover_duration: f64,
    #[serde(default = "default_hover_easing")]
    pub hover_easing: String,
}

fn default_hover_scale() -> f64 {
    1.0
}

fn default_hover_opacity() -> f64 {
    1.0
}

fn default_hover_duration() -> f64 {
    0.2
}

fn default_hover_easing() -> String {
    "ease-out".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub effects: ThemeEffects,
}

impl Default for Theme {
    /// The "Modern Blue" starting point every session begins from.
    fn default() -> Self {
        Self {
            colors: ThemeColors {
                primary: "#3b82f6".to_string(),
                secondary: "#8b5cf6".to_string(),
                background: "#ffffff".to_string(),
                surface: "#f3f4f6".to_string(),
                text: "#111827".to_string(),
                border: "#e5e7eb".to_string(),
            },
            typography: ThemeTypography {
                font_family: "Inter".to_string(),
                heading_font: "Inter".to_string(),
                base_size: 16,
                line_height: 1.5,
                font_weight: 400,
            },
            spacing: ThemeSpacing {
                base: 16,
                border_radius: 8,
                gap: 16,
            },
            effects: ThemeEffects {
                shadow: ShadowTier::Sm,
                border_width: 1,
                hover_scale: 1.02,
                hover_opacity: 0.95,
                hover_shift: 2.0,
                hover_duration: 0.2,
                hover_easing: "ease-out".to_string(),
            },
        }
    }
}
