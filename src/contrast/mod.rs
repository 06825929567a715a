//! WCAG 2.x contrast mathematics for theme colors.
//!
//! Everything here is pure: parse a `#rrggbb` color, linearize it into
//! relative luminance, compare two luminances into a contrast ratio, and
//! classify the ratio into a compliance tier. The editor surfaces the tier
//! next to its color pickers; exports never depend on it.

use std::str::FromStr;

use thiserror::Error;

pub type ContrastResult<T> = std::result::Result<T, ContrastError>;

#[derive(Debug, Error)]
pub enum ContrastError {
    #[error("invalid color format {0:?}: expected a 6-digit #rrggbb string")]
    InvalidColorFormat(String),
}

/// An 8-bit sRGB color parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a strict `#rrggbb` color. Shorthand (`#abc`) and alpha
    /// channels are rejected; luminance math is only defined for the
    /// 6-digit form.
    pub fn parse(hex: &str) -> ContrastResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ContrastError::InvalidColorFormat(hex.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ContrastError::InvalidColorFormat(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl FromStr for Rgb {
    type Err = ContrastError;

    fn from_str(s: &str) -> ContrastResult<Self> {
        Self::parse(s)
    }
}

/// Linearize one sRGB channel (already normalized to [0, 1]).
fn linearize(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white:
///   L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]; the result is the same regardless of
/// argument order:
///   (L_lighter + 0.05) / (L_darker + 0.05)
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse-then-compare convenience for callers holding raw hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> ContrastResult<f64> {
    Ok(contrast_ratio(Rgb::parse(a)?, Rgb::parse(b)?))
}

/// WCAG compliance tier for a contrast ratio, ordered strongest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagRating {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl WcagRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }

    /// Presentation hint the editor attaches to the rating badge. Opaque
    /// to this crate; consumers map it onto their own styling.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Aaa => "text-green-400",
            Self::Aa => "text-green-300",
            Self::AaLarge => "text-yellow-400",
            Self::Fail => "text-red-400",
        }
    }
}

impl std::fmt::Display for WcagRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a contrast ratio. Thresholds are evaluated highest-first and
/// the 4.5 and 3.0 boundaries are inclusive.
pub fn wcag_rating(ratio: f64) -> WcagRating {
    if ratio >= 7.0 {
        WcagRating::Aaa
    } else if ratio >= 4.5 {
        WcagRating::Aa
    } else if ratio >= 3.0 {
        WcagRating::AaLarge
    } else {
        WcagRating::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn parse_accepts_six_digit_hex() {
        let color = Rgb::parse("#3b82f6").unwrap();
        assert_eq!(color, Rgb { r: 0x3b, g: 0x82, b: 0xf6 });
    }

    #[test]
    fn parse_accepts_uppercase_digits() {
        let color = Rgb::parse("#FFFFFF").unwrap();
        assert_eq!(color, Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert!(Rgb::parse("3b82f6").is_err());
    }

    #[test]
    fn parse_rejects_shorthand() {
        assert!(Rgb::parse("#fff").is_err());
    }

    #[test]
    fn parse_rejects_alpha_channel() {
        assert!(Rgb::parse("#3b82f6ff").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        let err = Rgb::parse("#zzzzzz").unwrap_err();
        assert!(err.to_string().contains("#zzzzzz"));
    }

    #[test]
    fn from_str_matches_parse() {
        let color: Rgb = "#111827".parse().unwrap();
        assert_eq!(color, Rgb::parse("#111827").unwrap());
    }

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::parse("#000000").unwrap());
        assert!(approx_eq(lum, 0.0, 1e-9), "black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::parse("#ffffff").unwrap());
        assert!(approx_eq(lum, 1.0, 1e-9), "white luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(Rgb::parse("#ff0000").unwrap());
        assert!(approx_eq(lum, 0.2126, 1e-9), "red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Rgb::parse("#00ff00").unwrap());
        assert!(approx_eq(lum, 0.7152, 1e-9), "green luminance: {lum}");
    }

    #[test]
    fn contrast_same_color_is_one() {
        let ratio = contrast_ratio_hex("#8b5cf6", "#8b5cf6").unwrap();
        assert!(approx_eq(ratio, 1.0, 1e-9), "same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio_hex("#000000", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 21.0, 1e-6), "b/w contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio_hex("#3b82f6", "#111827").unwrap();
        let ba = contrast_ratio_hex("#111827", "#3b82f6").unwrap();
        assert!(approx_eq(ab, ba, 1e-12), "asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_always_at_least_one() {
        let ratio = contrast_ratio_hex("#f3f4f6", "#e5e7eb").unwrap();
        assert!(ratio >= 1.0, "contrast < 1: {ratio}");
    }

    #[test]
    fn contrast_hex_propagates_parse_errors() {
        assert!(contrast_ratio_hex("not-a-color", "#ffffff").is_err());
        assert!(contrast_ratio_hex("#ffffff", "#ggg").is_err());
    }

    #[test]
    fn rating_maximum_contrast_is_aaa() {
        assert_eq!(wcag_rating(21.0), WcagRating::Aaa);
        assert_eq!(wcag_rating(7.0), WcagRating::Aaa);
    }

    #[test]
    fn rating_aa_boundary_is_inclusive() {
        assert_eq!(wcag_rating(4.5), WcagRating::Aa);
        assert_eq!(wcag_rating(6.999), WcagRating::Aa);
    }

    #[test]
    fn rating_just_below_aa_is_aa_large() {
        assert_eq!(wcag_rating(4.4999), WcagRating::AaLarge);
        assert_eq!(wcag_rating(3.0), WcagRating::AaLarge);
    }

    #[test]
    fn rating_no_contrast_fails() {
        assert_eq!(wcag_rating(1.0), WcagRating::Fail);
        assert_eq!(wcag_rating(2.999), WcagRating::Fail);
    }

    #[test]
    fn rating_labels_and_hints_are_paired() {
        assert_eq!(WcagRating::Aaa.label(), "AAA");
        assert_eq!(WcagRating::Aaa.hint(), "text-green-400");
        assert_eq!(WcagRating::Aa.label(), "AA");
        assert_eq!(WcagRating::AaLarge.label(), "AA Large");
        assert_eq!(WcagRating::Fail.hint(), "text-red-400");
    }

    #[test]
    fn default_palette_text_on_background_is_aaa() {
        let ratio = contrast_ratio_hex("#111827", "#ffffff").unwrap();
        assert_eq!(wcag_rating(ratio), WcagRating::Aaa);
    }
}
