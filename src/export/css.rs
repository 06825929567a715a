//! Token-to-CSS serializer.
//!
//! One `:root` block of custom properties, emitted from a single template
//! so the variable order is fixed and the output is byte-stable for a
//! given theme. Snapshot tests downstream depend on that stability.

use crate::theme::Theme;

/// Render a theme as a CSS custom-property block.
///
/// Pixel tokens carry a `px` suffix, the hover duration carries `s`, and
/// line-height, font-weight, hover scale/opacity, and easing are emitted
/// bare. `--hover-shift` inverts the stored lift magnitude into a negative
/// Y-translation so consuming CSS can feed it straight into `translateY`.
pub fn generate_css(theme: &Theme) -> String {
    format!(
        ":root {{
  /* Colors */
  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-background: {background};
  --color-surface: {surface};
  --color-text: {text};
  --color-border: {border};

  /* Typography */
  --font-family-base: {font_family}, sans-serif;
  --font-family-heading: {heading_font}, serif;
  --font-size-base: {base_size}px;
  --line-height: {line_height};
  --font-weight: {font_weight};

  /* Spacing & Layout */
  --spacing-base: {spacing_base}px;
  --radius: {border_radius}px;
  --gap: {gap}px;

  /* Effects */
  --shadow: {shadow};
  --border-width: {border_width}px;
  --hover-scale: {hover_scale};
  --hover-opacity: {hover_opacity};
  --hover-shift: -{hover_shift}px;
  --hover-duration: {hover_duration}s;
  --hover-easing: {hover_easing};
}}
",
        primary = theme.colors.primary,
        secondary = theme.colors.secondary,
        background = theme.colors.background,
        surface = theme.colors.surface,
        text = theme.colors.text,
        border = theme.colors.border,
        font_family = theme.typography.font_family,
        heading_font = theme.typography.heading_font,
        base_size = theme.typography.base_size,
        line_height = theme.typography.line_height,
        font_weight = theme.typography.font_weight,
        spacing_base = theme.spacing.base,
        border_radius = theme.spacing.border_radius,
        gap = theme.spacing.gap,
        shadow = theme.effects.shadow.css_value(),
        border_width = theme.effects.border_width,
        hover_scale = theme.effects.hover_scale,
        hover_opacity = theme.effects.hover_opacity,
        hover_shift = theme.effects.hover_shift,
        hover_duration = theme.effects.hover_duration,
        hover_easing = theme.effects.hover_easing,
    )
}
