//! Tailwind configuration export.
//!
//! The fragment maps Tailwind theme slots onto the CSS custom properties
//! from [`super::css::generate_css`], so it is the same for every theme;
//! the pairing only works when both files are installed together.

use crate::theme::Theme;

const TAILWIND_TEMPLATE: &str = "/** @type {import('tailwindcss').Config} */
module.exports = {
  theme: {
    extend: {
      colors: {
        primary: 'var(--color-primary)',
        secondary: 'var(--color-secondary)',
        background: 'var(--color-background)',
        surface: 'var(--color-surface)',
        text: 'var(--color-text)',
        border: 'var(--color-border)',
      },
      fontFamily: {
        base: ['var(--font-family-base)', 'sans-serif'],
        heading: ['var(--font-family-heading)', 'serif'],
      },
      fontSize: {
        base: 'var(--font-size-base)',
      },
      lineHeight: {
        base: 'var(--line-height)',
      },
      spacing: {
        base: 'var(--spacing-base)',
        gap: 'var(--gap)',
      },
      borderRadius: {
        DEFAULT: 'var(--radius)',
      },
      boxShadow: {
        DEFAULT: 'var(--shadow)',
      },
      borderWidth: {
        DEFAULT: 'var(--border-width)',
      }
    }
  }
};
";

/// Render the Tailwind config fragment for a theme. Takes the theme to
/// stay interchangeable with the other exporters behind
/// [`super::ExportFormat`].
pub fn generate_tailwind_config(_theme: &Theme) -> String {
    TAILWIND_TEMPLATE.to_string()
}
