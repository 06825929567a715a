//! The editing session: the one live theme, the selected preview layout,
//! and restore/persist plumbing over the storage port.
//!
//! A session always holds a usable theme. Restoring from missing or
//! corrupt data falls back to the default and logs a warning; persisting
//! is best-effort, mirroring how losing a saved session is annoying but
//! never fatal to the editor.

use serde::{Deserialize, Serialize};

use crate::contrast::{contrast_ratio_hex, wcag_rating, ContrastResult, WcagRating};
use crate::storage::TokenStorage;
use crate::theme::Theme;

const SESSION_KEY: &str = "session";

/// Which canned preview layout the editor renders. Rendering itself is
/// the host UI's job; the core only tracks the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Bento,
    Landing,
}

/// One contrast measurement surfaced beside the color pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub ratio: f64,
    pub rating: WcagRating,
}

/// The legibility checks the editor shows for the current palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub text_on_background: ContrastCheck,
    pub primary_on_background: ContrastCheck,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    theme: Theme,
    mode: PreviewMode,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mode: PreviewMode::default(),
        }
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from the stored theme, if any. The preview mode
    /// is not persisted and always starts at its default.
    pub fn restore<S: TokenStorage>(storage: &S) -> Self {
        let theme = match storage.read(SESSION_KEY) {
            Ok(Some(serialized)) => match serde_json::from_str(&serialized) {
                Ok(theme) => theme,
                Err(err) => {
                    tracing::warn!(?err, "stored session is corrupt; starting fresh");
                    Theme::default()
                }
            },
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(?err, "failed to read stored session; starting fresh");
                Theme::default()
            }
        };

        Self {
            theme,
            mode: PreviewMode::default(),
        }
    }

    /// Write the current theme through the port. Best-effort: failures
    /// are logged and swallowed.
    pub fn persist<S: TokenStorage>(&self, storage: &S) {
        let serialized = match serde_json::to_string(&self.theme) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(?err, "failed to serialize session theme");
                return;
            }
        };
        if let Err(err) = storage.write(SESSION_KEY, &serialized) {
            tracing::warn!(?err, "failed to persist session theme");
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PreviewMode) {
        self.mode = mode;
    }

    /// Field-level mutation entry point for the form controls.
    pub fn update<F: FnOnce(&mut Theme)>(&mut self, apply: F) {
        apply(&mut self.theme);
    }

    /// Replace the theme wholesale, e.g. when a preset is loaded.
    pub fn load_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Back to the default theme, keeping the preview selection.
    pub fn reset(&mut self) {
        self.theme = Theme::default();
    }

    /// Contrast ratios the editor displays for the current palette:
    /// body text and primary accent, each against the page background.
    pub fn contrast_report(&self) -> ContrastResult<ContrastReport> {
        let colors = &self.theme.colors;
        let text = contrast_ratio_hex(&colors.text, &colors.background)?;
        let primary = contrast_ratio_hex(&colors.primary, &colors.background)?;
        Ok(ContrastReport {
            text_on_background: ContrastCheck {
                ratio: text,
                rating: wcag_rating(text),
            },
            primary_on_background: ContrastCheck {
                ratio: primary,
                rating: wcag_rating(primary),
            },
        })
    }
}
