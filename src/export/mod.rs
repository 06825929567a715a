//! Theme export: CSS custom properties, a Tailwind config fragment, or
//! raw JSON tokens, plus a helper that writes the chosen format to disk
//! under its conventional file name.

pub mod css;
pub mod tailwind;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

pub use css::generate_css;
pub use tailwind::generate_tailwind_config;

pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize theme tokens")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export: {path}")]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Json => "json",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Css => "theme.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Json => "theme.json",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Tailwind => "Tailwind Config",
            Self::Json => "JSON Tokens",
        }
    }
}

/// Pretty-printed JSON of the theme itself, with the persisted camelCase
/// field names.
pub fn generate_json(theme: &Theme) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(theme)?)
}

/// Render a theme in the requested format.
pub fn export_theme(theme: &Theme, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Css => Ok(generate_css(theme)),
        ExportFormat::Tailwind => Ok(generate_tailwind_config(theme)),
        ExportFormat::Json => generate_json(theme),
    }
}

/// Write a theme export into `dir` under the format's conventional file
/// name, creating the directory if needed. Returns the written path.
pub fn write_export(theme: &Theme, format: ExportFormat, dir: &Path) -> ExportResult<PathBuf> {
    let content = export_theme(theme, format)?;
    let path = dir.join(format.file_name());

    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, content).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote theme export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_export_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        std::env::temp_dir().join(format!("tokendeck-export-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn format_metadata_matches_download_conventions() {
        assert_eq!(ExportFormat::Css.extension(), "css");
        assert_eq!(ExportFormat::Tailwind.extension(), "js");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Css.file_name(), "theme.css");
        assert_eq!(ExportFormat::Tailwind.file_name(), "tailwind.config.js");
        assert_eq!(ExportFormat::Json.file_name(), "theme.json");
        assert_eq!(ExportFormat::Json.label(), "JSON Tokens");
    }

    #[test]
    fn format_parses_lowercase_names() {
        let format: ExportFormat = serde_json::from_str("\"tailwind\"").unwrap();
        assert_eq!(format, ExportFormat::Tailwind);
    }

    #[test]
    fn json_export_round_trips_the_theme() {
        let theme = Theme::default();
        let json = generate_json(&theme).unwrap();
        // Two-space indentation, original field names.
        assert!(json.contains("  \"colors\": {"));
        assert!(json.contains("\"fontFamily\": \"Inter\""));
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn dispatcher_routes_each_format() {
        let theme = Theme::default();
        assert!(export_theme(&theme, ExportFormat::Css)
            .unwrap()
            .starts_with(":root {"));
        assert!(export_theme(&theme, ExportFormat::Tailwind)
            .unwrap()
            .contains("module.exports"));
        assert!(export_theme(&theme, ExportFormat::Json)
            .unwrap()
            .starts_with('{'));
    }

    #[test]
    fn write_export_creates_file_with_conventional_name() {
        let dir = temp_export_dir();
        let path = write_export(&Theme::default(), ExportFormat::Css, &dir).unwrap();
        assert!(path.ends_with("theme.css"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate_css(&Theme::default()));
        let _ = fs::remove_dir_all(&dir);
    }
}
