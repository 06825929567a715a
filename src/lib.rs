//! tokendeck — the engine behind a visual design-token editor.
//!
//! A [`theme::Theme`] holds the color, typography, spacing, and hover
//! tokens a user edits; [`contrast`] rates palette legibility per WCAG;
//! [`export`] renders the theme as CSS custom properties, a Tailwind
//! config fragment, or raw JSON; [`preset`] and [`session`] persist
//! snapshots and the live editing state through the [`storage`] port.

pub mod contrast;
pub mod error;
pub mod export;
pub mod logging;
pub mod preset;
pub mod session;
pub mod storage;
pub mod theme;

pub use contrast::{contrast_ratio, contrast_ratio_hex, relative_luminance, wcag_rating, Rgb, WcagRating};
pub use error::{AppError, AppResult};
pub use export::{export_theme, generate_css, ExportFormat};
pub use preset::{Preset, PresetStore};
pub use session::{EditorSession, PreviewMode};
pub use storage::{FileStorage, MemoryStorage, TokenStorage};
pub use theme::Theme;
