//! Named theme snapshots.
//!
//! A preset is immutable once saved: created on explicit save, loaded by
//! id, deleted by id, never edited in place. The store persists through
//! the storage port best-effort; a failed write is logged, not fatal.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::TokenStorage;
use crate::theme::{ShadowTier, Theme};

const PRESETS_KEY: &str = "presets";

pub type PresetResult<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset name is empty")]
    EmptyName,
}

/// An immutable snapshot of a theme with identity and creation time
/// (milliseconds since the Unix epoch; 0 for built-in seeds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub theme: Theme,
    pub timestamp: u64,
}

/// The presets every fresh install starts with.
pub fn default_presets() -> Vec<Preset> {
    let mut elegant_dark = Theme::default();
    elegant_dark.colors.primary = "#6366f1".to_string();
    elegant_dark.colors.secondary = "#a855f7".to_string();
    elegant_dark.colors.background = "#0f172a".to_string();
    elegant_dark.colors.surface = "#1e293b".to_string();
    elegant_dark.colors.text = "#f8fafc".to_string();
    elegant_dark.colors.border = "#334155".to_string();
    elegant_dark.effects.shadow = ShadowTier::Lg;
    elegant_dark.effects.hover_scale = 1.05;

    let mut forest_calm = Theme::default();
    forest_calm.colors.primary = "#059669".to_string();
    forest_calm.colors.secondary = "#10b981".to_string();
    forest_calm.colors.background = "#f0fdf4".to_string();
    forest_calm.colors.surface = "#ffffff".to_string();
    forest_calm.colors.text = "#064e3b".to_string();
    forest_calm.colors.border = "#bbf7d0".to_string();
    forest_calm.spacing.base = 20;
    forest_calm.spacing.gap = 24;
    forest_calm.spacing.border_radius = 12;
    forest_calm.typography.font_family = "Playfair Display".to_string();
    forest_calm.typography.heading_font = "Playfair Display".to_string();

    vec![
        Preset {
            id: "default".to_string(),
            name: "Modern Blue".to_string(),
            theme: Theme::default(),
            timestamp: 0,
        },
        Preset {
            id: "elegant-dark".to_string(),
            name: "Elegant Dark".to_string(),
            theme: elegant_dark,
            timestamp: 0,
        },
        Preset {
            id: "forest-calm".to_string(),
            name: "Forest Calm".to_string(),
            theme: forest_calm,
            timestamp: 0,
        },
    ]
}

#[derive(Debug)]
pub struct PresetStore<S> {
    storage: S,
    presets: Vec<Preset>,
}

impl<S: TokenStorage> PresetStore<S> {
    /// Load presets from storage, seeding the built-in set when nothing
    /// is stored or the stored payload does not parse.
    pub fn open(storage: S) -> Self {
        let presets = match storage.read(PRESETS_KEY) {
            Ok(Some(serialized)) => match serde_json::from_str(&serialized) {
                Ok(presets) => presets,
                Err(err) => {
                    tracing::warn!(?err, "stored presets are corrupt; reseeding defaults");
                    default_presets()
                }
            },
            Ok(None) => default_presets(),
            Err(err) => {
                tracing::warn!(?err, "failed to read presets; reseeding defaults");
                default_presets()
            }
        };

        Self { storage, presets }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Snapshot the current theme under a new name. The id is the
    /// creation timestamp, nudged forward until unique.
    pub fn save(&mut self, name: &str, theme: &Theme) -> PresetResult<Preset> {
        if name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }

        let mut timestamp = now_millis();
        while self.presets.iter().any(|p| p.id == timestamp.to_string()) {
            timestamp += 1;
        }

        let preset = Preset {
            id: timestamp.to_string(),
            name: name.to_string(),
            theme: theme.clone(),
            timestamp,
        };
        self.presets.push(preset.clone());
        self.persist();

        Ok(preset)
    }

    /// Remove a preset by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        let removed = self.presets.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Clone out the theme of a preset for wholesale session replacement.
    pub fn load(&self, id: &str) -> Option<Theme> {
        self.get(id).map(|p| p.theme.clone())
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.presets) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(?err, "failed to serialize presets");
                return;
            }
        };
        if let Err(err) = self.storage.write(PRESETS_KEY, &serialized) {
            tracing::warn!(?err, "failed to persist presets");
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn seeds_defaults_when_storage_is_empty() {
        let store = PresetStore::open(MemoryStorage::new());
        let names: Vec<&str> = store.presets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Modern Blue", "Elegant Dark", "Forest Calm"]);
        assert!(store.presets().iter().all(|p| p.timestamp == 0));
    }

    #[test]
    fn seeds_defaults_when_storage_is_corrupt() {
        let storage = MemoryStorage::new();
        storage.write("presets", "{ not json").unwrap();
        let store = PresetStore::open(storage);
        assert_eq!(store.presets().len(), 3);
    }

    #[test]
    fn seed_palettes_match_their_moods() {
        let store = PresetStore::open(MemoryStorage::new());
        let dark = store.get("elegant-dark").unwrap();
        assert_eq!(dark.theme.colors.background, "#0f172a");
        assert_eq!(dark.theme.effects.shadow, ShadowTier::Lg);
        assert_eq!(dark.theme.effects.hover_scale, 1.05);

        let forest = store.get("forest-calm").unwrap();
        assert_eq!(forest.theme.colors.primary, "#059669");
        assert_eq!(forest.theme.spacing.gap, 24);
        assert_eq!(forest.theme.typography.font_family, "Playfair Display");
    }

    #[test]
    fn save_appends_and_persists() {
        let mut store = PresetStore::open(MemoryStorage::new());
        let mut theme = Theme::default();
        theme.colors.primary = "#ff0000".to_string();

        let preset = store.save("My Reds", &theme).unwrap();
        assert_eq!(preset.name, "My Reds");
        assert_eq!(preset.id, preset.timestamp.to_string());
        assert!(preset.timestamp > 0);

        let reopened = PresetStore::open(store.storage);
        let saved_id = preset.id;
        assert_eq!(reopened.presets().len(), 4);
        assert_eq!(
            reopened.load(&saved_id).unwrap().colors.primary,
            "#ff0000"
        );
    }

    #[test]
    fn save_rejects_blank_names() {
        let mut store = PresetStore::open(MemoryStorage::new());
        assert!(matches!(
            store.save("   ", &Theme::default()),
            Err(PresetError::EmptyName)
        ));
    }

    #[test]
    fn consecutive_saves_get_distinct_ids() {
        let mut store = PresetStore::open(MemoryStorage::new());
        let a = store.save("A", &Theme::default()).unwrap().id.clone();
        let b = store.save("B", &Theme::default()).unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn delete_removes_by_id_and_persists() {
        let mut store = PresetStore::open(MemoryStorage::new());
        assert!(store.delete("forest-calm"));
        assert!(!store.delete("forest-calm"));
        assert!(store.get("forest-calm").is_none());

        let reopened = PresetStore::open(store.storage);
        assert_eq!(reopened.presets().len(), 2);
    }

    #[test]
    fn load_clones_the_snapshot_theme() {
        let store = PresetStore::open(MemoryStorage::new());
        let theme = store.load("default").unwrap();
        assert_eq!(theme, Theme::default());
        assert!(store.load("nope").is_none());
    }

    #[test]
    fn preset_json_uses_original_field_names() {
        let store = PresetStore::open(MemoryStorage::new());
        let json = serde_json::to_value(&store.presets()[0]).unwrap();
        assert_eq!(json["id"], "default");
        assert_eq!(json["name"], "Modern Blue");
        assert_eq!(json["timestamp"], 0);
        assert!(json["theme"]["typography"].get("fontFamily").is_some());
    }
}
