//! Layout settings files
//!
//! Settings are TOML documents holding a base `[layout]` table and any
//! number of named presets. A preset only lists the values it changes; the
//! rest come from `[layout]`, and anything missing there falls back to
//! [`LayoutConfig::default`].
//!
//! ```toml
//! [metadata]
//! name = "Display shelves"
//!
//! [layout]
//! radius = 4.0
//! skip = { pattern = "1010" }
//!
//! [presets.tower]
//! radius = 0.0
//! skip = { count = 0 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::TomlError;
use crate::layout::{LayoutConfig, SkipStrategy};

/// Errors that can occur when loading or using a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] TomlError),
    #[error("Unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },
}

impl From<toml::de::Error> for SettingsError {
    fn from(err: toml::de::Error) -> Self {
        SettingsError::ParseError(err.into())
    }
}

/// A loaded settings file
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Optional name for the settings file
    pub name: Option<String>,
    /// Base layout, used when no preset is chosen
    pub layout: LayoutConfig,
    presets: BTreeMap<String, TomlLayout>,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    layout: TomlLayout,
    #[serde(default)]
    presets: BTreeMap<String, TomlLayout>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Partial layout: only the keys present in the file override
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLayout {
    radius: Option<f64>,
    height_increment: Option<f64>,
    ring_rotation_deg: Option<f64>,
    z_rotation_deg: Option<f64>,
    z_offset: Option<f64>,
    face_center: Option<bool>,
    sort_by_name: Option<bool>,
    skip: Option<TomlSkip>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TomlSkip {
    Pattern(String),
    Count(usize),
}

impl TomlLayout {
    fn apply(&self, base: LayoutConfig) -> LayoutConfig {
        let mut config = base;
        if let Some(radius) = self.radius {
            config = config.with_radius(radius);
        }
        if let Some(height) = self.height_increment {
            config = config.with_height_increment(height);
        }
        if let Some(degrees) = self.ring_rotation_deg {
            config = config.with_ring_rotation(degrees);
        }
        if let Some(degrees) = self.z_rotation_deg {
            config = config.with_z_rotation(degrees);
        }
        if let Some(offset) = self.z_offset {
            config = config.with_z_offset(offset);
        }
        if let Some(face_center) = self.face_center {
            config = config.with_face_center(face_center);
        }
        if let Some(sort) = self.sort_by_name {
            config = config.with_sort_by_name(sort);
        }
        match &self.skip {
            Some(TomlSkip::Pattern(bits)) => config.with_skip(SkipStrategy::pattern(bits)),
            Some(TomlSkip::Count(skip)) => config.with_skip(SkipStrategy::count(*skip)),
            None => config,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        Ok(Settings {
            name: parsed.metadata.and_then(|m| m.name),
            layout: parsed.layout.apply(LayoutConfig::default()),
            presets: parsed.presets,
        })
    }

    /// Layout for a named preset, merged over the base layout
    pub fn preset(&self, name: &str) -> Result<LayoutConfig, SettingsError> {
        match self.presets.get(name) {
            Some(preset) => Ok(preset.apply(self.layout.clone())),
            None => Err(SettingsError::UnknownPreset {
                name: name.to_string(),
                available: self.preset_names().collect::<Vec<_>>().join(", "),
            }),
        }
    }

    /// Names of all presets, sorted
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(|k| k.as_str())
    }
}
