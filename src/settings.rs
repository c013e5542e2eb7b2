//! Editor settings.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or no file at all) yields a complete configuration.

use crate::constants::*;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "ipl-editor";
const SETTINGS_FILE: &str = "settings.json";

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderColors {
    pub text: String,
    pub image: String,
    pub selected: String,
}

impl Default for BorderColors {
    fn default() -> Self {
        Self {
            text: TEXT_AREA_BORDER_COLOR.to_string(),
            image: IMAGE_AREA_BORDER_COLOR.to_string(),
            selected: SELECTED_AREA_BORDER_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: String,
    pub line_width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: RUBBER_BAND_COLOR.to_string(),
            line_width: RUBBER_BAND_LINE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModebarColors {
    pub active: String,
    pub inactive: String,
}

impl Default for ModebarColors {
    fn default() -> Self {
        Self {
            active: MODEBAR_ACTIVE_COLOR.to_string(),
            inactive: MODEBAR_INACTIVE_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Edge tolerance for hit testing
    pub tolerance: f32,
    /// Floor applied to width (and image height) of newly created areas,
    /// and to the width of an area after an edge resize is released
    pub min_area_size: f32,
    /// Create drags at most this wide are ignored
    pub click_threshold: f32,
    pub surface_bottom_inset: f32,
    pub rubber_band: StrokeStyle,
    pub borders: BorderColors,
    pub modebar: ModebarColors,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tolerance: AREA_LOCATION_TOLERANCE,
            min_area_size: MIN_AREA_SIZE,
            click_threshold: CLICK_THRESHOLD,
            surface_bottom_inset: SURFACE_BOTTOM_INSET,
            rubber_band: StrokeStyle::default(),
            borders: BorderColors::default(),
            modebar: ModebarColors::default(),
        }
    }
}

impl EditorSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
