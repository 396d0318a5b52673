//! Control options with TOML preset support.
//!
//! Every tweakable setting (behavior switches, speeds, distance bounds, key
//! and mouse bindings) lives here. Options serialize to/from TOML so hosts can
//! ship presets next to their scenes.

mod buttons;
mod controls;
mod keybindings;

use std::path::Path;

pub use buttons::MouseButtonOptions;
pub use controls::{ControlOptions, ZOOM_SCALE_BASE};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ControlsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Behavior switches, speeds, and distance bounds.
    pub controls: ControlOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Mouse button roles.
    #[schemars(skip)]
    pub buttons: MouseButtonOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ControlsError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content = std::fs::read_to_string(path).map_err(ControlsError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ControlsError::Io)?;
        }
        std::fs::write(path, content).map_err(ControlsError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
