// Replay settings: defaults for the simulated host, stored in the platform
// config dir, e.g. ~/.config/splitter/settings.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySettings {
    /// Splitter extent along the split axis, in pixels.
    #[serde(default = "default_splitter_thickness")]
    pub splitter_thickness: f64,
    /// Print the final rendered view after the transcript.
    #[serde(default = "default_print_view")]
    pub print_view: bool,
}

fn default_splitter_thickness() -> f64 {
    4.0
}

fn default_print_view() -> bool {
    true
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            splitter_thickness: default_splitter_thickness(),
            print_view: default_print_view(),
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("splitter").join("settings.json"))
}

pub fn load_settings() -> ReplaySettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => ReplaySettings::default(),
    }
}

/// Missing or malformed files fall back to defaults.
pub fn load_settings_from(path: &Path) -> ReplaySettings {
    let settings: ReplaySettings = match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                return ReplaySettings::default();
            }
        },
        Err(_) => return ReplaySettings::default(),
    };

    if settings.splitter_thickness.is_nan() || settings.splitter_thickness < 0.0 {
        log::warn!(
            "Ignoring splitter_thickness {} in {}",
            settings.splitter_thickness,
            path.display()
        );
        return ReplaySettings {
            splitter_thickness: default_splitter_thickness(),
            ..settings
        };
    }
    settings
}
