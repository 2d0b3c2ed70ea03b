//! Settings file loading.
//!
//! Settings live in `inventory.toml`, either passed with `--config` or found
//! in the working directory. Every key is optional; command-line flags win
//! over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use inv_ingest::DocumentSource;
use inv_model::SortOrder;

/// File looked up in the working directory when `--config` is not given.
pub const SETTINGS_FILE_NAME: &str = "inventory.toml";

/// Kit text longer than this is shortened in tables.
pub const DEFAULT_KIT_WIDTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Inventory location: file path or http(s) URL.
    pub source: Option<String>,
    /// Directory export files are written to.
    pub export_dir: PathBuf,
    /// Characters of kit text shown before truncating.
    pub kit_width: usize,
    /// Initial sort order token, e.g. `qty-desc`.
    pub default_sort: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: None,
            export_dir: PathBuf::from("."),
            kit_width: DEFAULT_KIT_WIDTH,
            default_sort: SortOrder::default().to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads settings from `path`.
    ///
    /// Returns default settings if the file doesn't exist, cannot be read, or
    /// cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(settings) => {
                    info!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to parse settings file, using defaults");
                    Self::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Loads `inventory.toml` from `dir` when present.
    pub fn load_from_dir(dir: &Path) -> Self {
        Self::load_from(&dir.join(SETTINGS_FILE_NAME))
    }

    /// Where to read the inventory from. `flag` takes precedence.
    pub fn document_source(&self, flag: Option<&str>) -> DocumentSource {
        match flag.or(self.source.as_deref()) {
            Some(location) => location.parse().unwrap_or_default(),
            None => DocumentSource::default(),
        }
    }

    /// The configured initial sort order, falling back to NSN ascending.
    pub fn sort_order(&self) -> SortOrder {
        self.default_sort.parse().unwrap_or_else(|error| {
            warn!(%error, "ignoring default_sort setting");
            SortOrder::default()
        })
    }

    /// Kit width, treating 0 as "use the default".
    pub fn kit_width(&self) -> usize {
        if self.kit_width == 0 {
            DEFAULT_KIT_WIDTH
        } else {
            self.kit_width
        }
    }
}
