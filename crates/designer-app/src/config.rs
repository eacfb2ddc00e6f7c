//! Application configuration.

use designer_core::{ConfigError, DesignerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Window settings plus designer tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub designer: DesignerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Designer Panel".to_string(),
            width: 1280.0,
            height: 800.0,
            designer: DesignerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load `path` if it exists, falling back to defaults on any problem.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using default config", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_nested_designer_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "title": "Forms", "designer": {{ "anchor_size": 12.0 }} }}"#
        )
        .unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "Forms");
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.designer.anchor_size, 12.0);
        assert_eq!(config.designer.grid_spacing, 8.0);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
        assert_eq!(
            AppConfig::load_or_default("/definitely/not/here.json"),
            AppConfig::default()
        );
    }
}
