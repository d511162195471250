use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct IntakeConfig {
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    pub high_contrast: Option<bool>,
}

impl IntakeConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn high_contrast(&self) -> bool {
        self.ui
            .as_ref()
            .and_then(|ui| ui.high_contrast)
            .unwrap_or(false)
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".intake").join("config.toml"))
}
