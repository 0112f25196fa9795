use crate::core::StrawberryError;
use crate::matcher::DEFAULT_MIN_MINUTES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StrawberryConfig {
    pub recipes_path: PathBuf,
    /// Floor rule: no recipe is offered for a ceiling below this.
    pub min_minutes: u32,
    pub default_max_minutes: u32,
}

// Default configuration if file is missing
impl Default for StrawberryConfig {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from("recipes_local.json"),
            min_minutes: DEFAULT_MIN_MINUTES,
            default_max_minutes: 20,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    // Load config or create default if missing
    pub fn load(&self) -> Result<StrawberryConfig, StrawberryError> {
        if !self.path.exists() {
            let default_config = StrawberryConfig::default();
            self.save(&default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, config: &StrawberryConfig) -> Result<(), StrawberryError> {
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
