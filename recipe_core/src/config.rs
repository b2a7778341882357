//! Configuration file support for the recipe catalog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/recipe-catalog/config.toml`.

use crate::{load_recipes, sample_recipes, Error, RecipeCatalog, Recipe, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where recipes come from and how random picks are seeded
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Recipe file to load; the built-in samples are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes_file: Option<PathBuf>,

    /// Fixed seed for random suggestions and menu plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

/// Menu planning configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_menu_days")]
    pub default_days: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_days: default_menu_days(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Level for catalog events; `logging::DEFAULT_LEVEL` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// Default value functions
fn default_menu_days() -> u32 {
    7
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.check()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("recipe-catalog").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.menu.default_days == 0 {
            return Err(Error::Config("menu.default_days must be at least 1".into()));
        }
        Ok(())
    }

    /// Create an empty catalog honoring the configured seed
    pub fn empty_catalog(&self) -> RecipeCatalog {
        match self.catalog.rng_seed {
            Some(seed) => RecipeCatalog::with_seed(seed),
            None => RecipeCatalog::new(),
        }
    }

    /// Build a catalog from the configured recipe file, or the samples
    pub fn build_catalog(&self) -> Result<RecipeCatalog> {
        let recipes: Vec<Recipe> = match &self.catalog.recipes_file {
            Some(path) => load_recipes(path)?,
            None => sample_recipes().to_vec(),
        };
        let mut catalog = self.empty_catalog();
        catalog.extend(recipes);
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.menu.default_days, 7);
        assert!(config.logging.level.is_none());
        assert!(config.catalog.recipes_file.is_none());
        assert!(config.catalog.rng_seed.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.rng_seed = Some(11);
        config.menu.default_days = 5;
        config.logging.level = Some("debug".into());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog.rng_seed, Some(11));
        assert_eq!(loaded.menu.default_days, 5);
        assert_eq!(loaded.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[catalog]
rng_seed = 42
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.rng_seed, Some(42));
        assert_eq!(config.menu.default_days, 7); // default
    }

    #[test]
    fn test_zero_menu_days_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[menu]\ndefault_days = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_catalog_uses_samples_by_default() {
        let config = Config::default();
        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), sample_recipes().len());
    }

    #[test]
    fn test_build_catalog_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("mine.json");
        std::fs::write(&path, r#"[{"id": 10, "name": "Pho", "cuisine": "Vietnamese"}]"#)
            .unwrap();

        let mut config = Config::default();
        config.catalog.recipes_file = Some(path);
        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.search_by_cuisine("Vietnamese").len(), 1);
    }
}
