use std::path::Path;

use anyhow::{Context, bail};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

/// A RON-backed settings file. Missing or empty files yield the default value.
pub trait Config: Sized + Default + Clone + Serialize + for<'a> Deserialize<'a> {
    fn get_path() -> &'static str;

    fn validate(&self) -> anyhow::Result<()> {
        Ok(())
    }

    fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(Self::get_path()))
            .with_context(|| format!("Failed to load config from {}", Self::get_path()))
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }

        let config_data = std::fs::read_to_string(path)?;
        if config_data.trim().is_empty() {
            log::warn!("{} is empty, using default settings", path.display());
            return Ok(Self::default());
        }

        Self::parse(&config_data).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    fn parse(config_data: &str) -> anyhow::Result<Self> {
        let config: Self = ron::from_str(config_data)?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self) -> anyhow::Result<()> {
        self.save_to(Path::new(Self::get_path()))
    }

    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Err(error) = self.validate() {
            bail!("Refusing to write invalid config to {:?}: {}", path, error);
        }

        let serialized = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        std::fs::write(path, serialized)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
