use serde::{Deserialize, Serialize};

use crate::{
    assets::materials::MaterialDefinition,
    config::config_manager::Config,
    error::ChunkError,
    limits::{DEFAULT_CHUNK_SIZE, DEFAULT_DRAIN_PER_CYCLE, DEFAULT_WORKER_COUNT},
    visibility::VisibilityMode,
    voxels::{
        chunk::ChunkSettings,
        coord::{ChunkDimensions, ChunkOrigin},
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkConfig {
    /// Width along X and Z
    pub size: u32,
    /// Overrides the depth derived from `size`
    pub depth: Option<u32>,
    pub worker_count: usize,
    pub origin: ChunkOrigin,
    pub drain_per_cycle: usize,
    pub visibility: VisibilityMode,
    pub assets_root: String,
    pub materials: Vec<MaterialDefinition>,
    pub top_material: String,
    pub interior_material: String,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        ChunkConfig {
            size: DEFAULT_CHUNK_SIZE,
            depth: None,
            worker_count: DEFAULT_WORKER_COUNT,
            origin: ChunkOrigin::new(0.0, -24.0, 0.0),
            drain_per_cycle: DEFAULT_DRAIN_PER_CYCLE,
            visibility: VisibilityMode::Presence,
            assets_root: "assets".to_string(),
            materials: vec![
                MaterialDefinition::untextured("grass"),
                MaterialDefinition::untextured("dirt"),
            ],
            top_material: "grass".to_string(),
            interior_material: "dirt".to_string(),
        }
    }
}

impl ChunkConfig {
    pub fn dimensions(&self) -> Result<ChunkDimensions, ChunkError> {
        match self.depth {
            Some(depth) => {
                let dimensions = ChunkDimensions::new(self.size, depth, self.size);
                dimensions.validate()?;
                Ok(dimensions)
            }
            None => ChunkDimensions::from_size(self.size),
        }
    }

    pub fn settings(&self) -> Result<ChunkSettings, ChunkError> {
        let settings = ChunkSettings::new(self.dimensions()?)
            .with_worker_count(self.worker_count)
            .with_drain_per_cycle(self.drain_per_cycle)
            .with_visibility(self.visibility);
        settings.validate()?;
        Ok(settings)
    }
}

impl Config for ChunkConfig {
    fn get_path() -> &'static str {
        "chunk.ron"
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.settings()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_chunk() {
        let config = ChunkConfig::default();
        let settings = config.settings().unwrap();
        assert_eq!(settings.dimensions, ChunkDimensions::new(8, 24, 8));
        assert_eq!(settings.worker_count, 8);
        assert_eq!(settings.drain_per_cycle, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config = ChunkConfig::parse("(size: 4, worker_count: 2, visibility: SolidOnly)").unwrap();
        assert_eq!(config.dimensions().unwrap(), ChunkDimensions::new(4, 12, 4));
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.visibility, VisibilityMode::SolidOnly);
        assert_eq!(config.top_material, "grass");
    }

    #[test]
    fn test_depth_override() {
        let config = ChunkConfig::parse("(size: 3, depth: Some(3))").unwrap();
        assert_eq!(config.dimensions().unwrap(), ChunkDimensions::new(3, 3, 3));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ChunkConfig::parse("(worker_count: 0)").is_err());
        assert!(ChunkConfig::parse("(size: 0)").is_err());
        assert!(ChunkConfig::parse("(drain_per_cycle: 0)").is_err());
    }

    #[test]
    fn test_oversized_chunk_is_rejected() {
        assert!(ChunkConfig::parse("(size: 2000000000)").is_err());
        assert!(ChunkConfig::parse("(size: 100000, depth: Some(1))").is_err());
        assert!(matches!(
            ChunkConfig {
                size: u32::MAX,
                ..ChunkConfig::default()
            }
            .settings(),
            Err(ChunkError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let config =
            ChunkConfig::load_from(std::path::Path::new("does/not/exist/chunk.ron")).unwrap();
        assert_eq!(config, ChunkConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("chunk_config_{}.ron", std::process::id()));
        let config = ChunkConfig {
            size: 5,
            drain_per_cycle: 3,
            ..ChunkConfig::default()
        };

        config.save_to(&path).unwrap();
        let loaded = ChunkConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
