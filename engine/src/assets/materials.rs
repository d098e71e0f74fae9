use std::path::PathBuf;

use anyhow::{Context, bail};
use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::{error::ChunkError, voxels::coord::ChunkDimensions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialHandle(pub u16);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    pub name: String,
    // Relative to the assets root
    pub texture: Option<String>,
}

impl MaterialDefinition {
    pub fn untextured(name: &str) -> Self {
        MaterialDefinition {
            name: name.to_string(),
            texture: None,
        }
    }
}

#[derive(Debug)]
pub struct MaterialEntry {
    pub handle: MaterialHandle,
    pub name: String,
    texture_size: Option<(u32, u32)>,
}

impl MaterialEntry {
    pub fn texture_size(&self) -> Option<(u32, u32)> {
        self.texture_size
    }
}

/// Registry of the materials voxels can reference. Textures are decoded once at
/// registration to make sure they exist; the pixels themselves belong to the renderer.
pub struct MaterialLibrary {
    materials: Vec<MaterialEntry>,
    assets_root: PathBuf,
}

impl MaterialLibrary {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        MaterialLibrary {
            materials: Vec::new(),
            assets_root: assets_root.into(),
        }
    }

    pub fn from_definitions(
        assets_root: impl Into<PathBuf>,
        definitions: &[MaterialDefinition],
    ) -> anyhow::Result<Self> {
        let mut library = MaterialLibrary::new(assets_root);
        for definition in definitions {
            library.add_material(definition)?;
        }

        log::info!("Loaded {} material definitions", library.materials.len());
        Ok(library)
    }

    pub fn add_material(&mut self, definition: &MaterialDefinition) -> anyhow::Result<MaterialHandle> {
        if self.get_by_name(&definition.name).is_some() {
            bail!("Material '{}' is defined more than once", definition.name);
        }

        let Ok(index) = u16::try_from(self.materials.len()) else {
            bail!("Cannot define more than {} materials", u16::MAX);
        };

        let texture_size = match &definition.texture {
            Some(texture) => Some(self.load_texture_size(texture).with_context(|| {
                format!("Failed to load texture for material '{}'", definition.name)
            })?),
            None => None,
        };

        let handle = MaterialHandle(index);
        self.materials.push(MaterialEntry {
            handle,
            name: definition.name.clone(),
            texture_size,
        });
        Ok(handle)
    }

    fn load_texture_size(&self, texture: &str) -> anyhow::Result<(u32, u32)> {
        let path = self.assets_root.join(texture);
        let image = image::open(&path)
            .with_context(|| format!("Failed to open image {}", path.display()))?
            .to_rgba8();
        Ok(image.dimensions())
    }

    pub fn get(&self, handle: MaterialHandle) -> Option<&MaterialEntry> {
        self.materials.get(handle.0 as usize)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&MaterialEntry> {
        self.materials.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Materials used when a voxel is created: the top layer gets `top`, everything below
/// gets `interior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMaterials {
    pub top: MaterialHandle,
    pub interior: MaterialHandle,
}

impl BlockMaterials {
    pub fn resolve(
        library: &MaterialLibrary,
        top: &str,
        interior: &str,
    ) -> Result<Self, ChunkError> {
        let lookup = |name: &str| {
            library
                .get_by_name(name)
                .map(|entry| entry.handle)
                .ok_or_else(|| ChunkError::MissingMaterial(name.to_string()))
        };

        Ok(BlockMaterials {
            top: lookup(top)?,
            interior: lookup(interior)?,
        })
    }

    pub fn select(&self, dimensions: ChunkDimensions, pos: UVec3) -> MaterialHandle {
        if dimensions.is_top_layer(pos) {
            self.top
        } else {
            self.interior
        }
    }
}
