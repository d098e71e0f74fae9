use std::collections::BTreeMap;

use chunk_engine::{
    assets::materials::MaterialHandle, camera::Camera, renderer::VoxelRenderer,
    voxels::voxel::Voxel,
};
use glam::{UVec3, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub pos: UVec3,
    pub world_position: Vec3,
    pub material: MaterialHandle,
    pub depth: f32,
}

/// Collects the voxels submitted in a frame instead of drawing them.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Front to back, for early depth rejection
    pub fn sort_by_depth(&mut self) {
        self.commands.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    }

    pub fn count_by_material(&self) -> BTreeMap<MaterialHandle, usize> {
        let mut counts = BTreeMap::new();
        for command in &self.commands {
            *counts.entry(command.material).or_insert(0) += 1;
        }
        counts
    }

    /// Commands in front of the camera
    pub fn in_front(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| command.depth > 0.0)
    }
}

impl VoxelRenderer for DrawList {
    type View = Camera;

    fn draw_voxel(&mut self, pos: UVec3, voxel: &Voxel, view: &Camera) {
        let world_position = voxel.position();
        self.commands.push(DrawCommand {
            pos,
            world_position,
            material: voxel.material(),
            depth: view.view_depth(world_position),
        });
    }
}
