use glam::UVec3;
use serde::{Deserialize, Serialize};

use crate::voxels::{face::Face, grid::VoxelGrid};

/// What counts as "nothing" next to a voxel when deciding whether a face is exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityMode {
    /// Only absent cells expose a face. Air voxels occlude like any other voxel.
    #[default]
    Presence,
    /// Absent cells and air voxels both expose a face, and air voxels are never visible.
    SolidOnly,
}

/// Whether the voxel at `pos` has at least one exposed face, using [`VisibilityMode::Presence`].
pub fn is_visible(grid: &VoxelGrid, pos: UVec3) -> bool {
    is_visible_with(grid, pos, VisibilityMode::Presence)
}

/// Voxels on the outer shell of the chunk are always visible, since the chunk can't see
/// past its own edge. Interior voxels are visible if any of their six neighbours is empty.
/// Absent cells are never visible.
pub fn is_visible_with(grid: &VoxelGrid, pos: UVec3, mode: VisibilityMode) -> bool {
    let Some(voxel) = grid.get(pos) else {
        return false;
    };

    if mode == VisibilityMode::SolidOnly && voxel.is_air() {
        return false;
    }

    if grid.dimensions().is_on_boundary(pos) {
        return true;
    }

    Face::ALL
        .iter()
        .any(|&face| is_face_exposed(grid, pos, face, mode))
}

/// Whether the neighbour across `face` leaves that face uncovered.
/// Faces on the edge of the chunk are always exposed.
pub fn is_face_exposed(grid: &VoxelGrid, pos: UVec3, face: Face, mode: VisibilityMode) -> bool {
    let Some(neighbor_pos) = grid.dimensions().neighbor(pos, face) else {
        return true;
    };

    match (grid.get(neighbor_pos), mode) {
        (None, _) => true,
        (Some(neighbor), VisibilityMode::SolidOnly) => neighbor.is_air(),
        (Some(_), VisibilityMode::Presence) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::{
        coord::ChunkDimensions,
        grid::tests::{filled_grid, test_voxel},
    };

    fn visible_positions(grid: &VoxelGrid, mode: VisibilityMode) -> Vec<UVec3> {
        grid.iter_present()
            .map(|(pos, _)| pos)
            .filter(|&pos| is_visible_with(grid, pos, mode))
            .collect()
    }

    #[test]
    fn test_boundary_voxels_always_visible() {
        let dims = ChunkDimensions::new(4, 5, 6);
        let grid = filled_grid(dims, 1);

        for (pos, _) in grid.iter_present() {
            if dims.is_on_boundary(pos) {
                assert!(is_visible(&grid, pos), "{pos:?} should be visible");
            }
        }
    }

    #[test]
    fn test_isolated_boundary_voxel_is_visible() {
        let mut grid = VoxelGrid::new(ChunkDimensions::new(3, 3, 3)).unwrap();
        let pos = UVec3::new(2, 1, 1);
        grid.set(pos, test_voxel(1)).unwrap();
        assert!(is_visible(&grid, pos));
    }

    #[test]
    fn test_interior_occlusion_flips_with_single_neighbor() {
        let center = UVec3::splat(1);

        let grid = filled_grid(ChunkDimensions::new(3, 3, 3), 1);
        assert!(!is_visible(&grid, center));

        for face in Face::ALL {
            let mut grid = filled_grid(ChunkDimensions::new(3, 3, 3), 1);
            let neighbor = grid.dimensions().neighbor(center, face).unwrap();
            grid.remove(neighbor).unwrap();
            assert!(
                is_visible(&grid, center),
                "Removing the {face:?} neighbour should expose the centre"
            );
        }
    }

    #[test]
    fn test_absent_cell_is_not_visible() {
        let grid = VoxelGrid::new(ChunkDimensions::new(2, 2, 2)).unwrap();
        assert!(!is_visible(&grid, UVec3::ZERO));
    }

    #[test]
    fn test_two_cube_has_no_interior() {
        let grid = filled_grid(ChunkDimensions::new(2, 2, 2), 1);
        assert_eq!(visible_positions(&grid, VisibilityMode::Presence).len(), 8);
    }

    #[test]
    fn test_three_cube_hides_only_center() {
        let grid = filled_grid(ChunkDimensions::new(3, 3, 3), 1);
        let visible = visible_positions(&grid, VisibilityMode::Presence);
        assert_eq!(visible.len(), 26);
        assert!(!visible.contains(&UVec3::splat(1)));
    }

    #[test]
    fn test_air_neighbor_only_exposes_in_solid_only_mode() {
        let mut grid = filled_grid(ChunkDimensions::new(3, 3, 3), 1);
        grid.set(UVec3::new(1, 2, 1), test_voxel(0)).unwrap();
        let center = UVec3::splat(1);

        assert!(!is_visible_with(&grid, center, VisibilityMode::Presence));
        assert!(is_visible_with(&grid, center, VisibilityMode::SolidOnly));
        assert!(is_face_exposed(&grid, center, Face::Top, VisibilityMode::SolidOnly));
        assert!(!is_face_exposed(&grid, center, Face::Left, VisibilityMode::SolidOnly));
    }

    #[test]
    fn test_air_voxel_is_hidden_in_solid_only_mode() {
        let grid = filled_grid(ChunkDimensions::new(2, 2, 2), 0);
        assert_eq!(visible_positions(&grid, VisibilityMode::Presence).len(), 8);
        assert!(visible_positions(&grid, VisibilityMode::SolidOnly).is_empty());
    }
}
