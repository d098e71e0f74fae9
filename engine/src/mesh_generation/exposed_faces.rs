use ahash::AHashMap;

use crate::{
    assets::materials::MaterialHandle,
    mesh_generation::cube_mesh::MeshData,
    visibility::{VisibilityMode, is_face_exposed, is_visible_with},
    voxels::{face::Face, grid::VoxelGrid},
};

/// Builds one mesh per material out of the exposed faces of every visible voxel.
/// Vertices are in chunk-local space.
pub fn build_exposed_faces(
    grid: &VoxelGrid,
    mode: VisibilityMode,
) -> AHashMap<MaterialHandle, MeshData> {
    let mut meshes: AHashMap<MaterialHandle, MeshData> = AHashMap::new();

    for (pos, voxel) in grid.iter_present() {
        if !is_visible_with(grid, pos, mode) {
            continue;
        }

        let offset = pos.as_vec3();
        for face in Face::ALL {
            if is_face_exposed(grid, pos, face, mode) {
                meshes
                    .entry(voxel.material())
                    .or_default()
                    .push_face(face, offset);
            }
        }
    }

    meshes
}
