pub mod cube_mesh;
pub mod exposed_faces;
