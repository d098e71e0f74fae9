use glam::{IVec3, U8Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Y+
    Top = 0,
    /// Y-
    Bottom,
    /// X-
    Left,
    /// X+
    Right,
    /// Z-
    Front,
    /// Z+
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    pub const fn normal(self) -> IVec3 {
        match self {
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
            Face::Left => IVec3::NEG_X,
            Face::Right => IVec3::X,
            Face::Front => IVec3::NEG_Z,
            Face::Back => IVec3::Z,
        }
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Corners of the face on a unit cube, counter-clockwise when viewed from outside.
    pub fn corners(self) -> [U8Vec3; 4] {
        match self {
            Face::Top => [
                U8Vec3::new(0, 1, 0),
                U8Vec3::new(0, 1, 1),
                U8Vec3::new(1, 1, 1),
                U8Vec3::new(1, 1, 0),
            ],
            Face::Bottom => [
                U8Vec3::new(0, 0, 0),
                U8Vec3::new(1, 0, 0),
                U8Vec3::new(1, 0, 1),
                U8Vec3::new(0, 0, 1),
            ],
            Face::Left => [
                U8Vec3::new(0, 0, 0),
                U8Vec3::new(0, 0, 1),
                U8Vec3::new(0, 1, 1),
                U8Vec3::new(0, 1, 0),
            ],
            Face::Right => [
                U8Vec3::new(1, 0, 0),
                U8Vec3::new(1, 1, 0),
                U8Vec3::new(1, 1, 1),
                U8Vec3::new(1, 0, 1),
            ],
            Face::Front => [
                U8Vec3::new(0, 0, 0),
                U8Vec3::new(0, 1, 0),
                U8Vec3::new(1, 1, 0),
                U8Vec3::new(1, 0, 0),
            ],
            Face::Back => [
                U8Vec3::new(0, 0, 1),
                U8Vec3::new(1, 0, 1),
                U8Vec3::new(1, 1, 1),
                U8Vec3::new(0, 1, 1),
            ],
        }
    }

    pub const fn uvs() -> [[f32; 2]; 4] {
        [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
    }

    pub const fn indices(start_index: u32) -> [u32; 6] {
        [
            start_index,
            start_index + 1,
            start_index + 2,
            start_index,
            start_index + 2,
            start_index + 3,
        ]
    }
}
