use glam::{Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        // Slightly above and behind the origin, looking at it
        Camera {
            eye: Vec3::new(0.0, 1.0, -1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    /// Distance of `point` along the viewing direction; negative when behind the camera
    pub fn view_depth(&self, point: Vec3) -> f32 {
        self.get_view_matrix().transform_point3(point).z
    }
}
