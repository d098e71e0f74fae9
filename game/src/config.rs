use chunk_engine::{camera::Camera, config::config_manager::Config, game_loop::GameLoopConfig};
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub updates_per_s: u32,
    pub max_frame_time_s: f64,
    /// Stop after this many rendered frames
    pub max_frames: Option<u64>,
    pub exit_when_steady: bool,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            updates_per_s: 60,
            max_frame_time_s: 0.25,
            max_frames: None,
            exit_when_steady: true,
            camera_eye: Vec3::new(-12.0, 4.0, -12.0),
            camera_target: Vec3::new(4.0, -12.0, 4.0),
        }
    }
}

impl Config for ClientConfig {
    fn get_path() -> &'static str {
        "client.ron"
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.updates_per_s == 0 {
            anyhow::bail!("updates_per_s must be positive");
        }
        if !self.max_frame_time_s.is_finite() || self.max_frame_time_s <= 0.0 {
            anyhow::bail!("max_frame_time_s must be a positive number");
        }
        if self.camera_eye == self.camera_target {
            anyhow::bail!("Camera eye and target must differ");
        }
        Ok(())
    }
}

impl ClientConfig {
    pub fn game_loop_config(&self) -> GameLoopConfig {
        GameLoopConfig {
            updates_per_s: self.updates_per_s,
            max_frame_time_s: self.max_frame_time_s,
        }
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.camera_eye,
            target: self.camera_target,
            up: Vec3::Y,
        }
    }
}
