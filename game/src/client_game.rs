use std::time::Duration;

use chunk_engine::{
    camera::Camera,
    game_loop::{Game, GameLoopTime},
    voxels::chunk::{Chunk, ChunkState},
};

use crate::{config::ClientConfig, draw_list::DrawList, fps_counter::FpsCounter};

pub struct ClientGame {
    chunk: Chunk,
    camera: Camera,
    draw_list: DrawList,
    fps_counter: FpsCounter,
    config: ClientConfig,
    visible_voxels: usize,
    should_exit: bool,
}

impl Game for ClientGame {
    #[profiling::function]
    fn update(&mut self, _time: &GameLoopTime) -> anyhow::Result<()> {
        self.chunk.update_cycle()?;
        Ok(())
    }

    #[profiling::function]
    fn render(&mut self, time: &GameLoopTime) -> anyhow::Result<()> {
        self.draw_list.begin_frame();
        let visible = self.chunk.render(&mut self.draw_list, &self.camera);
        self.draw_list.sort_by_depth();

        if visible != self.visible_voxels {
            log::debug!(
                "{} visible voxels ({} in front of the camera)",
                visible,
                self.draw_list.in_front().count()
            );
            self.visible_voxels = visible;
        }

        self.fps_counter
            .record(Duration::from_secs_f64(time.delta_time_s.max(0.0)));

        let frame_limit_reached = self
            .config
            .max_frames
            .is_some_and(|max_frames| self.fps_counter.total_frames() >= max_frames);
        let steady = self.config.exit_when_steady && self.chunk.state() == ChunkState::Steady;

        if frame_limit_reached || steady {
            self.should_exit = true;
        }

        Ok(())
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }
}

impl ClientGame {
    pub fn new(chunk: Chunk, config: ClientConfig) -> Self {
        ClientGame {
            chunk,
            camera: config.camera(),
            draw_list: DrawList::new(),
            fps_counter: FpsCounter::new(),
            config,
            visible_voxels: 0,
            should_exit: false,
        }
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    pub fn chunk_mut(&mut self) -> &mut Chunk {
        &mut self.chunk
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn fps_counter(&self) -> &FpsCounter {
        &self.fps_counter
    }
}
