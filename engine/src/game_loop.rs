use std::time::Instant;

// Fixed timestep loop, see https://gafferongames.com/post/fix_your_timestep/
// All timing state lives in the loop itself, so several loops can run side by side.

pub trait Game {
    fn update(&mut self, time: &GameLoopTime) -> anyhow::Result<()>;
    fn render(&mut self, _time: &GameLoopTime) -> anyhow::Result<()> {
        Ok(())
    }
    fn should_exit(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameLoopConfig {
    pub updates_per_s: u32,
    pub max_frame_time_s: f64,
}

pub struct GameLoop<G: Game> {
    pub game: G,

    previous_instant: Instant,
    accumulated_time_s: f64,
    fixed_time_step_s: f64,
    max_frame_time_s: f64,
    stats: GameLoopStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameLoopStats {
    pub number_of_updates: u64,
    pub number_of_renders: u64,
    pub last_frame_time_s: f64,
    pub running_time_s: f64,
    pub blending_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy)]
pub struct GameLoopTime {
    pub delta_time_s: f64,
    pub elapsed_time_s: f64,
    pub blending_factor: f64,
}

impl<G: Game> GameLoop<G> {
    pub fn new(game: G, config: GameLoopConfig) -> Self {
        Self {
            game,
            previous_instant: Instant::now(),
            accumulated_time_s: 0.0,
            fixed_time_step_s: 1.0 / config.updates_per_s.max(1) as f64,
            max_frame_time_s: config.max_frame_time_s,
            stats: GameLoopStats::default(),
        }
    }

    pub fn next_frame(&mut self) -> anyhow::Result<GameLoopResult> {
        let now = Instant::now();
        let elapsed_s = now.duration_since(self.previous_instant).as_secs_f64();
        self.previous_instant = now;
        self.advance(elapsed_s)
    }

    /// Runs as many fixed updates as `elapsed_s` covers, then one render.
    pub fn advance(&mut self, elapsed_s: f64) -> anyhow::Result<GameLoopResult> {
        if self.game.should_exit() {
            return Ok(GameLoopResult::Exit);
        }

        // Clamp so a long stall doesn't turn into a burst of updates
        let elapsed_s = elapsed_s.clamp(0.0, self.max_frame_time_s);

        self.stats.last_frame_time_s = elapsed_s;
        self.stats.running_time_s += elapsed_s;
        self.accumulated_time_s += elapsed_s;

        while self.accumulated_time_s >= self.fixed_time_step_s {
            let time = GameLoopTime {
                delta_time_s: self.fixed_time_step_s,
                elapsed_time_s: self.stats.running_time_s,
                // Blending factor is only relevant for rendering
                blending_factor: 0.0,
            };
            self.game.update(&time)?;
            self.accumulated_time_s -= self.fixed_time_step_s;
            self.stats.number_of_updates += 1;
        }

        self.stats.blending_factor = self.accumulated_time_s / self.fixed_time_step_s;

        let time = GameLoopTime {
            delta_time_s: elapsed_s,
            elapsed_time_s: self.stats.running_time_s,
            blending_factor: self.stats.blending_factor,
        };
        self.game.render(&time)?;
        self.stats.number_of_renders += 1;

        Ok(GameLoopResult::Continue)
    }

    pub fn stats(&self) -> GameLoopStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingGame {
        updates: Vec<f64>,
        renders: usize,
        exit_after_renders: Option<usize>,
    }

    impl Game for RecordingGame {
        fn update(&mut self, time: &GameLoopTime) -> anyhow::Result<()> {
            self.updates.push(time.delta_time_s);
            Ok(())
        }

        fn render(&mut self, _time: &GameLoopTime) -> anyhow::Result<()> {
            self.renders += 1;
            Ok(())
        }

        fn should_exit(&self) -> bool {
            self.exit_after_renders
                .is_some_and(|limit| self.renders >= limit)
        }
    }

    fn create_loop(game: RecordingGame) -> GameLoop<RecordingGame> {
        GameLoop::new(
            game,
            GameLoopConfig {
                updates_per_s: 10,
                max_frame_time_s: 0.25,
            },
        )
    }

    #[test]
    fn test_fixed_updates_accumulate() {
        let mut game_loop = create_loop(RecordingGame::default());

        game_loop.advance(0.05).unwrap();
        assert_eq!(game_loop.stats().number_of_updates, 0);

        game_loop.advance(0.2).unwrap();
        let stats = game_loop.stats();
        assert_eq!(stats.number_of_updates, 2);
        assert_eq!(stats.number_of_renders, 2);
        assert!((stats.blending_factor - 0.5).abs() < 1e-9);
        assert!(game_loop.game.updates.iter().all(|&dt| (dt - 0.1).abs() < 1e-12));
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game_loop = create_loop(RecordingGame::default());
        game_loop.advance(10.0).unwrap();

        let stats = game_loop.stats();
        assert_eq!(stats.number_of_updates, 2);
        assert!((stats.last_frame_time_s - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_exit_is_reported_before_next_frame() {
        let mut game_loop = create_loop(RecordingGame {
            exit_after_renders: Some(1),
            ..Default::default()
        });

        assert_eq!(game_loop.advance(0.1).unwrap(), GameLoopResult::Continue);
        assert_eq!(game_loop.advance(0.1).unwrap(), GameLoopResult::Exit);
        assert_eq!(game_loop.game.renders, 1);
    }
}
