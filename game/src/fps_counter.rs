use std::{collections::VecDeque, time::Duration};

const MEASUREMENTS: usize = 120;

/// Rolling average over the last `MEASUREMENTS` frames.
pub struct FpsCounter {
    frame_durations: VecDeque<Duration>,
    total_frames: u64,
}

impl FpsCounter {
    pub fn new() -> Self {
        FpsCounter {
            frame_durations: VecDeque::with_capacity(MEASUREMENTS),
            total_frames: 0,
        }
    }

    pub fn record(&mut self, frame_time: Duration) {
        if self.frame_durations.len() == MEASUREMENTS {
            self.frame_durations.pop_front();
        }
        self.frame_durations.push_back(frame_time);
        self.total_frames += 1;
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn average_frame_time(&self) -> Duration {
        if self.frame_durations.is_empty() {
            return Duration::from_millis(16);
        }

        let sum: Duration = self.frame_durations.iter().sum();
        sum / (self.frame_durations.len() as u32)
    }

    pub fn frames_per_second(&self) -> f64 {
        let seconds = self.average_frame_time().as_secs_f64();
        if seconds > 0.0 { 1.0 / seconds } else { 0.0 }
    }

    pub fn log_summary(&self) {
        log::info!(
            "{} frames, average frame time {:.2} ms ({:.1} FPS)",
            self.total_frames,
            self.average_frame_time().as_secs_f64() * 1000.0,
            self.frames_per_second()
        );
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
