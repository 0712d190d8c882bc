use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Statistiques de frames : fenêtre glissante des durées + FPS lissé (EMA).
pub struct FrameStats {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    fps_ema: f32,
    frames: u64,
    last_frame: Instant,
    last_log: Instant,
    log_interval: Duration,
}

/// Poids de la dernière mesure dans la moyenne exponentielle.
const EMA_ALPHA: f32 = 0.15;

impl FrameStats {
    pub fn new(max_samples: usize, log_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples: max_samples.max(1),
            fps_ema: 0.0,
            frames: 0,
            last_frame: now,
            last_log: now,
            log_interval,
        }
    }

    /// Enregistre le temps écoulé depuis l'appel précédent.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(delta);
        delta
    }

    pub fn record(&mut self, delta: Duration) {
        if self.frame_times.len() == self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);
        self.frames += 1;

        let secs = delta.as_secs_f32();
        if secs > 0.0 {
            let fps = 1.0 / secs;
            self.fps_ema = if self.frames == 1 {
                fps
            } else {
                EMA_ALPHA * fps + (1.0 - EMA_ALPHA) * self.fps_ema
            };
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps_ema(&self) -> f32 {
        self.fps_ema
    }

    pub fn average_frame_time(&self) -> Option<Duration> {
        if self.frame_times.is_empty() {
            return None;
        }
        let total: Duration = self.frame_times.iter().sum();
        Some(total / self.frame_times.len() as u32)
    }

    pub fn max_frame_time(&self) -> Option<Duration> {
        self.frame_times.iter().max().copied()
    }

    /// `true` une fois par intervalle de log.
    pub fn should_log(&mut self) -> bool {
        if self.last_log.elapsed() >= self.log_interval {
            self.last_log = Instant::now();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = FrameStats::new(10, Duration::from_secs(5));
        assert_eq!(stats.frames(), 0);
        assert_eq!(stats.average_frame_time(), None);
        assert_eq!(stats.fps_ema(), 0.0);
    }

    #[test]
    fn test_window_keeps_most_recent_samples() {
        let mut stats = FrameStats::new(2, Duration::from_secs(5));
        stats.record(Duration::from_millis(100));
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(20));

        assert_eq!(stats.frames(), 3);
        assert_eq!(stats.average_frame_time(), Some(Duration::from_millis(15)));
        assert_eq!(stats.max_frame_time(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_ema_converges_to_steady_fps() {
        let mut stats = FrameStats::new(100, Duration::from_secs(5));
        for _ in 0..200 {
            stats.record(Duration::from_micros(16_667));
        }
        assert!((stats.fps_ema() - 60.0).abs() < 0.5, "{}", stats.fps_ema());
    }

    #[test]
    fn test_zero_delta_does_not_poison_ema() {
        let mut stats = FrameStats::new(10, Duration::from_secs(5));
        stats.record(Duration::ZERO);
        assert!(stats.fps_ema().is_finite());
    }

    #[test]
    fn test_should_log_respects_interval() {
        let mut stats = FrameStats::new(10, Duration::ZERO);
        assert!(stats.should_log());

        let mut stats = FrameStats::new(10, Duration::from_secs(3600));
        assert!(!stats.should_log());
    }
}
