use std::time::{Duration, Instant};

const MIN_DURATION_MS: f32 = 250.0;
const MAX_DURATION_MS: f32 = 700.0;
const MS_PER_PX: f32 = 0.6;

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Animated scroll between two offsets, sampled once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        let millis = ((to - from).abs() * MS_PER_PX).clamp(MIN_DURATION_MS, MAX_DURATION_MS);
        Self {
            from,
            to,
            started: now,
            duration: Duration::from_millis(millis.round() as u64),
        }
    }

    #[cfg(test)]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn position(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}
