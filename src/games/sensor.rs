//! Shake detection over device accelerometer samples.
//!
//! A strong shake while playing triggers a short calming intervention: a
//! low tone and an on-screen "emotional support" badge.

pub const SHAKE_THRESHOLD: f32 = 45.0;
pub const COOLDOWN_MS: u64 = 5_000;
pub const CALM_TONE_HZ: f32 = 300.0;
pub const CALM_TONE_SECS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub fn intensity(self) -> f32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intervention {
    pub tone_hz: f32,
    pub tone_secs: f32,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct ShakeDetector {
    threshold: f32,
    cooldown_ms: u64,
    last_trigger_ms: Option<u64>,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(SHAKE_THRESHOLD, COOLDOWN_MS)
    }
}

impl ShakeDetector {
    pub fn new(threshold: f32, cooldown_ms: u64) -> Self {
        Self {
            threshold,
            cooldown_ms,
            last_trigger_ms: None,
        }
    }

    /// Feeds one sample taken at `now_ms`. Fires at most once per cooldown.
    pub fn sample(&mut self, acceleration: Acceleration, now_ms: u64) -> Option<Intervention> {
        if acceleration.intensity() <= self.threshold {
            return None;
        }
        if let Some(last) = self.last_trigger_ms {
            if now_ms.saturating_sub(last) <= self.cooldown_ms {
                return None;
            }
        }

        self.last_trigger_ms = Some(now_ms);
        Some(Intervention {
            tone_hz: CALM_TONE_HZ,
            tone_secs: CALM_TONE_SECS,
            message: "🧸 Emotional support",
        })
    }
}
