//! Frame rate measurement.

/// Milliseconds per unit of [`FrameMonitor::ticks`].
const TICK_MS: f64 = 100_000.0;

/// Tracks the interval between consecutive frames.
#[derive(Debug, Clone, Default)]
pub struct FrameMonitor {
    last_ms: Option<u64>,
    fps: u32,
    frames: u64,
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame presented at `now_ms`.
    ///
    /// The rate is `floor(1000 / delta)`; a zero delta reports 0 rather than
    /// dividing by zero. The first frame only establishes the baseline.
    pub fn measure(&mut self, now_ms: u64) {
        if let Some(last) = self.last_ms {
            let delta = now_ms.saturating_sub(last);
            self.fps = if delta == 0 {
                0
            } else {
                (1000 / delta).min(u32::MAX as u64) as u32
            };
        }
        self.last_ms = Some(now_ms);
        self.frames += 1;
    }

    /// Most recently measured frames per second.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Coarse clock derived from the last measured timestamp, one unit per
    /// 100 seconds. Zero before the first frame.
    pub fn ticks(&self) -> f64 {
        self.last_ms.unwrap_or(0) as f64 / TICK_MS
    }

    /// Frames measured so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
