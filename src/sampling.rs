//! Per-clip sampling parameters and the fixed-step time generator.

use serde::{Deserialize, Serialize};

use crate::source::SceneSource;

/// Sampling parameters derived once per clip.
///
/// `duration` is always positive: a static pose clip (`end == start`) gets a
/// default duration of one second. `period` is seconds per sample, `1/rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingInfo {
    pub start: f32,
    pub end: f32,
    pub duration: f32,
    pub period: f32,
}

impl SamplingInfo {
    /// Derives the sampling parameters for one clip.
    ///
    /// The clip's authored time span wins over the document's default
    /// timeline span. A caller-supplied `sampling_rate > 0` wins over the
    /// scene's native frame rate. Never fails: a degenerate scene yields a
    /// degenerate but well-formed value.
    pub fn from_scene<S: SceneSource>(scene: &S, clip: usize, sampling_rate: f32) -> Self {
        let span = scene
            .clip_time_span(clip)
            .unwrap_or_else(|| scene.default_time_span());

        let rate = if sampling_rate > 0.0 {
            log::info!("Using sampling rate of {sampling_rate}hz.");
            sampling_rate
        } else {
            let scene_rate = match scene.time_mode().frame_rate() {
                Some(rate) => rate,
                None => scene.custom_frame_rate(),
            };
            log::info!("Using scene sampling rate of {scene_rate}hz.");
            scene_rate
        };

        // Duration could be 0 if the clip is just a pose. Default to 1s.
        let duration = if span.end > span.start {
            span.end - span.start
        } else {
            1.0
        };

        Self {
            start: span.start,
            end: span.end,
            duration,
            period: 1.0 / rate,
        }
    }

    /// The absolute sample times covering `[start, end]` at `period`.
    #[must_use]
    pub fn sample_times(&self) -> SampleTimes {
        SampleTimes::new(self.start, self.end, self.period)
    }

    /// Capacity estimate for keyframe storage. A hint only: the clamped
    /// final step means the actual count can differ by a few keys.
    #[must_use]
    pub fn max_keys(&self) -> usize {
        (3.0 + (self.end - self.start) / self.period) as usize
    }

    /// Clip-local time of an absolute sample time. Starts at 0.
    #[must_use]
    pub fn local_time(&self, time: f32) -> f32 {
        time - self.start
    }

    /// Normalized `[0,1]` position of an absolute sample time.
    #[must_use]
    pub fn ratio(&self, time: f32) -> f32 {
        (time - self.start) / self.duration
    }
}

/// Lazy, finite sequence of sample times: `start, start+period, ...`, with
/// the final time clamped to `end` exactly.
///
/// Naive fixed-step accumulation either overshoots `end` or stops short of
/// it; the clamp guarantees the last emitted time equals `end`. A degenerate
/// range (`end == start`) is a single-element sequence, so every range
/// yields at least one time. Clone to restart.
#[derive(Debug, Clone)]
pub struct SampleTimes {
    next: f32,
    end: f32,
    period: f32,
    finished: bool,
}

impl SampleTimes {
    #[must_use]
    pub fn new(start: f32, end: f32, period: f32) -> Self {
        debug_assert!(period > 0.0, "sampling period must be positive");
        Self {
            next: start,
            end,
            period,
            finished: false,
        }
    }
}

impl Iterator for SampleTimes {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.finished {
            return None;
        }
        if self.next >= self.end {
            self.finished = true;
            return Some(self.end);
        }
        let time = self.next;
        self.next = time + self.period;
        Some(time)
    }
}
