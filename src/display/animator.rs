use std::time::Duration;

use crate::display::cancel::CancelToken;
use crate::display::sink::DisplaySink;
use crate::foundation::core::{FrameIndex, PIXEL_COUNT, Rgb8};
use crate::foundation::error::{LayersError, LayersResult};
use crate::stack::layer_stack::LayerStack;

/// Pacing and output options for [`Animator`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    /// Seconds each frame stays on the display.
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f64,
    /// Seconds the whole animation runs for.
    #[serde(default = "default_total_time")]
    pub total_time: f64,
    /// Premultiply colour by alpha before sending to the display.
    #[serde(default = "default_use_alpha")]
    pub use_alpha: bool,
}

fn default_scroll_speed() -> f64 {
    0.5
}

fn default_total_time() -> f64 {
    10.0
}

fn default_use_alpha() -> bool {
    true
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scroll_speed: default_scroll_speed(),
            total_time: default_total_time(),
            use_alpha: default_use_alpha(),
        }
    }
}

impl AnimationConfig {
    /// Both times must be finite and positive.
    pub fn validate(&self) -> LayersResult<()> {
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            return Err(LayersError::config(
                "scroll_speed must be finite and > 0 seconds per frame",
            ));
        }
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(LayersError::config("total_time must be finite and > 0 seconds"));
        }
        Ok(())
    }

    /// Frames shown in one run: `floor(total_time / scroll_speed)`.
    pub fn frame_total(&self) -> u64 {
        // Tolerate float error so that e.g. 1.0 / 0.1 gives 10, not 9.
        (self.total_time / self.scroll_speed + 1e-9).floor().max(0.0) as u64
    }

    /// Time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.scroll_speed)
    }
}

/// Outcome of [`Animator::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Frames handed to the sink.
    pub frames_shown: u64,
    /// Whether the run stopped early because of cancellation.
    pub cancelled: bool,
}

/// Drives a display sink: renders frames and paces them in time.
#[derive(Clone, Debug)]
pub struct Animator {
    config: AnimationConfig,
}

impl Animator {
    /// Validate `config` and build an animator.
    pub fn new(config: AnimationConfig) -> LayersResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Show a single composited frame.
    pub fn show_static(
        &self,
        stack: &LayerStack,
        frame: FrameIndex,
        sink: &mut impl DisplaySink,
    ) -> LayersResult<()> {
        sink.set_pixels(&stack.pixels_at(frame, self.config.use_alpha))
    }

    /// Show frames `0..frame_total` of `stack`, waiting `scroll_speed` after each.
    ///
    /// Frames are rendered one at a time, just before they are shown. The loop
    /// stops early, without showing another frame, once `cancel` is cancelled.
    #[tracing::instrument(skip_all, fields(stack = stack.name()))]
    pub fn run(
        &self,
        stack: &LayerStack,
        sink: &mut impl DisplaySink,
        cancel: &CancelToken,
    ) -> LayersResult<RunReport> {
        let total = self.config.frame_total();
        if total == 0 {
            tracing::warn!(
                scroll_speed = self.config.scroll_speed,
                total_time = self.config.total_time,
                "animation has no frames"
            );
        }
        let use_alpha = self.config.use_alpha;
        let frames = (0..total).map(|i| stack.pixels_at(FrameIndex(i), use_alpha));
        self.play(frames, sink, cancel)
    }

    /// Show already-rendered pixel buffers with the configured pacing.
    pub fn play<I>(
        &self,
        frames: I,
        sink: &mut impl DisplaySink,
        cancel: &CancelToken,
    ) -> LayersResult<RunReport>
    where
        I: IntoIterator<Item = [Rgb8; PIXEL_COUNT]>,
    {
        let interval = self.config.frame_interval();
        let mut report = RunReport::default();
        tracing::info!(interval_s = self.config.scroll_speed, "animation started");

        for pixels in frames {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            sink.set_pixels(&pixels)?;
            report.frames_shown += 1;
            if cancel.wait_timeout(interval) {
                report.cancelled = true;
                break;
            }
        }

        tracing::info!(
            frames_shown = report.frames_shown,
            cancelled = report.cancelled,
            "animation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/animator.rs"]
mod tests;
