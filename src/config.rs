//! Generator configuration: defaults, JSON loading and validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::animation::motion::AnimationParams;
use crate::foundation::core::Canvas;
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::{Arrangement, Difficulty};
use crate::registry::DEFAULT_MAX_ATTEMPTS;

/// What a batch does when one task cannot find an unseen layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Record the task as skipped and keep going.
    #[default]
    Skip,
    /// Stop the batch with the error.
    Abort,
}

/// Validated settings for one generation batch.
///
/// Construct through [`GeneratorConfig::builder`] or one of the JSON loaders; both run
/// [`GeneratorConfig::validate`], so a value in hand is always consistent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    canvas: Canvas,
    fps: u32,
    seconds_per_move: f64,
    hold_frames: u32,
    max_video_seconds: Option<f64>,
    difficulty: Option<Difficulty>,
    arrangement: Option<Arrangement>,
    generate_videos: bool,
    seed: Option<u64>,
    max_attempts: u32,
    exhaustion: ExhaustionPolicy,
    parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: 10,
            seconds_per_move: 1.0,
            hold_frames: 3,
            max_video_seconds: Some(10.0),
            difficulty: None,
            arrangement: None,
            generate_videos: true,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            exhaustion: ExhaustionPolicy::Skip,
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            cfg: Self::default(),
        }
    }

    /// Load a JSON config file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> SorterResult<Self> {
        use anyhow::Context as _;
        let f = File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> SorterResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SorterError::validation(format!("config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Re-open this config as a builder, e.g. to apply CLI overrides.
    pub fn into_builder(self) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder { cfg: self }
    }

    pub fn validate(&self) -> SorterResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if self.fps == 0 {
            return Err(SorterError::validation("fps must be > 0"));
        }
        if !self.seconds_per_move.is_finite() || self.seconds_per_move <= 0.0 {
            return Err(SorterError::validation("seconds_per_move must be finite and > 0"));
        }
        if let Some(max) = self.max_video_seconds
            && (!max.is_finite() || max <= 0.0)
        {
            return Err(SorterError::validation(
                "max_video_seconds must be finite and > 0 when set",
            ));
        }
        if self.max_attempts == 0 {
            return Err(SorterError::validation("max_attempts must be >= 1"));
        }
        if self.generate_videos && !self.canvas.is_even() {
            return Err(SorterError::validation(format!(
                "canvas {}x{} must have even dimensions for mp4 output",
                self.canvas.width, self.canvas.height
            )));
        }
        self.animation_params()?;
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn seconds_per_move(&self) -> f64 {
        self.seconds_per_move
    }

    pub fn hold_frames(&self) -> u32 {
        self.hold_frames
    }

    pub fn max_video_seconds(&self) -> Option<f64> {
        self.max_video_seconds
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn arrangement(&self) -> Option<Arrangement> {
        self.arrangement
    }

    pub fn generate_videos(&self) -> bool {
        self.generate_videos
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn exhaustion(&self) -> ExhaustionPolicy {
        self.exhaustion
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Timing handed to the animation synthesizer.
    pub fn animation_params(&self) -> SorterResult<AnimationParams> {
        Ok(AnimationParams::new(f64::from(self.fps), self.seconds_per_move)?
            .with_hold_frames(self.hold_frames)
            .with_max_duration(self.max_video_seconds))
    }
}

/// Field-by-field construction of a [`GeneratorConfig`].
#[derive(Clone, Debug)]
pub struct GeneratorConfigBuilder {
    cfg: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.cfg.canvas = Canvas { width, height };
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.cfg.fps = fps;
        self
    }

    pub fn seconds_per_move(mut self, secs: f64) -> Self {
        self.cfg.seconds_per_move = secs;
        self
    }

    pub fn hold_frames(mut self, frames: u32) -> Self {
        self.cfg.hold_frames = frames;
        self
    }

    pub fn max_video_seconds(mut self, secs: Option<f64>) -> Self {
        self.cfg.max_video_seconds = secs;
        self
    }

    pub fn difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.cfg.difficulty = difficulty;
        self
    }

    pub fn arrangement(mut self, arrangement: Option<Arrangement>) -> Self {
        self.cfg.arrangement = arrangement;
        self
    }

    pub fn generate_videos(mut self, on: bool) -> Self {
        self.cfg.generate_videos = on;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.cfg.seed = seed;
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.cfg.max_attempts = attempts;
        self
    }

    pub fn exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.cfg.exhaustion = policy;
        self
    }

    pub fn parallel(mut self, on: bool) -> Self {
        self.cfg.parallel = on;
        self
    }

    pub fn build(self) -> SorterResult<GeneratorConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
