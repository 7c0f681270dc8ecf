//! On-disk task layout.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;

use crate::animation::motion::AnimationParams;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
use crate::encode::sink::FrameSink;
use crate::encode::stream::stream_animation;
use crate::foundation::error::SorterResult;
use crate::generator::Task;
use crate::render::backend::{FrameRGBA, FrameRenderer};

pub const FIRST_FRAME_FILE: &str = "first_frame.png";
pub const FINAL_FRAME_FILE: &str = "final_frame.png";
pub const PROMPT_FILE: &str = "prompt.txt";
pub const VIDEO_FILE: &str = "ground_truth.mp4";

/// Paths written for one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskArtifacts {
    pub dir: PathBuf,
    pub first_frame: PathBuf,
    pub final_frame: PathBuf,
    pub prompt: PathBuf,
    pub video: Option<PathBuf>,
}

/// Writes tasks under `{root}/{task_id}/`.
///
/// Whether `ffmpeg` is on `PATH` is looked up at the first video and reused after that.
#[derive(Clone, Debug)]
pub struct TaskWriter {
    root: PathBuf,
    ffmpeg: OnceLock<bool>,
}

impl TaskWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ffmpeg: OnceLock::new(),
        }
    }

    /// Skip the `PATH` lookup and take `available` as the answer.
    pub fn with_ffmpeg(mut self, available: bool) -> Self {
        self.ffmpeg = OnceLock::from(available);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn task_dir(&self, task_id: &str) -> PathBuf {
        self.root.join(task_id)
    }

    pub fn ffmpeg_available(&self) -> bool {
        *self.ffmpeg.get_or_init(is_ffmpeg_on_path)
    }

    /// Stills and prompt; `video` stays `None`.
    #[tracing::instrument(skip_all, fields(task = %task.id))]
    pub fn write(&self, task: &Task) -> SorterResult<TaskArtifacts> {
        let dir = self.task_dir(&task.id);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create task directory '{}'", dir.display()))?;

        let first_frame = dir.join(FIRST_FRAME_FILE);
        let final_frame = dir.join(FINAL_FRAME_FILE);
        let prompt = dir.join(PROMPT_FILE);
        save_png(&first_frame, &task.first_frame)?;
        save_png(&final_frame, &task.final_frame)?;
        std::fs::write(&prompt, task.prompt.as_bytes())
            .with_context(|| format!("write '{}'", prompt.display()))?;

        Ok(TaskArtifacts {
            dir,
            first_frame,
            final_frame,
            prompt,
            video: None,
        })
    }

    /// Encode the solution video next to the stills.
    ///
    /// Returns `Ok(None)` with a warning when `ffmpeg` is not on `PATH`. On an encode
    /// failure the task directory is removed, see [`TaskWriter::write_video_into`].
    #[tracing::instrument(skip_all, fields(task = %task.id))]
    pub fn write_video<R: FrameRenderer + ?Sized>(
        &self,
        task: &Task,
        params: &AnimationParams,
        renderer: &mut R,
    ) -> SorterResult<Option<PathBuf>> {
        if !self.ffmpeg_available() {
            tracing::warn!("ffmpeg not found on PATH; skipping solution video");
            return Ok(None);
        }
        let path = self.task_dir(&task.id).join(VIDEO_FILE);
        let mut opts = FfmpegSinkOpts::new(&path);
        opts.check_ffmpeg = false;
        let mut sink = FfmpegSink::new(opts);
        let frames = self.write_video_into(task, params, renderer, &mut sink)?;
        tracing::debug!(frames, path = %path.display(), "video written");
        Ok(Some(path))
    }

    /// Stream the solution animation into `sink`; returns the frame count.
    ///
    /// Any failure removes the whole task directory, so no task is left with stills
    /// but a missing or truncated video.
    pub fn write_video_into<R, S>(
        &self,
        task: &Task,
        params: &AnimationParams,
        renderer: &mut R,
        sink: &mut S,
    ) -> SorterResult<u64>
    where
        R: FrameRenderer + ?Sized,
        S: FrameSink + ?Sized,
    {
        let result = ensure_parent_dir(&self.task_dir(&task.id).join(VIDEO_FILE))
            .and_then(|()| stream_animation(&task.layout, params, renderer, sink));
        if result.is_err() {
            self.discard(&task.id);
        }
        result
    }

    /// Remove everything written for `task_id`.
    pub fn discard(&self, task_id: &str) {
        let dir = self.task_dir(task_id);
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => tracing::debug!(dir = %dir.display(), "task directory removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to remove task directory")
            }
        }
    }
}

/// Save `frame` as a 3-channel PNG.
pub fn save_png(path: &Path, frame: &FrameRGBA) -> SorterResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.to_rgb8(),
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/writer/writer.rs"]
mod tests;
