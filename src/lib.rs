//! Procedural "shape sorter" puzzle generator.
//!
//! Each task is a board of colored cards on the left and matching outline slots on the
//! right. The crate samples unique layouts, renders the start and goal images, writes an
//! instruction prompt and, when `ffmpeg` is available, an MP4 of every card sliding
//! into its slot.
//!
//! - Build a [`GeneratorConfig`]
//! - Wrap it in a [`ShapeSorterGenerator`]
//! - Drive a batch with [`run_batch`], or single tasks through [`TaskGenerator`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod batch;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod encode;
pub(crate) mod generator;
pub(crate) mod layout;
pub(crate) mod prompt;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod writer;

pub use crate::foundation::core::{BezPath, Canvas, FrameIndex, Point, Rect, Rgb8, Vec2};
pub use crate::foundation::error::{SorterError, SorterResult};

pub use crate::animation::motion::{
    Animation, AnimationParams, CardState, FrameState, Move, final_state, first_state,
    plan_moves, synthesize, synthesize_with,
};
pub use crate::batch::{BatchReport, TaskFailure, run_batch, task_rng};
pub use crate::catalog::{Catalog, Color, ShapeKind, ShapePair};
pub use crate::config::{ExhaustionPolicy, GeneratorConfig, GeneratorConfigBuilder};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::stream::stream_animation;
pub use crate::generator::{ShapeSorterGenerator, Task, TaskGenerator, task_id};
pub use crate::layout::model::{
    Arrangement, Card, Difficulty, Layout, LayoutSignature, Slot,
};
pub use crate::layout::sampler::LayoutSampler;
pub use crate::prompt::{PROMPT_TEMPLATES, compose as compose_prompt, shape_summary};
pub use crate::registry::{
    DEFAULT_MAX_ATTEMPTS, SharedUniquenessTracker, SignatureRegistry, UniquenessTracker,
};
pub use crate::render::backend::{BoardStyle, FrameRGBA, FrameRenderer};
pub use crate::render::cpu::CpuRenderer;
pub use crate::writer::{
    FINAL_FRAME_FILE, FIRST_FRAME_FILE, PROMPT_FILE, TaskArtifacts, TaskWriter, VIDEO_FILE,
    save_png,
};
