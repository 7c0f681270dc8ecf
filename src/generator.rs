//! Per-task generation: layout sampling with bounded resampling, stills and prompt.

use rand::Rng;

use crate::animation::motion::{AnimationParams, final_state, first_state};
use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::{Difficulty, Layout};
use crate::layout::sampler::LayoutSampler;
use crate::prompt;
use crate::registry::SignatureRegistry;
use crate::render::backend::{BoardStyle, FrameRGBA, FrameRenderer};
use crate::render::cpu::CpuRenderer;

/// Directory name of task `index`.
pub fn task_id(index: usize) -> String {
    format!("shape_sorter_{index:04}")
}

/// One generated puzzle, ready to be written out.
#[derive(Clone, Debug)]
pub struct Task {
    pub id: String,
    pub index: usize,
    pub layout: Layout,
    pub prompt: String,
    /// Every card at its staging position.
    pub first_frame: FrameRGBA,
    /// Every card in its slot.
    pub final_frame: FrameRGBA,
    /// Layout samples drawn, the accepted one included.
    pub attempts: u32,
}

/// Produces tasks against a batch-wide signature registry.
pub trait TaskGenerator {
    fn generate<R: Rng + ?Sized>(
        &self,
        index: usize,
        registry: &dyn SignatureRegistry,
        rng: &mut R,
    ) -> SorterResult<Task>;
}

/// The shape-sorter task family.
#[derive(Clone, Debug)]
pub struct ShapeSorterGenerator {
    config: GeneratorConfig,
    sampler: LayoutSampler,
    style: BoardStyle,
}

impl ShapeSorterGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_catalog(config, Catalog::standard())
    }

    pub fn with_catalog(config: GeneratorConfig, catalog: Catalog) -> Self {
        Self {
            sampler: LayoutSampler::with_catalog(config.canvas(), catalog),
            config,
            style: BoardStyle::default(),
        }
    }

    pub fn with_style(mut self, style: BoardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn animation_params(&self) -> SorterResult<AnimationParams> {
        self.config.animation_params()
    }

    /// Fresh renderer for this generator's canvas and style.
    pub fn renderer(&self) -> SorterResult<CpuRenderer> {
        CpuRenderer::new(self.config.canvas(), self.style)
    }

    /// Draw layouts until one is new to `registry`.
    ///
    /// Placement failures and duplicates share the `max_attempts` budget; any other
    /// sampling error is returned as is.
    fn unique_layout<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        registry: &dyn SignatureRegistry,
        rng: &mut R,
    ) -> SorterResult<(Layout, u32)> {
        let max_attempts = self.config.max_attempts();
        for attempt in 1..=max_attempts {
            match self
                .sampler
                .sample(difficulty, self.config.arrangement(), rng)
            {
                Ok(layout) => {
                    if registry.register(&layout) {
                        return Ok((layout, attempt));
                    }
                    tracing::debug!(attempt, signature = %layout.signature(), "duplicate layout");
                }
                Err(e) if e.is_retryable() => {
                    tracing::debug!(attempt, error = %e, "resampling layout");
                }
                Err(e) => return Err(e),
            }
        }
        Err(SorterError::UniquenessExhausted {
            attempts: max_attempts,
        })
    }
}

impl TaskGenerator for ShapeSorterGenerator {
    #[tracing::instrument(skip(self, registry, rng))]
    fn generate<R: Rng + ?Sized>(
        &self,
        index: usize,
        registry: &dyn SignatureRegistry,
        rng: &mut R,
    ) -> SorterResult<Task> {
        let difficulty = self
            .config
            .difficulty()
            .unwrap_or_else(|| Difficulty::random(rng));
        let (layout, attempts) = self.unique_layout(difficulty, registry, rng)?;

        let final_state = final_state(&layout)?;

        let mut renderer = self.renderer()?;
        let first_frame = renderer.render(&layout, &first_state(&layout))?;
        let final_frame = renderer.render(&layout, &final_state)?;
        let prompt = prompt::compose(&layout);

        tracing::debug!(
            difficulty = %layout.difficulty(),
            arrangement = %layout.arrangement(),
            cards = layout.len(),
            attempts,
            "task generated"
        );

        Ok(Task {
            id: task_id(index),
            index,
            layout,
            prompt,
            first_frame,
            final_frame,
            attempts,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/generator/generator.rs"]
mod tests;
