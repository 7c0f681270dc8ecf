//! Batch runs: per-task RNG streams, failure policy, optional parallelism.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::config::ExhaustionPolicy;
use crate::foundation::error::{SorterError, SorterResult};
use crate::foundation::math::mix_seed;
use crate::generator::{ShapeSorterGenerator, TaskGenerator, task_id};
use crate::registry::SharedUniquenessTracker;
use crate::writer::{TaskArtifacts, TaskWriter};

/// A task that errored without aborting the batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFailure {
    pub id: String,
    pub error: String,
}

/// Outcome of a whole batch, in task-index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: Vec<TaskArtifacts>,
    pub skipped: Vec<String>,
    pub failed: Vec<TaskFailure>,
}

impl BatchReport {
    /// `true` when every requested task was written.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.skipped.len() + self.failed.len()
    }
}

/// RNG for task `index`: a seeded stream per index, or OS entropy.
pub fn task_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(mix_seed(seed, index as u64)),
        None => StdRng::from_os_rng(),
    }
}

/// Errors that stop the batch regardless of policy.
fn is_fatal(err: &SorterError) -> bool {
    matches!(
        err,
        SorterError::Validation(_)
            | SorterError::InsufficientCombinations { .. }
            | SorterError::InvalidAnimationParameters(_)
    )
}

fn run_one(
    generator: &ShapeSorterGenerator,
    writer: &TaskWriter,
    registry: &SharedUniquenessTracker,
    index: usize,
) -> SorterResult<TaskArtifacts> {
    let config = generator.config();
    let mut rng = task_rng(config.seed(), index);
    let task = generator.generate(index, registry, &mut rng)?;
    let mut artifacts = writer.write(&task)?;
    if config.generate_videos() {
        let params = generator.animation_params()?;
        let mut renderer = generator.renderer()?;
        artifacts.video = writer.write_video(&task, &params, &mut renderer)?;
    }
    Ok(artifacts)
}

/// Generate `num_samples` tasks into `output`.
///
/// Returns `Err` only when the batch aborts: a configuration error, or exhaustion
/// under [`ExhaustionPolicy::Abort`]. Everything else lands in the report.
#[tracing::instrument(skip(generator, output), fields(dir = %output.display()))]
pub fn run_batch(
    generator: &ShapeSorterGenerator,
    num_samples: usize,
    output: &Path,
) -> SorterResult<BatchReport> {
    let config = generator.config();
    config.validate()?;
    generator.animation_params()?;

    let writer = TaskWriter::new(output);
    let registry = SharedUniquenessTracker::new();
    let policy = config.exhaustion();
    let mut report = BatchReport::default();

    let mut record = |index: usize, result: SorterResult<TaskArtifacts>| -> SorterResult<()> {
        match result {
            Ok(artifacts) => {
                tracing::info!(task = %task_id(index), "task written");
                report.succeeded.push(artifacts);
            }
            Err(e) if is_fatal(&e) => return Err(e),
            Err(e @ SorterError::UniquenessExhausted { .. }) => {
                if policy == ExhaustionPolicy::Abort {
                    return Err(e);
                }
                tracing::warn!(task = %task_id(index), error = %e, "task skipped");
                report.skipped.push(task_id(index));
            }
            Err(e) => {
                tracing::error!(task = %task_id(index), error = %e, "task failed");
                report.failed.push(TaskFailure {
                    id: task_id(index),
                    error: e.to_string(),
                });
            }
        }
        Ok(())
    };

    if config.parallel() {
        let results: Vec<_> = (0..num_samples)
            .into_par_iter()
            .map(|i| run_one(generator, &writer, &registry, i))
            .collect();
        for (i, result) in results.into_iter().enumerate() {
            record(i, result)?;
        }
    } else {
        for i in 0..num_samples {
            record(i, run_one(generator, &writer, &registry, i))?;
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        unique = registry.len(),
        "batch finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../tests/unit/batch/batch.rs"]
mod tests;
