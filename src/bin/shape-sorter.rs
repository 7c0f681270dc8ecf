use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "shape-sorter", version, about = "Generate shape-sorter puzzle tasks")]
struct Cli {
    /// Number of tasks to generate.
    #[arg(long = "num-samples", default_value_t = 10)]
    num_samples: usize,

    /// Output directory; one sub-directory per task.
    #[arg(long, default_value = "data/questions")]
    output: PathBuf,

    /// Skip the MP4 solution videos.
    #[arg(long)]
    no_videos: bool,

    /// Batch seed; each task derives its own stream from it.
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed difficulty (random per task when omitted).
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyChoice>,

    /// Fixed arrangement (chosen from the card count when omitted).
    #[arg(long, value_enum)]
    arrangement: Option<ArrangementChoice>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Video frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// JSON config file; CLI flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Abort the batch when a task runs out of unique layouts.
    #[arg(long)]
    abort_on_exhaustion: bool,

    /// Generate tasks on all cores.
    #[arg(long)]
    parallel: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyChoice {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArrangementChoice {
    Line,
    Staggered,
    Grid,
    Scatter,
}

impl From<DifficultyChoice> for shape_sorter::Difficulty {
    fn from(choice: DifficultyChoice) -> Self {
        match choice {
            DifficultyChoice::Easy => Self::Easy,
            DifficultyChoice::Medium => Self::Medium,
            DifficultyChoice::Hard => Self::Hard,
        }
    }
}

impl From<ArrangementChoice> for shape_sorter::Arrangement {
    fn from(choice: ArrangementChoice) -> Self {
        match choice {
            ArrangementChoice::Line => Self::Line,
            ArrangementChoice::Staggered => Self::Staggered,
            ArrangementChoice::Grid => Self::Grid,
            ArrangementChoice::Scatter => Self::Scatter,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let generator = shape_sorter::ShapeSorterGenerator::new(config);
    let report = shape_sorter::run_batch(&generator, cli.num_samples, &cli.output)
        .context("batch aborted")?;

    for task in &report.succeeded {
        eprintln!("wrote {}", task.dir.display());
    }
    for id in &report.skipped {
        eprintln!("skipped {id}: no unique layout left");
    }
    for failure in &report.failed {
        eprintln!("failed {}: {}", failure.id, failure.error);
    }

    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} tasks were not written",
            report.skipped.len() + report.failed.len(),
            report.total()
        );
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<shape_sorter::GeneratorConfig> {
    let base = match cli.config.as_deref() {
        Some(path) => shape_sorter::GeneratorConfig::from_path(path)?,
        None => shape_sorter::GeneratorConfig::default(),
    };

    let canvas = base.canvas();
    let mut b = base.into_builder().canvas(
        cli.width.unwrap_or(canvas.width),
        cli.height.unwrap_or(canvas.height),
    );
    if let Some(fps) = cli.fps {
        b = b.fps(fps);
    }
    if cli.seed.is_some() {
        b = b.seed(cli.seed);
    }
    if let Some(d) = cli.difficulty {
        b = b.difficulty(Some(d.into()));
    }
    if let Some(a) = cli.arrangement {
        b = b.arrangement(Some(a.into()));
    }
    if cli.no_videos {
        b = b.generate_videos(false);
    }
    if cli.abort_on_exhaustion {
        b = b.exhaustion(shape_sorter::ExhaustionPolicy::Abort);
    }
    if cli.parallel {
        b = b.parallel(true);
    }
    Ok(b.build()?)
}
