use super::*;
use crate::catalog::{Catalog, Color, ShapeKind};
use crate::config::GeneratorConfig;
use crate::layout::model::{Arrangement, Difficulty};
use rand::Rng;
use std::path::PathBuf;

fn small_config() -> crate::config::GeneratorConfigBuilder {
    GeneratorConfig::builder()
        .canvas(192, 128)
        .generate_videos(false)
        .seed(Some(42))
}

fn tiny_catalog_generator(policy: ExhaustionPolicy, parallel: bool) -> ShapeSorterGenerator {
    let catalog = Catalog::new(
        vec![ShapeKind::Circle, ShapeKind::Square, ShapeKind::Star],
        vec![Color::Green],
    )
    .unwrap();
    let cfg = small_config()
        .difficulty(Some(Difficulty::Easy))
        .arrangement(Some(Arrangement::Line))
        .max_attempts(5)
        .exhaustion(policy)
        .parallel(parallel)
        .build()
        .unwrap();
    ShapeSorterGenerator::with_catalog(cfg, catalog)
}

fn fresh(dir: &str) -> PathBuf {
    let root = PathBuf::from("target/unit-batch").join(dir);
    let _ = std::fs::remove_dir_all(&root);
    root
}

#[test]
fn seeded_task_streams_are_reproducible() {
    let a: u64 = task_rng(Some(42), 3).random();
    let b: u64 = task_rng(Some(42), 3).random();
    let c: u64 = task_rng(Some(42), 4).random();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn sequential_batch_writes_every_task() {
    let root = fresh("sequential");
    let generator = ShapeSorterGenerator::new(small_config().build().unwrap());
    let report = run_batch(&generator, 3, &root).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.total(), 3);
    for (i, artifacts) in report.succeeded.iter().enumerate() {
        assert_eq!(artifacts.dir, root.join(task_id(i)));
        assert!(artifacts.first_frame.is_file());
        assert!(artifacts.final_frame.is_file());
        assert!(artifacts.prompt.is_file());
        assert!(artifacts.video.is_none());
    }
}

#[test]
fn seeded_batches_repeat_exactly() {
    let generator = ShapeSorterGenerator::new(small_config().build().unwrap());
    let a = run_batch(&generator, 3, &fresh("repeat-a")).unwrap();
    let b = run_batch(&generator, 3, &fresh("repeat-b")).unwrap();
    for (x, y) in a.succeeded.iter().zip(&b.succeeded) {
        let px = std::fs::read_to_string(&x.prompt).unwrap();
        let py = std::fs::read_to_string(&y.prompt).unwrap();
        assert_eq!(px, py);
        assert_eq!(
            std::fs::read(&x.first_frame).unwrap(),
            std::fs::read(&y.first_frame).unwrap()
        );
    }
}

#[test]
fn exhaustion_is_skipped_by_default() {
    let generator = tiny_catalog_generator(ExhaustionPolicy::Skip, false);
    let report = run_batch(&generator, 12, &fresh("skip")).unwrap();

    // Three pairs give four distinct Easy line signatures at most.
    assert!(report.succeeded.len() <= 4);
    assert_eq!(report.total(), 12);
    assert!(report.skipped.len() >= 8);
    assert!(report.failed.is_empty());
    assert!(!report.is_complete());
}

#[test]
fn exhaustion_aborts_when_asked() {
    let generator = tiny_catalog_generator(ExhaustionPolicy::Abort, false);
    let err = run_batch(&generator, 12, &fresh("abort")).unwrap_err();
    assert!(matches!(err, SorterError::UniquenessExhausted { attempts: 5 }));
}

#[test]
fn oversized_catalog_request_aborts() {
    let catalog = Catalog::new(vec![ShapeKind::Hexagon], vec![Color::Blue]).unwrap();
    let cfg = small_config().build().unwrap();
    let generator = ShapeSorterGenerator::with_catalog(cfg, catalog);
    let err = run_batch(&generator, 2, &fresh("oversized")).unwrap_err();
    assert!(matches!(err, SorterError::InsufficientCombinations { .. }));
}

#[test]
fn parallel_batch_keeps_signatures_unique() {
    let generator = tiny_catalog_generator(ExhaustionPolicy::Skip, true);
    let root = fresh("parallel");
    let report = run_batch(&generator, 10, &root).unwrap();

    assert_eq!(report.total(), 10);
    assert!(report.succeeded.len() <= 4);
    let mut prompts: Vec<String> = report
        .succeeded
        .iter()
        .map(|a| std::fs::read_to_string(&a.prompt).unwrap())
        .collect();
    let before = prompts.len();
    prompts.sort();
    prompts.dedup();
    assert_eq!(prompts.len(), before);
}
