use super::*;
use crate::catalog::{Color, ShapeKind};
use crate::layout::placement::scatter_min_distance;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn sorted_card_pairs(layout: &Layout) -> Vec<ShapePair> {
    let mut v: Vec<_> = layout.cards().iter().map(|c| c.pair).collect();
    v.sort();
    v
}

fn sorted_slot_pairs(layout: &Layout) -> Vec<ShapePair> {
    let mut v: Vec<_> = layout.slots().iter().map(|s| s.pair).collect();
    v.sort();
    v
}

fn sample_ok(sampler: &LayoutSampler, d: Difficulty, a: Option<Arrangement>, seed: u64) -> Layout {
    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        match sampler.sample(d, a, &mut rng) {
            Ok(layout) => return layout,
            Err(e) if e.is_retryable() => continue,
            Err(e) => panic!("unexpected sampling error: {e}"),
        }
    }
}

#[test]
fn card_and_slot_pairs_match_and_counts_follow_difficulty() {
    let sampler = LayoutSampler::new(Canvas::default());
    for d in Difficulty::ALL {
        let (lo, hi) = d.count_range();
        for seed in 0..50 {
            let layout = sample_ok(&sampler, d, None, seed);
            assert!((lo..=hi).contains(&layout.len()), "{d}: {}", layout.len());
            assert_eq!(layout.cards().len(), layout.slots().len());
            assert_eq!(sorted_card_pairs(&layout), sorted_slot_pairs(&layout));
            let unique: HashSet<_> = layout.cards().iter().map(|c| c.pair).collect();
            assert_eq!(unique.len(), layout.len());
        }
    }
}

#[test]
fn difficulty_ranges_are_fixed() {
    assert_eq!(Difficulty::Easy.count_range(), (2, 3));
    assert_eq!(Difficulty::Medium.count_range(), (3, 5));
    assert_eq!(Difficulty::Hard.count_range(), (5, 6));
}

#[test]
fn same_seed_reproduces_layout() {
    let sampler = LayoutSampler::new(Canvas::default());
    let a = sample_ok(&sampler, Difficulty::Hard, None, 99);
    let b = sample_ok(&sampler, Difficulty::Hard, None, 99);
    assert_eq!(a, b);
}

#[test]
fn cards_stay_left_and_slots_stay_right() {
    let canvas = Canvas::default();
    let sampler = LayoutSampler::new(canvas);
    let mid = f64::from(canvas.width) / 2.0;
    for arrangement in Arrangement::ALL {
        for seed in 0..10 {
            let layout = sample_ok(&sampler, Difficulty::Hard, Some(arrangement), seed);
            assert_eq!(layout.arrangement(), arrangement);
            let half = layout.shape_size() / 2.0;
            assert!(layout.cards().iter().all(|c| c.start.x + half < mid));
            assert!(layout.slots().iter().all(|s| s.target.x - half > mid));
        }
    }
}

#[test]
fn scatter_cards_and_slots_keep_min_distance() {
    let sampler = LayoutSampler::new(Canvas::default());
    for seed in 0..30 {
        let layout = sample_ok(&sampler, Difficulty::Hard, Some(Arrangement::Scatter), seed);
        let min_dist = scatter_min_distance(layout.shape_size());
        let starts: Vec<_> = layout.cards().iter().map(|c| c.start).collect();
        let targets: Vec<_> = layout.slots().iter().map(|s| s.target).collect();
        for pts in [starts, targets] {
            for (i, p) in pts.iter().enumerate() {
                for q in &pts[i + 1..] {
                    assert!(p.distance(*q) >= min_dist);
                }
            }
        }
    }
}

#[test]
fn grid_and_scatter_never_mirror_card_order() {
    let sampler = LayoutSampler::new(Canvas::default());
    for arrangement in [Arrangement::Grid, Arrangement::Scatter] {
        for seed in 0..30 {
            let layout = sample_ok(&sampler, Difficulty::Medium, Some(arrangement), seed);
            let cards: Vec<_> = layout.cards().iter().map(|c| c.pair).collect();
            let slots: Vec<_> = layout.slots().iter().map(|s| s.pair).collect();
            assert_ne!(cards, slots);
        }
    }
}

#[test]
fn line_keeps_slot_identity_order() {
    let sampler = LayoutSampler::new(Canvas::default());
    let layout = sample_ok(&sampler, Difficulty::Easy, Some(Arrangement::Line), 5);
    let cards: Vec<_> = layout.cards().iter().map(|c| c.pair).collect();
    let slots: Vec<_> = layout.slots().iter().map(|s| s.pair).collect();
    assert_eq!(cards, slots);
}

#[test]
fn unset_arrangement_follows_count() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(8);
    for (count, expected) in [
        (2, Arrangement::Line),
        (3, Arrangement::Staggered),
        (4, Arrangement::Grid),
    ] {
        let layout = sampler
            .sample_with_count(Difficulty::Medium, count, None, &mut rng)
            .unwrap();
        assert_eq!(layout.arrangement(), expected);
    }
}

#[test]
fn seven_pairs_fit_in_the_standard_catalog() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(11);
    let layout = sampler
        .sample_with_count(Difficulty::Hard, 7, Some(Arrangement::Grid), &mut rng)
        .unwrap();
    assert_eq!(layout.len(), 7);
    assert_eq!(sorted_card_pairs(&layout), sorted_slot_pairs(&layout));
}

#[test]
fn too_many_pairs_is_insufficient_combinations() {
    let catalog = Catalog::new(vec![ShapeKind::Circle], vec![Color::Red, Color::Blue]).unwrap();
    let sampler = LayoutSampler::with_catalog(Canvas::default(), catalog);
    let mut rng = StdRng::seed_from_u64(0);
    let err = sampler
        .sample_with_count(Difficulty::Easy, 3, Some(Arrangement::Line), &mut rng)
        .unwrap_err();
    assert!(matches!(
        err,
        SorterError::InsufficientCombinations {
            requested: 3,
            available: 2
        }
    ));
    assert!(!err.is_retryable());
}

#[test]
fn zero_cards_is_rejected() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(0);
    assert!(
        sampler
            .sample_with_count(Difficulty::Easy, 0, None, &mut rng)
            .is_err()
    );
}

#[test]
fn signature_ignores_positions() {
    let sampler = LayoutSampler::new(Canvas::default());
    let a = sample_ok(&sampler, Difficulty::Easy, Some(Arrangement::Grid), 3);
    let mut b = a.clone();
    b.cards[0].start.x += 5.0;
    b.slots[0].target.y -= 3.0;
    assert_eq!(a.signature(), b.signature());
    let text = a.signature().to_string();
    assert!(text.starts_with("easy|grid|"));
}

#[test]
fn slot_for_finds_matching_outline() {
    let sampler = LayoutSampler::new(Canvas::default());
    let layout = sample_ok(&sampler, Difficulty::Hard, None, 21);
    for card in layout.cards() {
        let slot = layout.slot_for(card.pair).unwrap();
        assert_eq!(slot.pair, card.pair);
    }
}
