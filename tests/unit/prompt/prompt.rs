use super::*;
use crate::foundation::core::Canvas;
use crate::layout::model::{Arrangement, Difficulty};
use crate::layout::sampler::LayoutSampler;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn summary_grammar_by_count() {
    assert_eq!(shape_summary::<&str>(&[]), "");
    assert_eq!(
        shape_summary(&["red circle"]),
        "Match the red circle card to its outline."
    );
    assert_eq!(
        shape_summary(&["red circle", "blue star"]),
        "Match the red circle card first, followed by the blue star card."
    );
    assert_eq!(
        shape_summary(&["red circle", "blue star", "green square"]),
        "Match the red circle, blue star, and finally the green square card."
    );
}

#[test]
fn every_template_has_one_summary_slot() {
    for t in PROMPT_TEMPLATES {
        assert_eq!(t.matches(SUMMARY_SLOT).count(), 1);
        assert!(!t.contains("  "));
    }
}

#[test]
fn prompt_names_every_card_in_order() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(5);
    let layout = sampler
        .sample_with_count(Difficulty::Hard, 6, Some(Arrangement::Grid), &mut rng)
        .unwrap();
    let prompt = compose(&layout);
    assert!(!prompt.contains(SUMMARY_SLOT));
    let mut last = 0;
    for card in layout.cards() {
        let label = card.pair.label();
        let at = prompt[last..]
            .find(&label)
            .unwrap_or_else(|| panic!("'{label}' missing from prompt: {prompt}"));
        last += at + label.len();
    }
}

#[test]
fn prompt_is_deterministic() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(9);
    let layout = sampler.sample(Difficulty::Medium, None, &mut rng).unwrap();
    assert_eq!(compose(&layout), compose(&layout.clone()));
}

#[test]
fn both_templates_are_reachable() {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut seen = [false; 2];
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = sampler
            .sample_with_count(Difficulty::Easy, 2, Some(Arrangement::Line), &mut rng)
            .unwrap();
        seen[template_index(&layout)] = true;
    }
    assert_eq!(seen, [true, true]);
}
