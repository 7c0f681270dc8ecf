use super::*;
use crate::animation::motion::{final_state, first_state};
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;
use crate::layout::model::{Arrangement, Difficulty};
use crate::layout::sampler::LayoutSampler;
use crate::render::backend::BoardStyle;
use crate::render::cpu::CpuRenderer;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn layout() -> Layout {
    let canvas = Canvas::new(256, 160).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    LayoutSampler::new(canvas)
        .sample_with_count(Difficulty::Easy, 2, Some(Arrangement::Line), &mut rng)
        .unwrap()
}

#[test]
fn sink_sees_every_frame_in_order() {
    let layout = layout();
    let params = AnimationParams::new(10.0, 0.5).unwrap().with_hold_frames(2);
    let mut renderer = CpuRenderer::new(layout.canvas(), BoardStyle::default()).unwrap();
    let mut sink = InMemorySink::new();

    let n = stream_animation(&layout, &params, &mut renderer, &mut sink).unwrap();

    let expected = synthesize_with(&layout, &params).unwrap().total_frames() as u64;
    assert_eq!(n, expected);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (256, 160, 10));
    for (i, (idx, _)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
    }
}

#[test]
fn first_and_last_frames_match_the_still_images() {
    let layout = layout();
    let params = AnimationParams::new(10.0, 0.5).unwrap();
    let mut renderer = CpuRenderer::new(layout.canvas(), BoardStyle::default()).unwrap();
    let mut sink = InMemorySink::new();
    stream_animation(&layout, &params, &mut renderer, &mut sink).unwrap();

    let first = renderer.render(&layout, &first_state(&layout)).unwrap();
    let last = renderer
        .render(&layout, &final_state(&layout).unwrap())
        .unwrap();
    let frames = sink.frames();
    assert_eq!(frames[0].1, first);
    assert_eq!(frames[frames.len() - 1].1, last);
}

#[test]
fn fractional_fps_is_rejected_before_the_sink_starts() {
    let layout = layout();
    let mut renderer = CpuRenderer::new(layout.canvas(), BoardStyle::default()).unwrap();
    for fps in [29.97, 0.4] {
        let params = AnimationParams::new(fps, 1.0).unwrap();
        let mut sink = InMemorySink::new();
        let err = stream_animation(&layout, &params, &mut renderer, &mut sink).unwrap_err();
        assert!(matches!(err, SorterError::InvalidAnimationParameters(_)));
        assert!(sink.config().is_none());
    }
}
