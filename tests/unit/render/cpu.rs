use super::*;
use crate::animation::motion::{first_state, final_state, synthesize};
use crate::layout::model::{Arrangement, Difficulty};
use crate::layout::sampler::LayoutSampler;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn line_layout(count: usize, seed: u64) -> Layout {
    let sampler = LayoutSampler::new(Canvas::default());
    let mut rng = StdRng::seed_from_u64(seed);
    sampler
        .sample_with_count(Difficulty::Medium, count, Some(Arrangement::Line), &mut rng)
        .expect("line layouts always place")
}

fn renderer() -> CpuRenderer {
    CpuRenderer::new(Canvas::default(), BoardStyle::default()).expect("renderer")
}

fn rgb_at(frame: &FrameRGBA, p: Point) -> [u8; 3] {
    let px = frame.pixel(p.x as u32, p.y as u32).expect("inside canvas");
    [px[0], px[1], px[2]]
}

fn close(a: [u8; 3], b: Rgb8) -> bool {
    let d = |x: u8, y: u8| x.abs_diff(y) <= 1;
    d(a[0], b.r) && d(a[1], b.g) && d(a[2], b.b)
}

#[test]
fn frame_has_canvas_dimensions_and_is_opaque() {
    let layout = line_layout(3, 1);
    let frame = renderer()
        .render(&layout, &first_state(&layout))
        .expect("render");
    assert_eq!((frame.width, frame.height), (768, 512));
    assert_eq!(frame.data.len(), 768 * 512 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn corner_is_background() {
    let layout = line_layout(2, 2);
    let frame = renderer()
        .render(&layout, &first_state(&layout))
        .expect("render");
    let bg = BoardStyle::default().background;
    assert!(close(rgb_at(&frame, Point::new(1.0, 1.0)), bg));
    assert!(close(rgb_at(&frame, Point::new(766.0, 510.0)), bg));
}

#[test]
fn divider_is_tinted() {
    let layout = line_layout(2, 3);
    let frame = renderer()
        .render(&layout, &first_state(&layout))
        .expect("render");
    let style = BoardStyle::default();
    let tint = style.background.mix(style.divider, style.divider_opacity);
    assert!(close(rgb_at(&frame, Point::new(384.0, 256.0)), tint));
}

#[test]
fn cards_and_slots_swap_between_first_and_final_frames() {
    let layout = line_layout(3, 4);
    let mut r = renderer();
    let first = r.render(&layout, &first_state(&layout)).expect("first");
    let last = r
        .render(&layout, &final_state(&layout).expect("final"))
        .expect("last");
    let bg = BoardStyle::default().background;

    for card in layout.cards() {
        let color = card.pair.color.rgb();
        assert!(close(rgb_at(&first, card.start), color), "{}", card.pair);
        assert!(close(rgb_at(&last, card.start), bg), "{}", card.pair);
    }
    for slot in layout.slots() {
        let color = slot.pair.color.rgb();
        assert!(close(rgb_at(&first, slot.target), bg), "{}", slot.pair);
        assert!(close(rgb_at(&last, slot.target), color), "{}", slot.pair);
    }
}

#[test]
fn rendering_is_deterministic() {
    let layout = line_layout(4, 5);
    let state = first_state(&layout);
    let a = renderer().render(&layout, &state).expect("a");
    let b = renderer().render(&layout, &state).expect("b");
    assert_eq!(a, b);
}

#[test]
fn animation_endpoints_match_keyframes() {
    let layout = line_layout(2, 6);
    let mut r = renderer();
    let states: Vec<_> = synthesize(&layout, 10.0, 1.0).expect("anim").collect();
    let first = r.render(&layout, &first_state(&layout)).expect("first");
    let last = r
        .render(&layout, &final_state(&layout).expect("final"))
        .expect("last");
    let anim_first = r.render(&layout, &states[0]).expect("f0");
    let anim_last = r.render(&layout, &states[states.len() - 1]).expect("fn");
    assert_eq!(first, anim_first);
    assert_eq!(last, anim_last);
}

#[test]
fn mismatched_canvas_is_rejected() {
    let layout = line_layout(2, 7);
    let mut small = CpuRenderer::new(
        Canvas::new(256, 256).expect("canvas"),
        BoardStyle::default(),
    )
    .expect("renderer");
    let err = small
        .render(&layout, &first_state(&layout))
        .expect_err("canvas mismatch");
    assert!(matches!(err, SorterError::Render(_)));
}
