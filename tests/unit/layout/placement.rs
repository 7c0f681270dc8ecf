use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn area() -> Rect {
    staging_area(Canvas::default())
}

#[test]
fn areas_sit_on_either_side_of_the_divider() {
    let canvas = Canvas::default();
    let left = staging_area(canvas);
    let right = outline_area(canvas);
    let mid = f64::from(canvas.width) / 2.0;
    assert!(left.x1 < mid);
    assert!(right.x0 > mid);
    assert_eq!(left.y0, right.y0);
    assert_eq!(left.height(), right.height());
}

#[test]
fn line_is_a_single_evenly_spaced_column() {
    let mut rng = StdRng::seed_from_u64(1);
    let pts = place(Arrangement::Line, 4, area(), 40.0, &mut rng).unwrap();
    assert_eq!(pts.len(), 4);
    assert!(pts.iter().all(|p| p.x == pts[0].x));
    let gaps: Vec<f64> = pts.windows(2).map(|w| w[1].y - w[0].y).collect();
    for g in &gaps {
        assert!((g - gaps[0]).abs() < 1e-9);
    }
}

#[test]
fn staggered_alternates_sides() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = area();
    let pts = place(Arrangement::Staggered, 5, a, 40.0, &mut rng).unwrap();
    let mid = a.center().x;
    for (i, p) in pts.iter().enumerate() {
        if i % 2 == 0 {
            assert!(p.x < mid);
        } else {
            assert!(p.x > mid);
        }
    }
}

#[test]
fn grid_uses_two_columns() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = area();
    let pts = place(Arrangement::Grid, 4, a, 40.0, &mut rng).unwrap();
    let mid = a.center().x;
    assert!(pts[0].x < mid && pts[1].x > mid);
    assert!(pts[2].x < mid && pts[3].x > mid);
    assert!(pts[2].y > pts[0].y);
}

#[test]
fn scatter_respects_min_distance_for_all_hard_counts() {
    let a = area();
    for count in 1..=6 {
        let size = shape_size(Arrangement::Scatter, count, a);
        let min_dist = scatter_min_distance(size);
        let mut ok = 0;
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let Ok(pts) = place(Arrangement::Scatter, count, a, size, &mut rng) else {
                continue;
            };
            ok += 1;
            assert_eq!(pts.len(), count);
            for (i, p) in pts.iter().enumerate() {
                assert!(a.contains(*p));
                for q in &pts[i + 1..] {
                    assert!(p.distance(*q) >= min_dist);
                }
            }
        }
        assert!(ok > 20, "scatter placed only {ok}/40 layouts of {count}");
    }
}

#[test]
fn scatter_fails_when_area_is_too_crowded() {
    let mut rng = StdRng::seed_from_u64(4);
    let tiny = Rect::new(0.0, 0.0, 60.0, 60.0);
    let err = place(Arrangement::Scatter, 5, tiny, 20.0, &mut rng).unwrap_err();
    assert!(matches!(err, SorterError::Placement(_)));
}

#[test]
fn shape_size_is_capped_and_shrinks_with_count() {
    let a = area();
    assert!(shape_size(Arrangement::Line, 1, a) <= MAX_SHAPE_SIZE);
    assert!(shape_size(Arrangement::Line, 6, a) < shape_size(Arrangement::Line, 2, a));
    assert!(shape_size(Arrangement::Scatter, 6, a) > 0.0);
}
