use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, PI};

use kurbo::Shape as _;

use crate::catalog::ShapeKind;
use crate::foundation::core::{BezPath, Point, Rect, Vec2};

const STAR_INNER_RATIO: f64 = 0.45;

/// Closed outline of `kind` centered on `center`, fitting a `size` x `size` box.
pub(crate) fn shape_path(kind: ShapeKind, center: Point, size: f64) -> BezPath {
    let r = size / 2.0;
    let (x, y) = (center.x, center.y);
    match kind {
        ShapeKind::Circle => kurbo::Circle::new(center, r).to_path(0.1),
        ShapeKind::Square => Rect::new(x - r, y - r, x + r, y + r).to_path(0.1),
        ShapeKind::Triangle => polygon(&[
            Point::new(x, y - r),
            Point::new(x - r, y + r),
            Point::new(x + r, y + r),
        ]),
        ShapeKind::Diamond => polygon(&[
            Point::new(x, y - r),
            Point::new(x + r, y),
            Point::new(x, y + r),
            Point::new(x - r, y),
        ]),
        ShapeKind::Hexagon => {
            let pts: Vec<Point> = (0..6u32)
                .map(|i| {
                    let a = FRAC_PI_6 + f64::from(i) * FRAC_PI_3;
                    center + Vec2::new(r * a.cos(), r * a.sin())
                })
                .collect();
            polygon(&pts)
        }
        ShapeKind::Star => {
            let pts: Vec<Point> = (0..10u32)
                .map(|i| {
                    let a = -FRAC_PI_2 + f64::from(i) * PI / 5.0;
                    let rr = if i % 2 == 0 { r } else { r * STAR_INNER_RATIO };
                    center + Vec2::new(rr * a.cos(), rr * a.sin())
                })
                .collect();
            polygon(&pts)
        }
    }
}

/// The same outline shrunk so its edges sit roughly `inset` pixels inside the full shape.
///
/// Shrinking happens about the shape's incenter so the band has an even width.
pub(crate) fn inset_path(kind: ShapeKind, center: Point, size: f64, inset: f64) -> BezPath {
    let (inradius, anchor) = incircle(kind, center, size);
    let scale = ((inradius - inset) / inradius).max(0.0);
    let to_anchor = anchor.to_vec2();
    let t = kurbo::Affine::translate(to_anchor)
        * kurbo::Affine::scale(scale)
        * kurbo::Affine::translate(-to_anchor);
    t * shape_path(kind, center, size)
}

/// Approximate inradius and incenter of `kind`.
fn incircle(kind: ShapeKind, center: Point, size: f64) -> (f64, Point) {
    let r = size / 2.0;
    match kind {
        ShapeKind::Circle | ShapeKind::Square => (r, center),
        ShapeKind::Diamond => (r / std::f64::consts::SQRT_2, center),
        ShapeKind::Hexagon => (r * FRAC_PI_6.cos(), center),
        ShapeKind::Triangle => {
            // Base `size`, height `size`: area / semiperimeter.
            let side = (r * r + size * size).sqrt();
            let inr = (size * size / 2.0) / ((size + 2.0 * side) / 2.0);
            (inr, Point::new(center.x, center.y + r - inr))
        }
        ShapeKind::Star => (r * STAR_INNER_RATIO * (PI / 5.0).cos(), center),
    }
}

fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
