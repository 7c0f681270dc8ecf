//! Position generators for the four arrangement variants.

use rand::Rng;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::Arrangement;

/// Upper bound on a shape's edge length, in pixels.
pub(crate) const MAX_SHAPE_SIZE: f64 = 90.0;
/// Share of a grid cell a shape may fill.
const CELL_FILL: f64 = 0.55;
/// Scatter shapes are drawn a little smaller to leave room for spacing.
const SCATTER_CELL_FILL: f64 = 0.5;
/// Extra gap between scattered shapes beyond their bounding circles.
pub(crate) const SCATTER_MARGIN: f64 = 4.0;
/// Candidate draws per scattered item before giving up.
pub(crate) const MAX_SCATTER_ATTEMPTS: u32 = 200;

/// Left-hand region holding the cards.
pub(crate) fn staging_area(canvas: Canvas) -> Rect {
    canvas.fraction_rect(0.12, 0.18, 0.40, 0.82)
}

/// Right-hand region holding the outline slots.
pub(crate) fn outline_area(canvas: Canvas) -> Rect {
    canvas.fraction_rect(0.60, 0.18, 0.88, 0.82)
}

/// Minimum center distance between two scattered shapes of edge `size`.
///
/// Every shape fits inside a circle of diameter `size * sqrt(2)`.
pub(crate) fn scatter_min_distance(size: f64) -> f64 {
    size * std::f64::consts::SQRT_2 + SCATTER_MARGIN
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grid {
    columns: usize,
    rows: usize,
}

impl Grid {
    fn for_arrangement(arrangement: Arrangement, count: usize) -> Self {
        let columns = match arrangement {
            Arrangement::Line | Arrangement::Staggered => 1,
            Arrangement::Grid | Arrangement::Scatter => 2,
        };
        Self {
            columns,
            rows: count.div_ceil(columns).max(1),
        }
    }

    fn cell(self, area: Rect) -> (f64, f64) {
        (
            area.width() / self.columns as f64,
            area.height() / self.rows as f64,
        )
    }

    /// Center of cell `idx` in row-major order.
    fn center(self, area: Rect, idx: usize) -> Point {
        let row = idx / self.columns;
        let col = idx % self.columns;
        Point::new(
            area.x0 + (col as f64 + 0.5) / self.columns as f64 * area.width(),
            area.y0 + (row as f64 + 0.5) / self.rows as f64 * area.height(),
        )
    }
}

fn jitter_fraction(arrangement: Arrangement) -> f64 {
    match arrangement {
        Arrangement::Line => 0.0,
        Arrangement::Staggered => 0.015,
        Arrangement::Grid => 0.01,
        Arrangement::Scatter => 0.0,
    }
}

/// Shared edge length for `count` shapes laid out in `area`.
pub(crate) fn shape_size(arrangement: Arrangement, count: usize, area: Rect) -> f64 {
    let grid = Grid::for_arrangement(arrangement, count);
    let (cell_w, cell_h) = grid.cell(area);
    let fill = match arrangement {
        Arrangement::Scatter => SCATTER_CELL_FILL,
        _ => CELL_FILL,
    };
    // Staggered offsets split the single column into two lanes.
    let cell_w = match arrangement {
        Arrangement::Staggered => cell_w * 0.5,
        _ => cell_w,
    };
    MAX_SHAPE_SIZE.min(cell_w * fill).min(cell_h * fill)
}

/// Shape centers for `count` items inside `area`.
pub(crate) fn place<R: Rng + ?Sized>(
    arrangement: Arrangement,
    count: usize,
    area: Rect,
    size: f64,
    rng: &mut R,
) -> SorterResult<Vec<Point>> {
    match arrangement {
        Arrangement::Line | Arrangement::Grid => {
            let grid = Grid::for_arrangement(arrangement, count);
            let jitter = jitter_fraction(arrangement);
            Ok((0..count)
                .map(|idx| jittered(grid.center(area, idx), area, jitter, rng))
                .collect())
        }
        Arrangement::Staggered => {
            let grid = Grid::for_arrangement(arrangement, count);
            let jitter = jitter_fraction(arrangement);
            Ok((0..count)
                .map(|idx| {
                    let row_center = grid.center(area, idx);
                    let offset = if idx % 2 == 0 { 0.3 } else { 0.7 };
                    let p = Point::new(area.x0 + offset * area.width(), row_center.y);
                    jittered(p, area, jitter, rng)
                })
                .collect())
        }
        Arrangement::Scatter => scatter(count, area, size, rng),
    }
}

fn jittered<R: Rng + ?Sized>(p: Point, area: Rect, jitter: f64, rng: &mut R) -> Point {
    if jitter <= 0.0 {
        return p;
    }
    let dx = rng.random_range(-jitter..=jitter) * area.width();
    let dy = rng.random_range(-jitter..=jitter) * area.height();
    Point::new(p.x + dx, p.y + dy)
}

fn scatter<R: Rng + ?Sized>(
    count: usize,
    area: Rect,
    size: f64,
    rng: &mut R,
) -> SorterResult<Vec<Point>> {
    let bounds = area.inset(-size / 2.0);
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(SorterError::placement(format!(
            "area {}x{} cannot hold shapes of size {size:.1}",
            area.width(),
            area.height()
        )));
    }

    let min_dist = scatter_min_distance(size);
    let mut placed: Vec<Point> = Vec::with_capacity(count);
    for idx in 0..count {
        let mut accepted = None;
        for _ in 0..MAX_SCATTER_ATTEMPTS {
            let candidate = Point::new(
                rng.random_range(bounds.x0..=bounds.x1),
                rng.random_range(bounds.y0..=bounds.y1),
            );
            if placed.iter().all(|p| p.distance(candidate) >= min_dist) {
                accepted = Some(candidate);
                break;
            }
        }
        match accepted {
            Some(p) => placed.push(p),
            None => {
                return Err(SorterError::placement(format!(
                    "could not scatter item {} of {count} with min distance {min_dist:.1} \
                     after {MAX_SCATTER_ATTEMPTS} attempts",
                    idx + 1
                )));
            }
        }
    }
    Ok(placed)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
