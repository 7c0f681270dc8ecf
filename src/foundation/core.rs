use crate::foundation::error::{SorterError, SorterResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Smallest canvas edge the layout areas can be carved out of.
pub const MIN_CANVAS_EDGE: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> SorterResult<Self> {
        if width < MIN_CANVAS_EDGE || height < MIN_CANVAS_EDGE {
            return Err(SorterError::validation(format!(
                "canvas must be at least {MIN_CANVAS_EDGE}x{MIN_CANVAS_EDGE}, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(SorterError::validation(format!(
                "canvas {width}x{height} exceeds the rasterizer limit of {}",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    pub fn is_even(self) -> bool {
        self.width.is_multiple_of(2) && self.height.is_multiple_of(2)
    }

    /// Axis-aligned rectangle spanning the given fractions of the canvas.
    pub fn fraction_rect(self, x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Rect::new(x0 * w, y0 * h, x1 * w, y1 * h)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 768,
            height: 512,
        }
    }
}

/// Straight (opaque) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear mix: `self * (1 - t) + other * t`, truncated like a float-to-int cast.
    pub fn mix(self, other: Rgb8, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8;
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
