use crate::animation::motion::FrameState;
use crate::foundation::core::Rgb8;
use crate::foundation::error::SorterResult;
use crate::layout::model::Layout;

/// A rendered frame as RGBA8 pixels.
///
/// Pixels are premultiplied; the board is fully opaque, so every alpha byte is 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Tightly packed RGB8 copy, dropping alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }
}

/// Colors and stroke widths of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardStyle {
    /// Canvas fill.
    pub background: Rgb8,
    /// Divider tint before blending into the background.
    pub divider: Rgb8,
    /// Share of `divider` in the blended divider color.
    pub divider_opacity: f64,
    /// Divider bar width in pixels.
    pub divider_width: f64,
    /// Vertical gap above and below the divider bar.
    pub divider_inset: f64,
    /// Slot outline color.
    pub outline: Rgb8,
    /// Slot outline width in pixels.
    pub outline_width: f64,
    /// Extra size of the halo drawn behind the moving card.
    pub halo_grow: f64,
    /// How far the halo tint is pulled toward the background.
    pub halo_fade: f64,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            background: Rgb8::new(248, 250, 252),
            divider: Rgb8::new(148, 163, 184),
            divider_opacity: 0.35,
            divider_width: 8.0,
            divider_inset: 40.0,
            outline: Rgb8::new(100, 116, 139),
            outline_width: 3.0,
            halo_grow: 10.0,
            halo_fade: 0.6,
        }
    }
}

/// Draws one [`FrameState`] of a [`Layout`] into pixels.
pub trait FrameRenderer {
    /// Render `state`: board, every slot outline, every card at its current position.
    fn render(&mut self, layout: &Layout, state: &FrameState) -> SorterResult<FrameRGBA>;
}
