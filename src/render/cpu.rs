use crate::animation::motion::{CardState, FrameState};
use crate::catalog::ShapePair;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgb8};
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::Layout;
use crate::render::backend::{BoardStyle, FrameRGBA, FrameRenderer};
use crate::render::shapes::{inset_path, shape_path};

/// Software renderer on top of `vello_cpu`.
pub struct CpuRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    style: BoardStyle,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRenderer {
    pub fn new(canvas: Canvas, style: BoardStyle) -> SorterResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SorterError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SorterError::render("canvas height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            style,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    fn draw_board(&self, ctx: &mut vello_cpu::RenderContext) {
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        let s = &self.style;

        set_color(ctx, s.background);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        let half = s.divider_width / 2.0;
        set_color(ctx, s.background.mix(s.divider, s.divider_opacity));
        ctx.fill_rect(&rect_to_cpu(Rect::new(
            w / 2.0 - half,
            s.divider_inset,
            w / 2.0 + half,
            h - s.divider_inset,
        )));
    }

    fn draw_slots(&self, ctx: &mut vello_cpu::RenderContext, layout: &Layout) {
        let size = layout.shape_size();
        for slot in layout.slots() {
            let kind = slot.pair.shape;
            set_color(ctx, self.style.outline);
            ctx.fill_path(&bezpath_to_cpu(&shape_path(kind, slot.target, size)));
            set_color(ctx, self.style.background);
            ctx.fill_path(&bezpath_to_cpu(&inset_path(
                kind,
                slot.target,
                size,
                self.style.outline_width,
            )));
        }
    }

    fn draw_card(&self, ctx: &mut vello_cpu::RenderContext, card: &CardState, size: f64) {
        let color = card.pair.color.rgb();
        if card.active {
            set_color(ctx, color.mix(self.style.background, self.style.halo_fade));
            fill_shape(ctx, card.pair, card.position, size + self.style.halo_grow);
        }
        set_color(ctx, color);
        fill_shape(ctx, card.pair, card.position, size);
    }
}

impl FrameRenderer for CpuRenderer {
    #[tracing::instrument(level = "trace", skip_all, fields(cards = state.cards.len()))]
    fn render(&mut self, layout: &Layout, state: &FrameState) -> SorterResult<FrameRGBA> {
        if layout.canvas() != self.canvas {
            return Err(SorterError::render(format!(
                "layout canvas {}x{} does not match renderer canvas {}x{}",
                layout.canvas().width,
                layout.canvas().height,
                self.canvas.width,
                self.canvas.height
            )));
        }

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.draw_board(&mut ctx);
        self.draw_slots(&mut ctx, layout);

        let size = layout.shape_size();
        for card in state.cards.iter().filter(|c| !c.active) {
            self.draw_card(&mut ctx, card, size);
        }
        for card in state.cards.iter().filter(|c| c.active) {
            self.draw_card(&mut ctx, card, size);
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
}

fn fill_shape(ctx: &mut vello_cpu::RenderContext, pair: ShapePair, center: Point, size: f64) {
    ctx.fill_path(&bezpath_to_cpu(&shape_path(pair.shape, center, size)));
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
