use crate::animation::motion::{AnimationParams, synthesize_with};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::Layout;
use crate::render::backend::FrameRenderer;

/// Render every frame of `layout`'s animation into `sink`; returns the frame count.
///
/// `end` is only reached after every frame was pushed; any error short-circuits.
/// Sinks take a whole frame rate, so a fractional `params.fps` is rejected before
/// `begin` rather than rounded.
#[tracing::instrument(skip_all, fields(cards = layout.len()))]
pub fn stream_animation<R, S>(
    layout: &Layout,
    params: &AnimationParams,
    renderer: &mut R,
    sink: &mut S,
) -> SorterResult<u64>
where
    R: FrameRenderer + ?Sized,
    S: FrameSink + ?Sized,
{
    let animation = synthesize_with(layout, params)?;
    let canvas = layout.canvas();
    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: sink_fps(params.fps)?,
    })?;

    let mut pushed = 0u64;
    for state in animation {
        let frame = renderer.render(layout, &state)?;
        sink.push_frame(FrameIndex(pushed), &frame)?;
        pushed += 1;
    }
    sink.end()?;
    tracing::debug!(frames = pushed, "animation streamed");
    Ok(pushed)
}

fn sink_fps(fps: f64) -> SorterResult<u32> {
    if fps.fract() != 0.0 || fps < 1.0 || fps > f64::from(u32::MAX) {
        return Err(SorterError::animation(format!(
            "sink fps must be a whole number of frames per second, got {fps}"
        )));
    }
    Ok(fps as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/stream.rs"]
mod tests;
