use crate::catalog::ShapePair;
use crate::foundation::core::Point;
use crate::foundation::error::{SorterError, SorterResult};
use crate::foundation::math::lerp_point;
use crate::layout::model::Layout;

/// Every move shows at least its start and its end.
pub const MIN_SAMPLES_PER_MOVE: usize = 2;
/// Per-move sample count never drops below this when a duration cap applies.
pub const MIN_CAPPED_SAMPLES_PER_MOVE: usize = 10;
/// Upper bound on `fps * seconds_per_move`.
pub const MAX_SAMPLES_PER_MOVE: f64 = 1_000_000.0;

/// Timing for a solution animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    /// Output frames per second.
    pub fps: f64,
    /// Seconds each card takes to slide into its slot.
    pub seconds_per_move: f64,
    /// Frames repeating the first state before, and the final state after, the moves.
    pub hold_frames: u32,
    /// Optional cap on the whole animation; shortens the moves, not the holds.
    pub max_duration_secs: Option<f64>,
}

impl AnimationParams {
    /// Plain timing: no holds, no duration cap.
    pub fn new(fps: f64, seconds_per_move: f64) -> SorterResult<Self> {
        let params = Self {
            fps,
            seconds_per_move,
            hold_frames: 0,
            max_duration_secs: None,
        };
        params.validate()?;
        Ok(params)
    }

    /// Return params with `hold` frames on either end.
    pub fn with_hold_frames(mut self, hold: u32) -> Self {
        self.hold_frames = hold;
        self
    }

    /// Return params capped at `secs` of total duration.
    pub fn with_max_duration(mut self, secs: Option<f64>) -> Self {
        self.max_duration_secs = secs;
        self
    }

    /// Reject non-positive or non-finite timing.
    pub fn validate(&self) -> SorterResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(SorterError::animation(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        if !self.seconds_per_move.is_finite() || self.seconds_per_move <= 0.0 {
            return Err(SorterError::animation(format!(
                "seconds per move must be positive, got {}",
                self.seconds_per_move
            )));
        }
        if let Some(max) = self.max_duration_secs
            && (!max.is_finite() || max <= 0.0)
        {
            return Err(SorterError::animation(format!(
                "max duration must be positive, got {max}"
            )));
        }
        let per_move = self.fps * self.seconds_per_move;
        if !per_move.is_finite() || per_move > MAX_SAMPLES_PER_MOVE {
            return Err(SorterError::animation(format!(
                "fps * seconds per move must be at most {MAX_SAMPLES_PER_MOVE}, got {per_move}"
            )));
        }
        Ok(())
    }

    /// Interpolation samples for each of `moves` moves.
    pub fn samples_per_move(&self, moves: usize) -> usize {
        let uncapped =
            ((self.seconds_per_move * self.fps).round() as usize).max(MIN_SAMPLES_PER_MOVE);
        let Some(max_secs) = self.max_duration_secs else {
            return uncapped;
        };
        if moves == 0 {
            return uncapped;
        }
        let max_frames = (max_secs * self.fps).floor() as usize;
        let holds = (self.hold_frames as usize).saturating_mul(2);
        if holds.saturating_add(moves.saturating_mul(uncapped)) <= max_frames {
            return uncapped;
        }
        let fitted = max_frames.saturating_sub(holds) / moves;
        fitted.max(MIN_CAPPED_SAMPLES_PER_MOVE).min(uncapped)
    }
}

/// One card sliding into its matching slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    /// Index into [`Layout::cards`].
    pub card: usize,
    /// Pair being moved.
    pub pair: ShapePair,
    /// Staging position.
    pub from: Point,
    /// Slot position.
    pub to: Point,
}

impl Move {
    /// Card center at `fraction` of the move; exact endpoints at 0 and 1.
    pub fn position_at(&self, fraction: f64) -> Point {
        lerp_point(self.from, self.to, fraction)
    }
}

/// Moves in animation order: card creation order.
pub fn plan_moves(layout: &Layout) -> SorterResult<Vec<Move>> {
    layout
        .cards()
        .iter()
        .enumerate()
        .map(|(card, c)| {
            let slot = layout.slot_for(c.pair).ok_or_else(|| {
                SorterError::validation(format!("card '{}' has no matching slot", c.pair))
            })?;
            Ok(Move {
                card,
                pair: c.pair,
                from: c.start,
                to: slot.target,
            })
        })
        .collect()
}

/// Where one card is drawn in a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    /// Card identity.
    pub pair: ShapePair,
    /// Current center.
    pub position: Point,
    /// True only while the card is strictly between its start and its slot.
    pub active: bool,
}

/// All card positions at one instant, in card order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    /// One entry per card.
    pub cards: Vec<CardState>,
}

/// Every card at its staging position.
pub fn first_state(layout: &Layout) -> FrameState {
    FrameState {
        cards: layout
            .cards()
            .iter()
            .map(|c| CardState {
                pair: c.pair,
                position: c.start,
                active: false,
            })
            .collect(),
    }
}

/// Every card in its slot.
pub fn final_state(layout: &Layout) -> SorterResult<FrameState> {
    let moves = plan_moves(layout)?;
    Ok(state_after(layout, &moves, moves.len(), 0.0))
}

/// State with moves `[0, done)` complete and move `done` at `fraction`.
fn state_after(layout: &Layout, moves: &[Move], done: usize, fraction: f64) -> FrameState {
    let mut state = first_state(layout);
    for (k, mv) in moves.iter().enumerate() {
        let card = &mut state.cards[mv.card];
        if k < done {
            card.position = mv.to;
        } else if k == done {
            card.position = mv.position_at(fraction);
            card.active = fraction > 0.0 && fraction < 1.0;
        }
    }
    state
}

/// Lazy, finite sequence of frame states for one layout.
///
/// The first item equals [`first_state`] and the last equals [`final_state`].
#[derive(Clone, Debug)]
pub struct Animation<'a> {
    layout: &'a Layout,
    moves: Vec<Move>,
    samples_per_move: usize,
    hold: usize,
    next: usize,
    total: usize,
}

impl<'a> Animation<'a> {
    /// Moves in playback order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Interpolation samples per move.
    pub fn samples_per_move(&self) -> usize {
        self.samples_per_move
    }

    /// Total frames, holds included.
    pub fn total_frames(&self) -> usize {
        self.total
    }

    fn state_at(&self, idx: usize) -> FrameState {
        let moving = self.moves.len() * self.samples_per_move;
        if idx < self.hold {
            return first_state(self.layout);
        }
        let j = idx - self.hold;
        if j >= moving {
            return state_after(self.layout, &self.moves, self.moves.len(), 0.0);
        }
        let k = j / self.samples_per_move;
        let s = j % self.samples_per_move;
        let fraction = s as f64 / (self.samples_per_move - 1) as f64;
        state_after(self.layout, &self.moves, k, fraction)
    }
}

impl Iterator for Animation<'_> {
    type Item = FrameState;

    fn next(&mut self) -> Option<FrameState> {
        if self.next >= self.total {
            return None;
        }
        let state = self.state_at(self.next);
        self.next += 1;
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Animation<'_> {}

/// Frames for `layout` at `fps`, each move lasting `seconds_per_move`.
pub fn synthesize(
    layout: &Layout,
    fps: f64,
    seconds_per_move: f64,
) -> SorterResult<Animation<'_>> {
    synthesize_with(layout, &AnimationParams::new(fps, seconds_per_move)?)
}

/// Frames for `layout` under full [`AnimationParams`].
pub fn synthesize_with<'a>(
    layout: &'a Layout,
    params: &AnimationParams,
) -> SorterResult<Animation<'a>> {
    params.validate()?;
    let moves = plan_moves(layout)?;
    let samples_per_move = params.samples_per_move(moves.len());
    let hold = params.hold_frames as usize;
    let total = moves
        .len()
        .checked_mul(samples_per_move)
        .and_then(|m| hold.checked_mul(2)?.checked_add(m))
        .ok_or_else(|| SorterError::animation("animation frame count overflows usize"))?;
    Ok(Animation {
        layout,
        moves,
        samples_per_move,
        hold,
        next: 0,
        total,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
