use std::fmt;

use rand::Rng;

use crate::catalog::ShapePair;
use crate::foundation::core::{Canvas, Point};

/// Puzzle difficulty; drives the number of cards.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Two or three cards.
    Easy,
    /// Three to five cards.
    Medium,
    /// Five or six cards.
    Hard,
}

impl Difficulty {
    /// Every difficulty.
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Inclusive card-count range for this difficulty.
    pub fn count_range(self) -> (usize, usize) {
        match self {
            Self::Easy => (2, 3),
            Self::Medium => (3, 5),
            Self::Hard => (5, 6),
        }
    }

    /// Uniform card count within [`Difficulty::count_range`].
    pub fn sample_count<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        let (lo, hi) = self.count_range();
        rng.random_range(lo..=hi)
    }

    /// Uniform pick over all difficulties.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spatial distribution policy for cards and slots.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Evenly spaced along a single column.
    Line,
    /// One item per row, alternating left/right offsets.
    Staggered,
    /// Rows by two columns.
    Grid,
    /// Random placement under a minimum-distance constraint.
    Scatter,
}

impl Arrangement {
    /// Every arrangement variant.
    pub const ALL: [Arrangement; 4] = [Self::Line, Self::Staggered, Self::Grid, Self::Scatter];

    /// Default variant for a card count when none is configured.
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=2 => Self::Line,
            3 => Self::Staggered,
            4 => Self::Grid,
            _ => Self::Scatter,
        }
    }

    /// Whether slot identities are shuffled against card order.
    pub fn shuffles_slots(self) -> bool {
        matches!(self, Self::Grid | Self::Scatter)
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Staggered => "staggered",
            Self::Grid => "grid",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colored shape token in its staging position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    /// Identity shared with exactly one slot.
    pub pair: ShapePair,
    /// Staging position (shape center), left half of the canvas.
    pub start: Point,
}

/// An outline target in the right half of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Identity shared with exactly one card.
    pub pair: ShapePair,
    /// Target position (shape center).
    pub target: Point,
}

/// Position-independent identity of a layout, used for batch uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutSignature {
    /// Sorted card pairs.
    pub pairs: Vec<ShapePair>,
    /// Difficulty tag.
    pub difficulty: Difficulty,
    /// Arrangement tag.
    pub arrangement: Arrangement,
}

impl fmt::Display for LayoutSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.difficulty, self.arrangement, self.pairs.len())?;
        for pair in &self.pairs {
            write!(f, "|{},{}", pair.shape, pair.color)?;
        }
        Ok(())
    }
}

/// One fully specified puzzle instance.
///
/// Built only by [`crate::LayoutSampler`]; card and slot pairs always form the same set.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub(crate) canvas: Canvas,
    pub(crate) difficulty: Difficulty,
    pub(crate) arrangement: Arrangement,
    pub(crate) shape_size: f64,
    pub(crate) cards: Vec<Card>,
    pub(crate) slots: Vec<Slot>,
}

impl Layout {
    /// Canvas the positions refer to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Difficulty tag.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Arrangement tag.
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// Edge length of every card and slot, in pixels.
    pub fn shape_size(&self) -> f64 {
        self.shape_size
    }

    /// Cards in creation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Slots in placement order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of card/slot pairs.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for sampled layouts.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The slot matching `pair`.
    pub fn slot_for(&self, pair: ShapePair) -> Option<&Slot> {
        self.slots.iter().find(|s| s.pair == pair)
    }

    /// Canonical identity: sorted pairs, difficulty and arrangement.
    pub fn signature(&self) -> LayoutSignature {
        let mut pairs: Vec<ShapePair> = self.cards.iter().map(|c| c.pair).collect();
        pairs.sort();
        LayoutSignature {
            pairs,
            difficulty: self.difficulty,
            arrangement: self.arrangement,
        }
    }
}
