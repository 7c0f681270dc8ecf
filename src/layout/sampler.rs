use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, ShapePair};
use crate::foundation::core::Canvas;
use crate::foundation::error::{SorterError, SorterResult};
use crate::layout::model::{Arrangement, Card, Difficulty, Layout, Slot};
use crate::layout::placement::{outline_area, place, shape_size, staging_area};

/// Draws [`Layout`]s for one canvas from one catalog.
///
/// All randomness comes from the caller's RNG, so a seeded RNG and the same call sequence
/// reproduce the same layouts.
#[derive(Clone, Debug)]
pub struct LayoutSampler {
    canvas: Canvas,
    catalog: Catalog,
}

impl LayoutSampler {
    /// Sampler over the standard 36-pair catalog.
    pub fn new(canvas: Canvas) -> Self {
        Self::with_catalog(canvas, Catalog::standard())
    }

    /// Sampler over a restricted catalog.
    pub fn with_catalog(canvas: Canvas, catalog: Catalog) -> Self {
        Self { canvas, catalog }
    }

    /// Canvas the layouts are placed on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Catalog the pairs are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sample a layout whose card count is drawn from `difficulty`'s range.
    ///
    /// `arrangement = None` picks the variant from the drawn count.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        arrangement: Option<Arrangement>,
        rng: &mut R,
    ) -> SorterResult<Layout> {
        let count = difficulty.sample_count(rng);
        self.sample_with_count(difficulty, count, arrangement, rng)
    }

    /// Sample a layout with exactly `count` cards.
    pub fn sample_with_count<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        arrangement: Option<Arrangement>,
        rng: &mut R,
    ) -> SorterResult<Layout> {
        if count == 0 {
            return Err(SorterError::validation("a layout needs at least one card"));
        }
        let available = self.catalog.capacity();
        if count > available {
            return Err(SorterError::InsufficientCombinations {
                requested: count,
                available,
            });
        }

        let arrangement = arrangement.unwrap_or_else(|| Arrangement::for_count(count));
        let staging = staging_area(self.canvas);
        let outlines = outline_area(self.canvas);
        let size = shape_size(arrangement, count, staging).min(shape_size(
            arrangement,
            count,
            outlines,
        ));

        let starts = place(arrangement, count, staging, size, rng)?;
        let targets = place(arrangement, count, outlines, size, rng)?;

        let mut pairs = self.catalog.pairs();
        pairs.shuffle(rng);
        pairs.truncate(count);

        let slot_pairs = slot_order(&pairs, arrangement, rng);

        let cards = pairs
            .iter()
            .zip(starts)
            .map(|(&pair, start)| Card { pair, start })
            .collect();
        let slots = slot_pairs
            .into_iter()
            .zip(targets)
            .map(|(pair, target)| Slot { pair, target })
            .collect();

        Ok(Layout {
            canvas: self.canvas,
            difficulty,
            arrangement,
            shape_size: size,
            cards,
            slots,
        })
    }
}

/// Pair carried by each slot position.
///
/// Grid and scatter never keep the card order; line and staggered keep it and rely on
/// positional jitter alone.
fn slot_order<R: Rng + ?Sized>(
    card_pairs: &[ShapePair],
    arrangement: Arrangement,
    rng: &mut R,
) -> Vec<ShapePair> {
    let mut slots = card_pairs.to_vec();
    if !arrangement.shuffles_slots() || slots.len() < 2 {
        return slots;
    }
    slots.shuffle(rng);
    if slots == card_pairs {
        slots.rotate_left(1);
    }
    slots
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sampler.rs"]
mod tests;
