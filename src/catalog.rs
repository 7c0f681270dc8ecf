//! Fixed shape and color enumerations and the catalog of allowed pairs.

use std::fmt;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{SorterError, SorterResult};

/// Outline kind drawn for a card and its slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Disc.
    Circle,
    /// Axis-aligned square.
    Square,
    /// Isosceles triangle, apex up.
    Triangle,
    /// Five-pointed star.
    Star,
    /// Regular hexagon.
    Hexagon,
    /// Square rotated by 45 degrees.
    Diamond,
}

impl ShapeKind {
    /// Every shape kind, in catalog order.
    pub const ALL: [ShapeKind; 6] = [
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Star,
        Self::Hexagon,
        Self::Diamond,
    ];

    /// Lowercase name used in prompts and signatures.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Hexagon => "hexagon",
            Self::Diamond => "diamond",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card fill color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `#f87171`
    Red,
    /// `#facc15`
    Yellow,
    /// `#60a5fa`
    Blue,
    /// `#4ade80`
    Green,
    /// `#c084fc`
    Purple,
    /// `#fb923c`
    Orange,
}

impl Color {
    /// Every color, in catalog order.
    pub const ALL: [Color; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
    ];

    /// Lowercase name used in prompts and signatures.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Fill color of the card.
    pub fn rgb(self) -> Rgb8 {
        match self {
            Self::Red => Rgb8::new(248, 113, 113),
            Self::Yellow => Rgb8::new(250, 204, 21),
            Self::Blue => Rgb8::new(96, 165, 250),
            Self::Green => Rgb8::new(74, 222, 128),
            Self::Purple => Rgb8::new(192, 132, 252),
            Self::Orange => Rgb8::new(251, 146, 60),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (shape, color) identity shared by one card and its slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShapePair {
    /// Outline kind.
    pub shape: ShapeKind,
    /// Fill color.
    pub color: Color,
}

impl ShapePair {
    /// Build a pair.
    pub const fn new(shape: ShapeKind, color: Color) -> Self {
        Self { shape, color }
    }

    /// Human label, e.g. `"red circle"`.
    pub fn label(self) -> String {
        format!("{} {}", self.color, self.shape)
    }
}

impl fmt::Display for ShapePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.shape)
    }
}

/// The shapes and colors layouts may draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<ShapeKind>,
    colors: Vec<Color>,
}

impl Catalog {
    /// All six shapes by all six colors.
    pub fn standard() -> Self {
        Self {
            shapes: ShapeKind::ALL.to_vec(),
            colors: Color::ALL.to_vec(),
        }
    }

    /// A restricted catalog. Both lists must be non-empty and free of duplicates.
    pub fn new(shapes: Vec<ShapeKind>, colors: Vec<Color>) -> SorterResult<Self> {
        if shapes.is_empty() || colors.is_empty() {
            return Err(SorterError::validation(
                "catalog needs at least one shape and one color",
            ));
        }
        if has_duplicates(&shapes) {
            return Err(SorterError::validation("catalog shapes must be distinct"));
        }
        if has_duplicates(&colors) {
            return Err(SorterError::validation("catalog colors must be distinct"));
        }
        Ok(Self { shapes, colors })
    }

    /// Allowed shapes.
    pub fn shapes(&self) -> &[ShapeKind] {
        &self.shapes
    }

    /// Allowed colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of distinct pairs.
    pub fn capacity(&self) -> usize {
        self.shapes.len() * self.colors.len()
    }

    /// Cross product, shape-major, in catalog order.
    pub fn pairs(&self) -> Vec<ShapePair> {
        self.shapes
            .iter()
            .flat_map(|&shape| self.colors.iter().map(move |&color| ShapePair::new(shape, color)))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].iter().any(|b| a == b))
}

#[cfg(test)]
#[path = "../tests/unit/catalog/catalog.rs"]
mod tests;
