//! Fixed catalog of named tile patterns

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::io::error::{PatternError, Result};
use crate::patterns::tiles;
use crate::spatial::canvas::CellPainter;

/// Optional switches understood by some patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    /// Apply the perceptual correction used by rings and crosshatch
    pub adjusted: bool,
    /// Use intensity-dependent crosshatch spacing instead of even spacing
    pub chaotic: bool,
}

impl Default for PatternFlags {
    fn default() -> Self {
        Self {
            adjusted: true,
            chaotic: false,
        }
    }
}

/// A tile pattern from the catalog
///
/// Variants are declared in menu order, which is alphabetical by display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    /// Evenly spaced one pixel grid lines
    Crosshatch,
    /// Filled disc
    Discs,
    /// Horizontal band
    HorizontalLines,
    /// White upright cross on black
    Plus,
    /// Annulus
    Rings,
    /// Square annulus
    SquareRings,
    /// Filled square
    Squares,
    /// Random dots
    Stippling,
    /// Vertical band
    VerticalLines,
    /// White diagonal cross between black triangles
    Xs,
}

impl Pattern {
    /// Every pattern in menu order
    pub const ALL: [Self; 10] = [
        Self::Crosshatch,
        Self::Discs,
        Self::HorizontalLines,
        Self::Plus,
        Self::Rings,
        Self::SquareRings,
        Self::Squares,
        Self::Stippling,
        Self::VerticalLines,
        Self::Xs,
    ];

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crosshatch => "Crosshatch",
            Self::Discs => "Discs",
            Self::HorizontalLines => "Horizontal lines",
            Self::Plus => "Plus",
            Self::Rings => "Rings",
            Self::SquareRings => "Square rings",
            Self::Squares => "Squares",
            Self::Stippling => "Stippling",
            Self::VerticalLines => "Vertical lines",
            Self::Xs => "Xs",
        }
    }

    /// Numbered menu entries starting at 1
    pub fn menu() -> impl Iterator<Item = (usize, Self)> {
        Self::ALL
            .into_iter()
            .enumerate()
            .map(|(index, pattern)| (index + 1, pattern))
    }

    /// Pattern listed under menu number `number` (1-based)
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// False only for patterns that consume randomness
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::Stippling)
    }

    /// Draw this pattern for one cell of intensity `avg`
    pub fn draw<R>(self, painter: &mut CellPainter<'_>, avg: f64, flags: PatternFlags, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Crosshatch => tiles::crosshatch(painter, avg, flags.chaotic, flags.adjusted),
            Self::Discs => tiles::discs(painter, avg),
            Self::HorizontalLines => tiles::horizontal_lines(painter, avg),
            Self::Plus => tiles::plus(painter, avg),
            Self::Rings => tiles::rings(painter, avg, flags.adjusted),
            Self::SquareRings => tiles::square_rings(painter, avg),
            Self::Squares => tiles::squares(painter, avg),
            Self::Stippling => {
                tiles::stippling(painter, avg, rng);
            }
            Self::VerticalLines => tiles::vertical_lines(painter, avg),
            Self::Xs => tiles::xs(painter, avg),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Names compare case-insensitively with '-' and '_' standing in for spaces
fn normalise(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a display name (`"Square rings"`, `"square-rings"`) or menu number
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalise(s);
        let by_name = Self::ALL
            .into_iter()
            .find(|pattern| normalise(pattern.name()) == wanted);

        by_name
            .or_else(|| {
                wanted
                    .parse::<usize>()
                    .ok()
                    .and_then(Self::from_menu_number)
            })
            .ok_or_else(|| PatternError::UnknownPatternName {
                name: s.to_string(),
            })
    }
}
