//! Grid reduction from a pixel channel to per-cell average intensities
//!
//! The source channel is partitioned into square cells and each cell is reduced
//! to a single value in `[0, 1]` (0 = darkest, 1 = lightest). How cells that run
//! past the image edge are treated is controlled by [`EdgePolicy`].

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2};
use num_traits::ToPrimitive;

use crate::io::configuration::SAMPLE_MAX;
use crate::io::error::{PatternError, Result, ensure_cell_size};

/// Treatment of the strip of pixels that does not fill a whole cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Truncate to the largest multiple of the cell size; the remainder is ignored
    #[default]
    Crop,
    /// Keep partial cells, padding them with black (0)
    Black,
    /// Keep partial cells, padding them with white (255)
    White,
}

impl EdgePolicy {
    /// All policies in presentation order
    pub const ALL: [Self; 3] = [Self::Crop, Self::Black, Self::White];

    /// Lower-case name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Sample value contributed by pixels outside the image
    ///
    /// `None` for [`EdgePolicy::Crop`], which never reads outside the image.
    pub const fn padding(self) -> Option<f64> {
        match self {
            Self::Crop => None,
            Self::Black => Some(0.0),
            Self::White => Some(SAMPLE_MAX),
        }
    }

    /// Number of cells spanning `extent` pixels
    pub const fn cell_count(self, extent: usize, cell_size: usize) -> usize {
        match self {
            Self::Crop => extent / cell_size,
            Self::Black | Self::White => extent.div_ceil(cell_size),
        }
    }

    /// Pixels along one axis that end up on the canvas
    ///
    /// Cropping truncates to whole cells; the padding policies keep the full
    /// image extent and let trailing cells be clipped by the canvas edge.
    pub const fn effective_extent(self, extent: usize, cell_size: usize) -> usize {
        match self {
            Self::Crop => (extent / cell_size) * cell_size,
            Self::Black | Self::White => extent,
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgePolicy {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PatternError::UnsupportedEdgePolicy {
                value: s.to_string(),
            })
    }
}

/// Per-cell average intensities, indexed `[row, column]`
///
/// Built once per channel per render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    averages: Array2<f64>,
    cell_size: usize,
}

impl IntensityGrid {
    /// Reduce a single-channel image to its cell averages
    ///
    /// `pixels` is indexed `[y, x]` with samples on the 0–255 scale. Every cell
    /// sum is divided by `255 · cell_size²`, so padded cells under
    /// [`EdgePolicy::Black`] or [`EdgePolicy::White`] are averaged over their
    /// full nominal area. A cell size larger than the image under
    /// [`EdgePolicy::Crop`] yields an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidCellSize`] when `cell_size` is zero
    pub fn reduce<T>(pixels: ArrayView2<'_, T>, cell_size: usize, policy: EdgePolicy) -> Result<Self>
    where
        T: ToPrimitive + Copy,
    {
        let cell_size = ensure_cell_size(cell_size)?;
        let (height, width) = pixels.dim();

        let rows = policy.cell_count(height, cell_size);
        let columns = policy.cell_count(width, cell_size);
        let padding = policy.padding().unwrap_or(0.0);
        let cell_area = (cell_size as f64) * (cell_size as f64);
        let normaliser = SAMPLE_MAX * cell_area;
        let covered_width = columns.saturating_mul(cell_size).min(width);

        let mut averages = Array2::zeros((rows, columns));
        let mut sums = vec![0.0_f64; columns];

        // Only in-image pixels are visited; the rest of a padded cell is added in bulk
        for row in 0..rows {
            sums.fill(0.0);
            let top = row * cell_size;
            let bottom = top.saturating_add(cell_size).min(height);

            for y in top..bottom {
                let line = pixels.row(y);
                for (x, sample) in line.iter().take(covered_width).enumerate() {
                    if let Some(sum) = sums.get_mut(x / cell_size) {
                        *sum += sample.to_f64().unwrap_or(padding);
                    }
                }
            }

            for (column, sum) in sums.iter().enumerate() {
                let left = column * cell_size;
                let right = left.saturating_add(cell_size).min(width);
                let inside = ((right - left) * (bottom - top)) as f64;
                if let Some(average) = averages.get_mut([row, column]) {
                    *average = padding.mul_add(cell_area - inside, *sum) / normaliser;
                }
            }
        }

        Ok(Self {
            averages,
            cell_size,
        })
    }

    /// Number of cell rows
    pub fn rows(&self) -> usize {
        self.averages.nrows()
    }

    /// Number of cell columns
    pub fn columns(&self) -> usize {
        self.averages.ncols()
    }

    /// Source cell size the grid was reduced with
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Average of the cell at column `i`, row `j`
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.averages.get([j, i]).copied()
    }

    /// Underlying `[row, column]` array
    pub const fn averages(&self) -> &Array2<f64> {
        &self.averages
    }

    /// Iterate cells in row-major order as `(i, j, average)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.averages
            .indexed_iter()
            .map(|((j, i), &average)| (i, j, average))
    }
}
