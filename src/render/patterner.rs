//! Grid-driven rendering of a single channel
//!
//! The channel is reduced to an [`IntensityGrid`], then every cell is drawn with
//! the selected pattern onto a white canvas supersampled by the quality factor.

use ndarray::ArrayView2;
use num_traits::ToPrimitive;
use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEFAULT_QUALITY, DEFAULT_SEED};
use crate::io::error::{Result, ensure_cell_size, invalid_parameter};
use crate::patterns::{Pattern, PatternFlags};
use crate::spatial::canvas::{Canvas, Rect};
use crate::spatial::grid::{EdgePolicy, IntensityGrid};

/// Receives progress notifications while channels are rendered
///
/// `channel` is the index of the channel being rendered (0 for grayscale).
/// Implementations must tolerate calls from several threads at once.
pub trait RenderObserver: Sync {
    /// Cell averaging has started
    fn grid_started(&self, _channel: usize) {}

    /// Drawing has started for `rows` rows of cells
    fn drawing_started(&self, _channel: usize, _rows: usize) {}

    /// One row of cells has been drawn
    fn row_drawn(&self, _channel: usize) {}

    /// The channel's canvas is complete
    fn finished(&self, _channel: usize) {}
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl RenderObserver for Silent {}

/// Render settings shared by every channel of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patterner {
    cell_size: usize,
    quality: usize,
    edge_policy: EdgePolicy,
    flags: PatternFlags,
    seed: u64,
}

impl Patterner {
    /// Create a renderer for square cells of `cell_size` source pixels
    ///
    /// Starts with the default quality, crop policy, default flags and seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero
    pub fn new(cell_size: usize) -> Result<Self> {
        Ok(Self {
            cell_size: ensure_cell_size(cell_size)?,
            quality: DEFAULT_QUALITY,
            edge_policy: EdgePolicy::default(),
            flags: PatternFlags::default(),
            seed: DEFAULT_SEED,
        })
    }

    /// Set the supersampling factor
    ///
    /// # Errors
    ///
    /// Returns an error if `quality` is zero
    pub fn with_quality(self, quality: usize) -> Result<Self> {
        if quality == 0 {
            return Err(invalid_parameter(
                "quality",
                &quality,
                &"must be a positive integer",
            ));
        }
        Ok(Self { quality, ..self })
    }

    /// Set how partial trailing cells are treated
    pub const fn with_edge_policy(self, edge_policy: EdgePolicy) -> Self {
        Self {
            edge_policy,
            ..self
        }
    }

    /// Set the pattern flags
    pub const fn with_flags(self, flags: PatternFlags) -> Self {
        Self { flags, ..self }
    }

    /// Set the seed for randomised patterns
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Source cell size in pixels
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Supersampling factor
    pub const fn quality(&self) -> usize {
        self.quality
    }

    /// Edge policy
    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Pattern flags
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Seed for randomised patterns
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Output canvas `(width, height)` for a source of `width × height` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if scaling by the quality factor overflows or the
    /// canvas would hold more pixels than can be addressed
    pub fn canvas_size(&self, width: usize, height: usize) -> Result<(usize, usize)> {
        let canvas_width = self.scaled(self.edge_policy.effective_extent(width, self.cell_size))?;
        let canvas_height = self.scaled(self.edge_policy.effective_extent(height, self.cell_size))?;

        let area = canvas_width.checked_mul(canvas_height);
        if area.is_none_or(|pixels| pixels > isize::MAX as usize) {
            return Err(invalid_parameter(
                "quality",
                &self.quality,
                &format!("a {canvas_width}x{canvas_height} canvas is too large"),
            ));
        }
        Ok((canvas_width, canvas_height))
    }

    /// `length` source pixels in output pixels
    fn scaled(&self, length: usize) -> Result<usize> {
        length.checked_mul(self.quality).ok_or_else(|| {
            invalid_parameter(
                "quality",
                &self.quality,
                &format!("scaling {length} pixels overflows"),
            )
        })
    }

    /// Reduce a channel to its cell averages with these settings
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be reduced
    pub fn grid<T>(&self, pixels: ArrayView2<'_, T>) -> Result<IntensityGrid>
    where
        T: ToPrimitive + Copy,
    {
        IntensityGrid::reduce(pixels, self.cell_size, self.edge_policy)
    }

    /// Render one channel with `pattern`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be reduced or the canvas cannot be sized
    pub fn render<T>(&self, pixels: ArrayView2<'_, T>, pattern: Pattern) -> Result<Canvas>
    where
        T: ToPrimitive + Copy,
    {
        self.render_observed(pixels, pattern, 0, &Silent)
    }

    /// Render one channel, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be reduced or the canvas cannot be sized
    pub fn render_observed<T>(
        &self,
        pixels: ArrayView2<'_, T>,
        pattern: Pattern,
        channel: usize,
        observer: &dyn RenderObserver,
    ) -> Result<Canvas>
    where
        T: ToPrimitive + Copy,
    {
        observer.grid_started(channel);
        let grid = self.grid(pixels)?;
        let (height, width) = pixels.dim();
        let canvas = self.draw(&grid, width, height, pattern, channel, observer)?;
        observer.finished(channel);
        Ok(canvas)
    }

    /// Draw an already reduced grid for a source of `width × height` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or an output cell cannot be sized
    pub fn draw(
        &self,
        grid: &IntensityGrid,
        width: usize,
        height: usize,
        pattern: Pattern,
        channel: usize,
        observer: &dyn RenderObserver,
    ) -> Result<Canvas> {
        let (canvas_width, canvas_height) = self.canvas_size(width, height)?;
        let mut canvas = Canvas::blank(canvas_width, canvas_height);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let cell = self.scaled(self.cell_size)?;

        observer.drawing_started(channel, grid.rows());
        for (j, row) in grid.averages().rows().into_iter().enumerate() {
            for (i, &avg) in row.iter().enumerate() {
                let mut painter = canvas.cell(Rect::cell(i, j, cell));
                pattern.draw(&mut painter, avg, self.flags, &mut rng);
            }
            observer.row_drawn(channel);
        }

        Ok(canvas)
    }
}
