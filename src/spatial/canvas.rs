//! Single-channel drawing surface and the fill primitives tiles are made of
//!
//! Shapes are rasterised by pixel-centre sampling: a pixel `(x, y)` is covered
//! when `(x + 0.5, y + 0.5)` falls inside the shape. Every draw goes through a
//! [`CellPainter`], which clips to one cell so neighbouring cells never overlap.

use std::ops::Range;

use ndarray::Array2;

use crate::io::configuration::{BACKGROUND, INK};

/// Axis-aligned rectangle in continuous canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge (exclusive)
    pub x1: f64,
    /// Bottom edge (exclusive)
    pub y1: f64,
}

impl Rect {
    /// Create a rectangle from its corners
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounding box of cell `(i, j)` on a grid of square cells
    pub fn cell(i: usize, j: usize, size: usize) -> Self {
        let x0 = i.saturating_mul(size) as f64;
        let y0 = j.saturating_mul(size) as f64;
        let side = size as f64;
        Self::new(x0, y0, x0 + side, y0 + side)
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Centre point
    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Shrink every side by `d`
    pub fn inset(&self, d: f64) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    /// True when the rectangle encloses no area
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }
}

/// Pixel indices whose centres fall in `[lo, hi)`, clamped to `limit`
fn covered(lo: f64, hi: f64, limit: &Range<usize>) -> Range<usize> {
    if hi <= lo {
        return 0..0;
    }
    let first = (lo - 0.5).ceil().max(0.0) as usize;
    let end = (hi - 0.5).ceil().max(0.0) as usize;
    first.max(limit.start)..end.min(limit.end)
}

/// Rendered output of a single channel, indexed `[y, x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<u8>,
}

impl Canvas {
    /// Create a canvas filled with the background value
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), BACKGROUND),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// True when the canvas has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Value at `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get([y, x]).copied()
    }

    /// Underlying `[y, x]` array
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }

    /// Number of pixels holding the ink value
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&value| value == INK).count()
    }

    /// Number of ink pixels inside `region`
    pub fn ink_count_in(&self, region: Rect) -> usize {
        let xs = covered(region.x0, region.x1, &(0..self.width()));
        let ys = covered(region.y0, region.y1, &(0..self.height()));
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y) == Some(INK))
            .count()
    }

    /// Painter restricted to `bounds`
    pub fn cell(&mut self, bounds: Rect) -> CellPainter<'_> {
        let xs = covered(bounds.x0, bounds.x1, &(0..self.width()));
        let ys = covered(bounds.y0, bounds.y1, &(0..self.height()));
        CellPainter {
            canvas: self,
            bounds,
            xs,
            ys,
        }
    }

    fn set(&mut self, x: usize, y: usize, value: u8) {
        if let Some(pixel) = self.pixels.get_mut([y, x]) {
            *pixel = value;
        }
    }
}

/// Drawing handle confined to one cell of a [`Canvas`]
///
/// Later draws overwrite earlier ones, which is how ring and cross tiles punch
/// background back into an inked area.
pub struct CellPainter<'a> {
    canvas: &'a mut Canvas,
    bounds: Rect,
    xs: Range<usize>,
    ys: Range<usize>,
}

impl CellPainter<'_> {
    /// Cell bounding box in canvas coordinates
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Cell edge length in output pixels
    pub fn size(&self) -> f64 {
        self.bounds.width()
    }

    /// Columns and rows of the cell that lie on the canvas
    pub fn visible_size(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }

    /// Fill an axis-aligned rectangle
    pub fn fill_rect(&mut self, rect: Rect, value: u8) {
        let xs = covered(rect.x0, rect.x1, &self.xs);
        for y in covered(rect.y0, rect.y1, &self.ys) {
            for x in xs.clone() {
                self.canvas.set(x, y, value);
            }
        }
    }

    /// Fill the ellipse inscribed in `rect`
    pub fn fill_ellipse(&mut self, rect: Rect, value: u8) {
        if rect.is_empty() {
            return;
        }
        let (cx, cy) = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;

        let xs = covered(rect.x0, rect.x1, &self.xs);
        for y in covered(rect.y0, rect.y1, &self.ys) {
            let dy = (y as f64 + 0.5 - cy) / ry;
            for x in xs.clone() {
                let dx = (x as f64 + 0.5 - cx) / rx;
                if dx.mul_add(dx, dy * dy) <= 1.0 {
                    self.canvas.set(x, y, value);
                }
            }
        }
    }

    /// Fill a simple polygon using the even-odd rule
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], value: u8) {
        if points.len() < 3 {
            return;
        }
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let xs = covered(min_x, max_x, &self.xs);
        for y in covered(min_y, max_y, &self.ys) {
            for x in xs.clone() {
                if contains(points, x as f64 + 0.5, y as f64 + 0.5) {
                    self.canvas.set(x, y, value);
                }
            }
        }
    }

    /// Draw a one pixel wide segment from `from` towards `to`
    ///
    /// The end point itself is excluded, so a segment spanning the full cell
    /// does not leak into the next one.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), value: u8) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil() as usize;
        let total = steps as f64;

        // Only step through the part of the segment that can land in the cell
        let (mut first, mut last) = (0.0_f64, total);
        for (delta, origin, clip) in [(dx, from.0, &self.xs), (dy, from.1, &self.ys)] {
            let (lo, hi) = (clip.start as f64, clip.end as f64);
            if delta.abs() < f64::EPSILON {
                if origin < lo || origin >= hi {
                    return;
                }
                continue;
            }
            let enter = (lo - origin) / delta * total;
            let leave = (hi - origin) / delta * total;
            first = first.max(enter.min(leave).floor() - 1.0);
            last = last.min(enter.max(leave).ceil() + 1.0);
        }
        if last <= first {
            return;
        }

        for step in first as usize..last as usize {
            let t = step as f64 / steps as f64;
            let x = dx.mul_add(t, from.0).floor();
            let y = dy.mul_add(t, from.1).floor();
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (x, y) = (x as usize, y as usize);
            if self.xs.contains(&x) && self.ys.contains(&y) {
                self.canvas.set(x, y, value);
            }
        }
    }
}

/// Even-odd point-in-polygon test
fn contains(points: &[(f64, f64)], px: f64, py: f64) -> bool {
    let mut inside = false;
    let mut previous = points.last().copied().unwrap_or_default();
    for &current in points {
        let ((x0, y0), (x1, y1)) = (previous, current);
        if (y0 > py) != (y1 > py) {
            let crossing = (x1 - x0) * (py - y0) / (y1 - y0) + x0;
            if px < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}
