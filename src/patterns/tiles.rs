//! Parametric tile generators
//!
//! Each generator maps one normalised cell intensity (0 = dark, 1 = light) to a
//! drawing confined to the painter's cell. Area-based sizing uses a square root
//! so that a mid-grey cell ends up roughly half inked whatever the motif.

use std::f64::consts::FRAC_PI_4;

use rand::Rng;

use crate::io::configuration::{BACKGROUND, INK, STIPPLE_RADIUS};
use crate::spatial::canvas::{CellPainter, Rect};

/// Annulus: a black disc with a white disc punched out of its centre
///
/// The hole radius is `S·√avg / 2`, scaled by `π/4` when `adjusted` so the
/// ring carries the visual weight of a filled disc.
pub fn rings(painter: &mut CellPainter<'_>, avg: f64, adjusted: bool) {
    let cell = painter.bounds();
    let size = painter.size();
    let mut radius = size * avg.sqrt() / 2.0;
    if adjusted {
        radius *= FRAC_PI_4;
    }

    painter.fill_ellipse(cell, INK);
    painter.fill_ellipse(cell.inset(size / 2.0 - radius), BACKGROUND);
}

/// Centred black disc of radius `S·√(1-avg) / 2`
pub fn discs(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let size = painter.size();
    let radius = size * (1.0 - avg).sqrt() / 2.0;

    painter.fill_ellipse(cell.inset(size / 2.0 - radius), INK);
}

/// Centred black square of side `S·√(1-avg)`
pub fn squares(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let size = painter.size();
    let side = size * (1.0 - avg).sqrt();

    painter.fill_rect(cell.inset((size - side) / 2.0), INK);
}

/// Black cell with a centred white square of side `S·√avg`
pub fn square_rings(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let size = painter.size();
    let side = size * avg.sqrt();

    painter.fill_rect(cell, INK);
    painter.fill_rect(cell.inset((size - side) / 2.0), BACKGROUND);
}

/// Full-width band of height `S·(1-avg)`, vertically centred
pub fn horizontal_lines(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let d = cell.height() * avg / 2.0;

    painter.fill_rect(Rect::new(cell.x0, cell.y0 + d, cell.x1, cell.y1 - d), INK);
}

/// Full-height band of width `S·(1-avg)`, horizontally centred
pub fn vertical_lines(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let d = cell.width() * avg / 2.0;

    painter.fill_rect(Rect::new(cell.x0 + d, cell.y0, cell.x1 - d, cell.y1), INK);
}

/// Inset from each side to the base of the cut shapes used by [`xs`] and [`plus`]
fn cross_inset(size: f64, avg: f64) -> f64 {
    size * (1.0 - (1.0 - avg).sqrt()) / 2.0
}

/// Four black triangles pointing at the centre, leaving a white diagonal cross
///
/// Each triangle has its base on one side of the cell, inset by
/// `(S - S·√(1-avg)) / 2` from both corners, and its apex on the centre line.
/// A light cell collapses the triangles to nothing; a black cell is covered
/// completely.
pub fn xs(painter: &mut CellPainter<'_>, avg: f64) {
    let Rect { x0, y0, x1, y1 } = painter.bounds();
    let size = painter.size();
    let d = cross_inset(size, avg);
    let half = size / 2.0;

    painter.fill_polygon(&[(x0 + d, y0), (x1 - d, y0), (x0 + half, y0 + half)], INK);
    painter.fill_polygon(&[(x0, y0 + d), (x0, y1 - d), (x0 + half - d, y0 + half)], INK);
    painter.fill_polygon(&[(x0 + d, y1), (x1 - d, y1), (x0 + half, y1 - half + d)], INK);
    painter.fill_polygon(&[(x1, y0 + d), (x1, y1 - d), (x1 - half + d, y0 + half)], INK);
}

/// Black cell with a white upright cross of arm half-width `(S - S·√(1-avg)) / 2`
pub fn plus(painter: &mut CellPainter<'_>, avg: f64) {
    let cell = painter.bounds();
    let size = painter.size();
    let d = cross_inset(size, avg);
    let (cx, cy) = cell.center();

    painter.fill_rect(cell, INK);
    painter.fill_rect(Rect::new(cx - d, cell.y0, cx + d, cell.y1), BACKGROUND);
    painter.fill_rect(Rect::new(cell.x0, cy - d, cell.x1, cy + d), BACKGROUND);
}

/// Grid of one pixel lines, `round(S·(1-avg)) - 1` in each direction
///
/// With `adjusted` the intensity is first remapped through `log2(avg + 1)`,
/// which lightens mid tones. With `chaotic` the spacing becomes
/// `1/√(1-avg)` instead of spreading the lines evenly, bunching them into the
/// top-left part of the cell.
pub fn crosshatch(painter: &mut CellPainter<'_>, avg: f64, chaotic: bool, adjusted: bool) {
    let cell = painter.bounds();
    let size = painter.size();
    let level = if adjusted { (avg + 1.0).log2() } else { avg };
    let count = (size * (1.0 - level)).round().max(0.0) as usize;
    if count < 2 {
        return;
    }

    let spacing = if chaotic {
        1.0 / (1.0 - level).sqrt()
    } else {
        size / count as f64
    };

    let (visible_width, visible_height) = painter.visible_size();
    let reach = visible_width.max(visible_height) as f64;

    for step in 1..count {
        let offset = step as f64 * spacing;
        if offset >= reach {
            break;
        }
        painter.line((cell.x0 + offset, cell.y0), (cell.x0 + offset, cell.y1), INK);
        painter.line((cell.x0, cell.y0 + offset), (cell.x1, cell.y0 + offset), INK);
    }
}

/// Number of stipple dots for a cell of edge `size` pixels
pub fn stipple_count(size: usize, avg: f64) -> usize {
    dots_for_area(size as f64 * size as f64, avg)
}

fn dots_for_area(area: f64, avg: f64) -> usize {
    ((1.0 - avg) * area / 4.0).round().max(0.0) as usize
}

/// Randomly placed dots, `round((1-avg)·S²/4)` of them
///
/// Placement is drawn from `rng`; the count is deterministic. A cell cut off
/// by the canvas edge only scatters dots over its visible part, at the same
/// density. Returns the number of dots drawn.
pub fn stippling<R>(painter: &mut CellPainter<'_>, avg: f64, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let cell = painter.bounds();
    let (columns, rows) = painter.visible_size();
    if columns == 0 || rows == 0 {
        return 0;
    }

    let dots = dots_for_area(columns as f64 * rows as f64, avg);
    for _ in 0..dots {
        let x = cell.x0 + rng.random_range(0..columns) as f64;
        let y = cell.y0 + rng.random_range(0..rows) as f64;
        let dot = Rect::new(
            x - STIPPLE_RADIUS,
            y - STIPPLE_RADIUS,
            x + STIPPLE_RADIUS,
            y + STIPPLE_RADIUS,
        );
        painter.fill_ellipse(dot, INK);
    }
    dots
}
